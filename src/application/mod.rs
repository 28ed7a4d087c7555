/// Application configuration module
pub mod config;
/// Service interfaces implemented by the requesters
pub mod interfaces;
/// Resource requesters
pub mod services;
