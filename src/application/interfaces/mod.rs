/// Conference participants service interface
pub mod participant;
/// Available phone numbers service interface
pub mod phone_number;
