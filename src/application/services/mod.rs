/// Module containing the conference participants requester
pub mod participant_service;
/// Module containing the available phone numbers requester
pub mod phone_number_service;

pub use crate::application::interfaces::participant::*;
pub use crate::application::interfaces::phone_number::*;
pub use participant_service::ParticipantsRequester;
pub use phone_number_service::AvailablePhoneNumberRequester;
