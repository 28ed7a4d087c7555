//! # Persephony Client
//!
//! Asynchronous client for the Persephony telephony REST API.
//!
//! Every resource is reached through a *requester*: an object that knows the
//! path of one resource collection and issues authenticated HTTP calls
//! against it. All requesters share one request pipeline
//! ([`model::http::HttpClient`]): path resolution, HTTP Basic Auth, a single
//! request and JSON decoding into a typed resource or a
//! [`model::responses::PaginatedList`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use persephony_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! setup_logger();
//! let config = Config::new();
//! let client = HttpClient::new(&config)?;
//!
//! let account_id = config.credentials.account_id.clone();
//! let participants = ParticipantsRequester::for_conference(client.clone(), &account_id, "CF123");
//! let list = participants.list().await?;
//! for participant in list.iter() {
//!     info!("participant {}", participant.call_id);
//! }
//!
//! let muted = participants
//!     .update("CA456", &ParticipantUpdateOptions::new().with_talk(false))
//!     .await?;
//! info!("talk is now {:?}", muted.talk);
//!
//! let numbers = AvailablePhoneNumberRequester::new(client, &account_id);
//! let found = numbers
//!     .list_with_filters(&AvailablePhoneNumberSearchFilters::new().with_region("IL"))
//!     .await?;
//! info!("{} numbers available", found.total);
//! # Ok(())
//! # }
//! ```

/// Configuration, interfaces and requesters
pub mod application;
/// Global constants
pub mod constants;
/// Error type
pub mod error;
/// Request pipeline and data models
pub mod model;
/// Commonly used imports
pub mod prelude;
/// Environment and logging utilities
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
