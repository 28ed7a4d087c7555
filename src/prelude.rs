/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Persephony Client Prelude
//!
//! Brings the configuration, the requesters and their models into scope:
//!
//! ```rust
//! use persephony_client::prelude::*;
//!
//! let config = Config::with_credentials("AC123", "token");
//! let client = HttpClient::new(&config).unwrap();
//! let numbers = AvailablePhoneNumberRequester::new(client, "AC123");
//! assert_eq!(numbers.path(), "/AvailablePhoneNumbers");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Persephony API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, PersyResult};

// ============================================================================
// TRANSPORT
// ============================================================================

/// Authenticated HTTP client shared by the requesters
pub use crate::model::http::HttpClient;

// ============================================================================
// REQUESTERS
// ============================================================================

/// Service traits
pub use crate::application::interfaces::participant::ParticipantService;
pub use crate::application::interfaces::phone_number::AvailablePhoneNumberService;

/// Requester implementations
pub use crate::application::services::{AvailablePhoneNumberRequester, ParticipantsRequester};

// ============================================================================
// MODELS
// ============================================================================

/// Filters and update options
pub use crate::model::requests::{
    AvailablePhoneNumberSearchFilters, ParticipantUpdateOptions, ParticipantsSearchFilters,
};

/// Resources and lists
pub use crate::model::responses::{
    AvailablePhoneNumber, AvailablePhoneNumberList, ListItem, PaginatedList, Participant,
    ParticipantList,
};

/// Path helpers
pub use crate::model::utils::{
    account_path, conference_path, construct_absolute_path, construct_path, to_query_map,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tracing::{debug, error, info, warn};
