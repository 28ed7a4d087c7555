/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error type shared by every requester.
//!
//! Failures fall in two groups: the request did not succeed (transport
//! fault, non-2xx status, bad input) or the payload could not be
//! encoded/decoded. [`AppError::is_request_error`] and
//! [`AppError::is_decode_error`] tell them apart.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure reported by `reqwest`
    Network(reqwest::Error),
    /// The API rejected the credentials (HTTP 401)
    Unauthorized,
    /// The requested resource does not exist (HTTP 404)
    NotFound,
    /// Any other non-2xx response
    Api {
        /// HTTP status returned by the API
        status: StatusCode,
        /// Error message reported by the API, or the raw body
        message: String,
    },
    /// A response or request body could not be (de)serialized
    Json(serde_json::Error),
    /// Search filters could not be flattened into query parameters
    InvalidFilter(String),
    /// Caller supplied an unusable value
    InvalidInput(String),
    /// I/O failure
    Io(std::io::Error),
}

impl AppError {
    /// True when the request itself failed: transport fault, bad status or bad input.
    #[must_use]
    pub fn is_request_error(&self) -> bool {
        !self.is_decode_error()
    }

    /// True when a JSON payload could not be encoded or decoded.
    #[must_use]
    pub fn is_decode_error(&self) -> bool {
        matches!(self, AppError::Json(_) | AppError::InvalidFilter(_))
    }

    /// HTTP status associated with the error, when there is one
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            AppError::NotFound => Some(StatusCode::NOT_FOUND),
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::Api { status, message } => write!(f, "api error {status}: {message}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::InvalidFilter(msg) => write!(f, "invalid filter: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error)
    }
}

/// Result alias used across the crate
pub type PersyResult<T> = Result<T, AppError>;
