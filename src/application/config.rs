use crate::constants::{
    DEFAULT_ACCOUNT_ID, DEFAULT_AUTH_TOKEN, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Authentication credentials for the Persephony API
///
/// Sent as HTTP Basic Auth on every request.
pub struct Credentials {
    /// Account id of the credential owner
    pub account_id: String,
    /// Auth token paired with `account_id`
    pub auth_token: String,
}

impl Credentials {
    /// Creates a new set of credentials
    pub fn new(account_id: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            auth_token: auth_token.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("auth_token", &"***")
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Persephony REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the Persephony API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment (and `.env`, when present)
    ///
    /// Recognised variables: `PERSEPHONY_ACCOUNT_ID`, `PERSEPHONY_AUTH_TOKEN`,
    /// `PERSEPHONY_BASE_URL` and `PERSEPHONY_TIMEOUT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let account_id =
            get_env_or_default("PERSEPHONY_ACCOUNT_ID", String::from(DEFAULT_ACCOUNT_ID));
        let auth_token =
            get_env_or_default("PERSEPHONY_AUTH_TOKEN", String::from(DEFAULT_AUTH_TOKEN));

        if account_id == DEFAULT_ACCOUNT_ID {
            error!("PERSEPHONY_ACCOUNT_ID not found in environment variables or .env file");
        }
        if auth_token == DEFAULT_AUTH_TOKEN {
            error!("PERSEPHONY_AUTH_TOKEN not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                account_id,
                auth_token,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "PERSEPHONY_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("PERSEPHONY_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Builds a configuration from explicit credentials without reading the environment
    pub fn with_credentials(account_id: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Config {
            credentials: Credentials::new(account_id, auth_token),
            rest_api: RestApiConfig::default(),
        }
    }

    /// Replaces the REST API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Replaces the REST API timeout (seconds)
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }
}
