/// Default root of the Persephony REST API
pub const DEFAULT_BASE_URL: &str = "https://www.persephony.com/apiserver";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client to the Persephony API
pub const USER_AGENT: &str = concat!("persephony-client/", env!("CARGO_PKG_VERSION"));
/// Path segment of the account collection
pub const ACCOUNTS_PATH_HEAD: &str = "Accounts";
/// Path segment of the conference collection under an account
pub const CONFERENCES_PATH_HEAD: &str = "Conferences";
/// Path segment of the participant collection under a conference
pub const PARTICIPANTS_PATH_HEAD: &str = "Participants";
/// Path segment of the available phone number collection
pub const AVAILABLE_PHONE_NUMBERS_PATH_HEAD: &str = "AvailablePhoneNumbers";
/// Placeholder used when no account id is configured
pub const DEFAULT_ACCOUNT_ID: &str = "default_account_id";
/// Placeholder used when no auth token is configured
pub const DEFAULT_AUTH_TOKEN: &str = "default_auth_token";
