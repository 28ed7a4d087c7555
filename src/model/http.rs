/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Authenticated request pipeline shared by every requester.
//!
//! Each call builds an absolute URL, attaches HTTP Basic Auth, sends a
//! single request and decodes the JSON answer. There is no retry: a
//! failure is mapped to [`AppError`] and returned to the caller.

use crate::application::config::{Config, Credentials};
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::responses::PersyErrorBody;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, error};

/// HTTP client for the Persephony REST API
///
/// Cloning is cheap: the underlying connection pool is shared, while the
/// credentials and base URL are owned by each clone.
#[derive(Clone)]
pub struct HttpClient {
    http_client: Client,
    credentials: Credentials,
    base_url: String,
}

impl HttpClient {
    /// Creates a new client from the given configuration
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use
    /// * `Err(AppError)` - If the underlying `reqwest` client cannot be built
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            credentials: config.credentials.clone(),
            base_url: normalize_base_url(&config.rest_api.base_url),
        })
    }

    /// Account id used for authentication
    pub fn credential_account_id(&self) -> &str {
        &self.credentials.account_id
    }

    /// Auth token used for authentication
    pub fn credential_auth_token(&self) -> &str {
        &self.credentials.auth_token
    }

    /// API root this client points to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Points this client at another instance of the API
    pub fn set_base_url(&mut self, base_url: &str) {
        self.base_url = normalize_base_url(base_url);
    }

    /// Resolves `path` against the base URL; absolute URLs pass through
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Makes a GET request and decodes the JSON answer
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let request = self.request(Method::GET, path);
        let response = self.send(Method::GET, path, request).await?;
        parse_response(response).await
    }

    /// Makes a GET request with query parameters and decodes the JSON answer
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &BTreeMap<String, String>,
    ) -> Result<T, AppError> {
        let request = self.request(Method::GET, path).query(query);
        let response = self.send(Method::GET, path, request).await?;
        parse_response(response).await
    }

    /// Makes a POST request with a JSON body and decodes the JSON answer
    ///
    /// The body is the `serde_json` encoding of `body`, sent as-is.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let payload = serde_json::to_string(body)?;
        let request = self
            .request(Method::POST, path)
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        let response = self.send(Method::POST, path, request).await?;
        parse_response(response).await
    }

    /// Makes a DELETE request, discarding any response body
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let request = self.request(Method::DELETE, path);
        self.send(Method::DELETE, path, request).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client
            .request(method, self.url(path))
            .basic_auth(
                &self.credentials.account_id,
                Some(&self.credentials.auth_token),
            )
            .header(ACCEPT, "application/json")
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Response, AppError> {
        debug!("{} {}", method, self.url(path));
        let response = request.send().await.map_err(|e| {
            error!("{} {} failed: {}", method, path, e);
            AppError::from(e)
        })?;
        let status = response.status();
        debug!("Response status: {}", status);
        check_status(response).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Maps a non-2xx response to the matching `AppError`
async fn check_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    match status {
        StatusCode::UNAUTHORIZED => {
            error!("Unauthorized: {}", body);
            Err(AppError::Unauthorized)
        }
        StatusCode::NOT_FOUND => {
            error!("Not found: {}", body);
            Err(AppError::NotFound)
        }
        _ => {
            error!("Request failed with status {}: {}", status, body);
            Err(AppError::Api {
                status,
                message: error_message(&body),
            })
        }
    }
}

/// Extracts the `message` member of an API error body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<PersyErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| body.to_string())
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        error!("Failed to decode response: {}", e);
        AppError::Json(e)
    })
}
