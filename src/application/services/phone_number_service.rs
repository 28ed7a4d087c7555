use crate::application::interfaces::phone_number::AvailablePhoneNumberService;
use crate::constants::AVAILABLE_PHONE_NUMBERS_PATH_HEAD;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::AvailablePhoneNumberSearchFilters;
use crate::model::responses::AvailablePhoneNumberList;
use crate::model::utils::{construct_absolute_path, to_query_map};
use async_trait::async_trait;
use tracing::{debug, info};

/// Requester for `/AvailablePhoneNumbers`
#[derive(Debug, Clone)]
pub struct AvailablePhoneNumberRequester {
    client: HttpClient,
    acting_account_id: String,
    path: String,
}

impl AvailablePhoneNumberRequester {
    /// Creates a requester acting as `acting_account_id`
    pub fn new(client: HttpClient, acting_account_id: &str) -> Self {
        Self {
            client,
            acting_account_id: acting_account_id.to_string(),
            path: construct_absolute_path(AVAILABLE_PHONE_NUMBERS_PATH_HEAD),
        }
    }

    /// Account this requester acts as
    pub fn acting_account_id(&self) -> &str {
        &self.acting_account_id
    }

    /// Collection path used in requests
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Underlying HTTP client
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Points this requester at another instance of the API
    pub fn set_base_url(&mut self, base_url: &str) {
        self.client.set_base_url(base_url);
    }
}

#[async_trait]
impl AvailablePhoneNumberService for AvailablePhoneNumberRequester {
    async fn list(&self) -> Result<AvailablePhoneNumberList, AppError> {
        info!("Listing available phone numbers");
        let result: AvailablePhoneNumberList = self.client.get(&self.path).await?;
        debug!("Available phone numbers obtained: {}", result.len());
        Ok(result)
    }

    async fn list_with_filters(
        &self,
        filters: &AvailablePhoneNumberSearchFilters,
    ) -> Result<AvailablePhoneNumberList, AppError> {
        info!("Searching available phone numbers: {}", filters);
        let query = to_query_map(filters)?;
        let result: AvailablePhoneNumberList =
            self.client.get_with_query(&self.path, &query).await?;
        debug!("Available phone numbers obtained: {}", result.len());
        Ok(result)
    }
}
