use crate::application::interfaces::participant::ParticipantService;
use crate::constants::PARTICIPANTS_PATH_HEAD;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{ParticipantUpdateOptions, ParticipantsSearchFilters};
use crate::model::responses::{Participant, ParticipantList};
use crate::model::utils::{conference_path, construct_path, to_query_map};
use async_trait::async_trait;
use tracing::{debug, info};

/// Requester for the participants of one conference
///
/// Wraps `/Accounts/{accountId}/Conferences/{conferenceId}/Participants`.
#[derive(Debug, Clone)]
pub struct ParticipantsRequester {
    client: HttpClient,
    acting_account_id: String,
    path: String,
}

impl ParticipantsRequester {
    /// Creates a requester under the given conference path
    ///
    /// # Arguments
    /// * `client` - Authenticated HTTP client
    /// * `acting_account_id` - Account to act as; the credential owner or one of its subaccounts
    /// * `conference_path` - Path of the parent conference
    pub fn new(client: HttpClient, acting_account_id: &str, conference_path: &str) -> Self {
        Self {
            client,
            acting_account_id: acting_account_id.to_string(),
            path: construct_path(conference_path, PARTICIPANTS_PATH_HEAD),
        }
    }

    /// Creates a requester for `conference_id` owned by the acting account
    pub fn for_conference(client: HttpClient, acting_account_id: &str, conference_id: &str) -> Self {
        let parent = conference_path(acting_account_id, conference_id);
        Self::new(client, acting_account_id, &parent)
    }

    /// Account this requester acts as
    pub fn acting_account_id(&self) -> &str {
        &self.acting_account_id
    }

    /// Collection path used in requests
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Underlying HTTP client, e.g. to walk further pages of a list
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Points this requester at another instance of the API
    pub fn set_base_url(&mut self, base_url: &str) {
        self.client.set_base_url(base_url);
    }

    fn participant_path(&self, call_id: &str) -> String {
        construct_path(&self.path, call_id)
    }
}

#[async_trait]
impl ParticipantService for ParticipantsRequester {
    async fn list(&self) -> Result<ParticipantList, AppError> {
        info!("Listing participants");
        let result: ParticipantList = self.client.get(&self.path).await?;
        debug!("Participants obtained: {} of {}", result.len(), result.total);
        Ok(result)
    }

    async fn list_with_filters(
        &self,
        filters: &ParticipantsSearchFilters,
    ) -> Result<ParticipantList, AppError> {
        info!("Listing participants with filters: {}", filters);
        let query = to_query_map(filters)?;
        let result: ParticipantList = self.client.get_with_query(&self.path, &query).await?;
        debug!("Participants obtained: {} of {}", result.len(), result.total);
        Ok(result)
    }

    async fn get(&self, call_id: &str) -> Result<Participant, AppError> {
        debug!("Getting participant {}", call_id);
        self.client.get(&self.participant_path(call_id)).await
    }

    async fn update(
        &self,
        call_id: &str,
        options: &ParticipantUpdateOptions,
    ) -> Result<Participant, AppError> {
        info!("Updating participant {}", call_id);
        self.client
            .post(&self.participant_path(call_id), options)
            .await
    }

    async fn remove(&self, call_id: &str) -> Result<(), AppError> {
        info!("Removing participant {}", call_id);
        self.client.delete(&self.participant_path(call_id)).await
    }
}
