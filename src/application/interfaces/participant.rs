use crate::error::AppError;
use crate::model::requests::{ParticipantUpdateOptions, ParticipantsSearchFilters};
use crate::model::responses::{Participant, ParticipantList};
use async_trait::async_trait;

/// Interface for the conference participants service
#[async_trait]
pub trait ParticipantService: Send + Sync {
    /// Lists every participant of the conference
    async fn list(&self) -> Result<ParticipantList, AppError>;

    /// Lists the participants of the conference matching `filters`
    ///
    /// # Arguments
    /// * `filters` - Talk/listen filters, sent as query parameters
    async fn list_with_filters(
        &self,
        filters: &ParticipantsSearchFilters,
    ) -> Result<ParticipantList, AppError>;

    /// Gets a single participant by the call id of its leg
    async fn get(&self, call_id: &str) -> Result<Participant, AppError>;

    /// Changes the talk/listen permissions of a participant
    ///
    /// # Returns
    /// * The participant as updated by the API
    async fn update(
        &self,
        call_id: &str,
        options: &ParticipantUpdateOptions,
    ) -> Result<Participant, AppError>;

    /// Removes a participant from the conference
    async fn remove(&self, call_id: &str) -> Result<(), AppError>;
}
