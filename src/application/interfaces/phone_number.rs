use crate::error::AppError;
use crate::model::requests::AvailablePhoneNumberSearchFilters;
use crate::model::responses::AvailablePhoneNumberList;
use async_trait::async_trait;

/// Interface for the available phone numbers service (read only)
#[async_trait]
pub trait AvailablePhoneNumberService: Send + Sync {
    /// Lists phone numbers available for purchase
    async fn list(&self) -> Result<AvailablePhoneNumberList, AppError>;

    /// Lists phone numbers available for purchase matching `filters`
    async fn list_with_filters(
        &self,
        filters: &AvailablePhoneNumberSearchFilters,
    ) -> Result<AvailablePhoneNumberList, AppError>;
}
