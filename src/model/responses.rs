/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::http::HttpClient;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::de::{DeserializeOwned, Error as DeError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// A participant of a conference
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Path of this participant relative to the API root
    #[serde(default)]
    pub uri: Option<String>,
    /// Creation date as reported by the API
    #[serde(default)]
    pub date_created: Option<String>,
    /// Last update date as reported by the API
    #[serde(default)]
    pub date_updated: Option<String>,
    /// Revision counter, incremented on every change
    #[serde(default)]
    pub revision: Option<u64>,
    /// Account that owns the conference
    #[serde(default)]
    pub account_id: Option<String>,
    /// Conference the participant belongs to
    #[serde(default)]
    pub conference_id: Option<String>,
    /// Call id of the participant's leg; identifies the participant
    pub call_id: String,
    /// Whether the participant may speak
    #[serde(default)]
    pub talk: Option<bool>,
    /// Whether the participant hears the conference
    #[serde(default)]
    pub listen: Option<bool>,
    /// Whether the conference starts when this participant enters
    #[serde(default)]
    pub start_conf_on_enter: Option<bool>,
}

/// A phone number that can be purchased
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailablePhoneNumber {
    /// Number in E.164 format
    pub phone_number: String,
    /// Human readable form of the number
    #[serde(default)]
    pub friendly_name: Option<String>,
    /// State or province
    #[serde(default)]
    pub region: Option<String>,
    /// Two character country code
    #[serde(default)]
    pub country: Option<String>,
    /// Voice capable
    #[serde(default)]
    pub voice_enabled: Option<bool>,
    /// SMS capable
    #[serde(default)]
    pub sms_enabled: Option<bool>,
}

/// Resources that are returned inside a paginated list
///
/// `LIST_KEY` is the JSON member holding the page's array.
pub trait ListItem: DeserializeOwned + Send {
    /// Name of the array member in the list response
    const LIST_KEY: &'static str;
}

impl ListItem for Participant {
    const LIST_KEY: &'static str = "participants";
}

impl ListItem for AvailablePhoneNumber {
    const LIST_KEY: &'static str = "availablePhoneNumbers";
}

/// Error body returned by the API on failures
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersyErrorBody {
    /// Numeric error code
    #[serde(default)]
    pub code: Option<i64>,
    /// Short description of the failure
    #[serde(default)]
    pub message: Option<String>,
    /// Link to further documentation
    #[serde(default)]
    pub info: Option<String>,
}

/// One page of a Persephony list response
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedList<T> {
    /// Total number of resources across all pages
    pub total: u64,
    /// Index of the first resource of this page
    pub start: u64,
    /// Index of the last resource of this page
    pub end: u64,
    /// Zero based page number
    pub page: u64,
    /// Number of pages
    pub num_pages: u64,
    /// Maximum number of resources per page
    pub page_size: u64,
    /// Path of the next page, absent on the last page
    pub next_page_uri: Option<String>,
    /// Resources of this page
    pub items: Vec<T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPage {
    #[serde(default)]
    total: u64,
    #[serde(default)]
    start: u64,
    #[serde(default)]
    end: u64,
    #[serde(default)]
    page: u64,
    #[serde(default)]
    num_pages: u64,
    #[serde(default)]
    page_size: u64,
    #[serde(default)]
    next_page_uri: Option<String>,
    #[serde(flatten)]
    members: Map<String, Value>,
}

impl<'de, T: ListItem> Deserialize<'de> for PaginatedList<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut raw = RawPage::deserialize(deserializer)?;
        let items = match raw.members.remove(T::LIST_KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(array) => serde_json::from_value(array).map_err(D::Error::custom)?,
        };
        Ok(PaginatedList {
            total: raw.total,
            start: raw.start,
            end: raw.end,
            page: raw.page,
            num_pages: raw.num_pages,
            page_size: raw.page_size,
            next_page_uri: raw.next_page_uri.filter(|uri| !uri.is_empty()),
            items,
        })
    }
}

impl<T: ListItem> PaginatedList<T> {
    /// Number of resources on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when this page holds no resources
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the resources of this page
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the page, keeping only its resources
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// True when the API reported a further page
    pub fn has_next_page(&self) -> bool {
        self.next_page_uri.is_some()
    }

    /// Fetches the page after this one, or `None` on the last page
    pub async fn next_page(&self, client: &HttpClient) -> Result<Option<PaginatedList<T>>, AppError> {
        match &self.next_page_uri {
            Some(uri) => {
                debug!("Loading page {} of {}", self.page + 1, self.num_pages);
                Ok(Some(client.get::<PaginatedList<T>>(uri).await?))
            }
            None => Ok(None),
        }
    }

    /// Walks every remaining page and returns all resources in order
    pub async fn collect_all(self, client: &HttpClient) -> Result<Vec<T>, AppError> {
        let mut next = self.next_page(client).await?;
        let mut items = self.items;
        while let Some(page) = next {
            next = page.next_page(client).await?;
            items.extend(page.items);
        }
        Ok(items)
    }
}

impl<T> IntoIterator for PaginatedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Paginated list of conference participants
pub type ParticipantList = PaginatedList<Participant>;

/// Paginated list of phone numbers available for purchase
pub type AvailablePhoneNumberList = PaginatedList<AvailablePhoneNumber>;
