/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Filters for listing the participants of a conference
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantsSearchFilters {
    /// Only participants that can (or cannot) talk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub talk: Option<bool>,
    /// Only participants that can (or cannot) listen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen: Option<bool>,
}

impl ParticipantsSearchFilters {
    /// Creates empty filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the talk filter
    pub fn with_talk(mut self, talk: bool) -> Self {
        self.talk = Some(talk);
        self
    }

    /// Set the listen filter
    pub fn with_listen(mut self, listen: bool) -> Self {
        self.listen = Some(listen);
        self
    }
}

/// Changes applied to a conference participant
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantUpdateOptions {
    /// Whether the participant may speak in the conference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub talk: Option<bool>,
    /// Whether the participant hears the conference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen: Option<bool>,
}

impl ParticipantUpdateOptions {
    /// Creates options that change nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the talk permission
    pub fn with_talk(mut self, talk: bool) -> Self {
        self.talk = Some(talk);
        self
    }

    /// Set the listen permission
    pub fn with_listen(mut self, listen: bool) -> Self {
        self.listen = Some(listen);
        self
    }
}

/// Filters for searching the phone numbers available for purchase
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailablePhoneNumberSearchFilters {
    /// Friendly name pattern
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Phone number pattern, e.g. `+1847`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// State or province code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Two character country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Only numbers that do (or do not) support voice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_enabled: Option<bool>,
    /// Only numbers that do (or do not) support SMS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_enabled: Option<bool>,
    /// Maximum number of results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl AvailablePhoneNumberSearchFilters {
    /// Creates empty filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alias pattern
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    /// Set the phone number pattern
    pub fn with_phone_number(mut self, phone_number: &str) -> Self {
        self.phone_number = Some(phone_number.to_string());
        self
    }

    /// Set the region
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    /// Set the country
    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    /// Set the voice capability filter
    pub fn with_voice_enabled(mut self, voice_enabled: bool) -> Self {
        self.voice_enabled = Some(voice_enabled);
        self
    }

    /// Set the SMS capability filter
    pub fn with_sms_enabled(mut self, sms_enabled: bool) -> Self {
        self.sms_enabled = Some(sms_enabled);
        self
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}
