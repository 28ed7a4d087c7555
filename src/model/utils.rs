/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{ACCOUNTS_PATH_HEAD, CONFERENCES_PATH_HEAD};
use crate::error::AppError;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Joins `segment` onto `parent` with a single `/`
///
/// # Example
/// ```
/// use persephony_client::model::utils::construct_path;
/// assert_eq!(construct_path("/Accounts/AC1", "Calls"), "/Accounts/AC1/Calls");
/// ```
pub fn construct_path(parent: &str, segment: &str) -> String {
    format!(
        "{}/{}",
        parent.trim_end_matches('/'),
        segment.trim_start_matches('/')
    )
}

/// Builds a path rooted at the API base, e.g. `/AvailablePhoneNumbers`
pub fn construct_absolute_path(segment: &str) -> String {
    construct_path("", segment)
}

/// `/Accounts/{account_id}`
pub fn account_path(account_id: &str) -> String {
    construct_path(&construct_absolute_path(ACCOUNTS_PATH_HEAD), account_id)
}

/// `/Accounts/{account_id}/Conferences/{conference_id}`
pub fn conference_path(account_id: &str, conference_id: &str) -> String {
    let conferences = construct_path(&account_path(account_id), CONFERENCES_PATH_HEAD);
    construct_path(&conferences, conference_id)
}

/// Flattens a filters object into string query parameters
///
/// The filters are JSON-encoded first. Strings are kept verbatim, numbers and
/// booleans become their JSON text and `null` entries are dropped. Anything
/// that is not a flat JSON object is rejected.
pub fn to_query_map<F: Serialize>(filters: &F) -> Result<BTreeMap<String, String>, AppError> {
    let encoded = serde_json::to_value(filters)?;
    let object = match encoded {
        Value::Object(object) => object,
        Value::Null => return Ok(BTreeMap::new()),
        other => {
            return Err(AppError::InvalidFilter(format!(
                "filters must encode to a JSON object, got {other}"
            )));
        }
    };

    let mut query = BTreeMap::new();
    for (key, value) in object {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(AppError::InvalidFilter(format!(
                    "filter `{key}` is not a scalar value"
                )));
            }
        };
        query.insert(key, value);
    }
    Ok(query)
}
