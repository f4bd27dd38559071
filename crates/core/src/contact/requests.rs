//! Request payload parsing.
//!
//! Gateway bodies arrive as raw JSON text. These functions turn them into
//! typed payloads and report what was wrong when they can't.

use serde::de::DeserializeOwned;

use super::error::RequestError;
use super::types::{Contact, ContactDetails};

/// Parses the body of a create request. `phone` is the only required field.
pub fn parse_create_body(body: Option<&str>) -> Result<Contact, RequestError> {
    parse_body(body)
}

/// Parses the body of an update request. All four non-key fields are required.
///
/// A `phone` in the body is ignored; the key always comes from the query string.
pub fn parse_update_body(body: Option<&str>) -> Result<ContactDetails, RequestError> {
    parse_body(body)
}

fn parse_body<T: DeserializeOwned>(body: Option<&str>) -> Result<T, RequestError> {
    let body = body
        .filter(|b| !b.trim().is_empty())
        .ok_or(RequestError::MissingBody)?;
    serde_json::from_str(body).map_err(|e| RequestError::InvalidBody(e.to_string()))
}
