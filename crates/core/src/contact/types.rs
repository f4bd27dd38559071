use serde::{Deserialize, Serialize};

/// An address book contact, keyed by its phone number.
///
/// Only `phone` is required. Optional fields that were never supplied are
/// left out of the stored item and of the serialized record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Contact {
    /// Creates a contact with only the phone number set.
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            first_name: None,
            last_name: None,
            email: None,
            notes: None,
        }
    }

    /// Builder form of [`Contact::apply`].
    pub fn with_details(mut self, details: ContactDetails) -> Self {
        self.apply(details);
        self
    }

    /// Overwrites all four non-key fields. Nothing is merged.
    pub fn apply(&mut self, details: ContactDetails) {
        self.first_name = Some(details.first_name);
        self.last_name = Some(details.last_name);
        self.email = Some(details.email);
        self.notes = Some(details.notes);
    }
}

/// The non-key fields of a contact, all required.
///
/// This is the shape written by an update: every field is set, so a field
/// missing from the payload never keeps its previous value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub notes: String,
}

impl ContactDetails {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            notes: notes.into(),
        }
    }
}
