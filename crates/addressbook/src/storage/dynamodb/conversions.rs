//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and contacts.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use addressbook_core::contact::{Contact, ContactDetails};
use addressbook_core::storage::RepositoryError;
use aws_sdk_dynamodb::types::AttributeValue;

// ============================================================================
// Attribute names
// ============================================================================

pub const PHONE: &str = "phone";
pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const EMAIL: &str = "email";
pub const NOTES: &str = "notes";

/// Condition that only lets a put through when the phone is free.
pub const PHONE_ABSENT: &str = "attribute_not_exists(phone)";

/// Condition that only lets an update or delete through when the phone is taken.
pub const PHONE_PRESENT: &str = "attribute_exists(phone)";

/// Sets every non-key attribute; paired with [`details_to_values`].
pub const UPDATE_DETAILS_EXPRESSION: &str =
    "SET firstName = :firstName, lastName = :lastName, email = :email, notes = :notes";

// ============================================================================
// Contact conversions
// ============================================================================

/// Convert a Contact to DynamoDB item. Absent optional fields are not written.
pub fn contact_to_item(contact: &Contact) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(PHONE.to_string(), AttributeValue::S(contact.phone.clone()));

    let optional = [
        (FIRST_NAME, &contact.first_name),
        (LAST_NAME, &contact.last_name),
        (EMAIL, &contact.email),
        (NOTES, &contact.notes),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            item.insert(name.to_string(), AttributeValue::S(value.clone()));
        }
    }

    item
}

/// Convert a DynamoDB item to Contact.
pub fn item_to_contact(item: &HashMap<String, AttributeValue>) -> Result<Contact, RepositoryError> {
    Ok(Contact {
        phone: get_string(item, PHONE)?,
        first_name: get_optional_string(item, FIRST_NAME),
        last_name: get_optional_string(item, LAST_NAME),
        email: get_optional_string(item, EMAIL),
        notes: get_optional_string(item, NOTES),
    })
}

/// Build the key map for a phone number.
pub fn phone_key(phone: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(PHONE.to_string(), AttributeValue::S(phone.to_string()))])
}

/// Expression attribute values for [`UPDATE_DETAILS_EXPRESSION`].
pub fn details_to_values(details: &ContactDetails) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            ":firstName".to_string(),
            AttributeValue::S(details.first_name.clone()),
        ),
        (
            ":lastName".to_string(),
            AttributeValue::S(details.last_name.clone()),
        ),
        (":email".to_string(), AttributeValue::S(details.email.clone())),
        (":notes".to_string(), AttributeValue::S(details.notes.clone())),
    ])
}

// ============================================================================
// Helper functions
// ============================================================================

fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contact() -> Contact {
        Contact::new("555-0100").with_details(ContactDetails::new(
            "Ada",
            "Lovelace",
            "ada@example.com",
            "analytical engine",
        ))
    }

    #[test]
    fn test_contact_round_trip() {
        let contact = sample_contact();
        let item = contact_to_item(&contact);
        let parsed = item_to_contact(&item).unwrap();

        assert_eq!(contact, parsed);
    }

    #[test]
    fn test_contact_item_uses_wire_attribute_names() {
        let item = contact_to_item(&sample_contact());

        assert_eq!(item.len(), 5);
        assert_eq!(item.get("phone").unwrap().as_s().unwrap(), "555-0100");
        assert_eq!(item.get("firstName").unwrap().as_s().unwrap(), "Ada");
        assert_eq!(item.get("lastName").unwrap().as_s().unwrap(), "Lovelace");
        assert_eq!(
            item.get("email").unwrap().as_s().unwrap(),
            "ada@example.com"
        );
        assert_eq!(
            item.get("notes").unwrap().as_s().unwrap(),
            "analytical engine"
        );
    }

    #[test]
    fn test_phone_only_contact_writes_only_key() {
        let item = contact_to_item(&Contact::new("555-0100"));

        assert_eq!(item.len(), 1);
        assert_eq!(item_to_contact(&item).unwrap(), Contact::new("555-0100"));
    }

    #[test]
    fn test_item_without_phone_is_invalid() {
        let mut item = contact_to_item(&sample_contact());
        item.remove(PHONE);

        let err = item_to_contact(&item).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::InvalidData("Missing or invalid field: phone".to_string())
        );
    }

    #[test]
    fn test_non_string_optional_field_is_ignored() {
        let mut item = contact_to_item(&Contact::new("555-0100"));
        item.insert(NOTES.to_string(), AttributeValue::N("42".to_string()));

        assert_eq!(item_to_contact(&item).unwrap().notes, None);
    }

    #[test]
    fn test_details_to_values_match_update_expression() {
        let values = details_to_values(&ContactDetails::new("A2", "B2", "a2@b.com", "y"));

        assert_eq!(values.len(), 4);
        for placeholder in values.keys() {
            assert!(UPDATE_DETAILS_EXPRESSION.contains(placeholder.as_str()));
        }
        assert_eq!(values[":firstName"].as_s().unwrap(), "A2");
        assert_eq!(values[":notes"].as_s().unwrap(), "y");
    }

    #[test]
    fn test_phone_key() {
        let key = phone_key("555-0100");

        assert_eq!(key.len(), 1);
        assert_eq!(key["phone"].as_s().unwrap(), "555-0100");
    }
}
