//! Contact CRUD handlers.
//!
//! Each handler makes its repository calls and turns every outcome into a
//! gateway response. Store errors never escape as faults.

use addressbook_core::contact::{Contact, ContactDetails};
use addressbook_core::gateway::build_response;
use addressbook_core::storage::{ContactRepository, RepositoryError};
use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;

pub const CONTACT_ADDED: &str = "Contact added successfully!";
pub const CONTACT_EXISTS: &str = "Error: Contact already exists!";
pub const CREATE_FAILED: &str = "Error in adding new contact";

pub const CONTACT_NOT_FOUND: &str = "Contact not found";
pub const GET_FAILED: &str = "Error in retrieving contact";

pub const LIST_FAILED: &str = "Error in retrieving all contacts";

pub const CONTACT_UPDATED: &str = "Contact updated successfully!";
pub const UPDATE_NOT_FOUND: &str = "Error:Contact not found";
pub const UPDATE_FAILED: &str = "Error in updating contact";

pub const CONTACT_DELETED: &str = "Contact deleted successfully!";
pub const DELETE_FAILED: &str = "Error in deleting contact";

// ============================================================================
// Create Contact
// ============================================================================

/// Create a new contact (POST /createContact).
pub async fn create_contact(
    repo: &dyn ContactRepository,
    contact: &Contact,
) -> ApiGatewayProxyResponse {
    tracing::debug!(contact = ?contact, "Received create contact request");

    match repo.create_contact(contact).await {
        Ok(()) => {
            tracing::info!(phone = %contact.phone, "Contact added");
            build_response(200, CONTACT_ADDED)
        }
        Err(RepositoryError::AlreadyExists { .. }) => {
            tracing::warn!(phone = %contact.phone, "Contact already exists");
            build_response(409, CONTACT_EXISTS)
        }
        Err(e) => {
            tracing::error!(phone = %contact.phone, error = %e, "Error in adding new contact");
            build_response(500, CREATE_FAILED)
        }
    }
}

// ============================================================================
// Get Contact
// ============================================================================

/// Get a single contact (GET /contact?phone=).
pub async fn get_contact(repo: &dyn ContactRepository, phone: &str) -> ApiGatewayProxyResponse {
    match repo.get_contact(phone).await {
        Ok(Some(contact)) => {
            tracing::info!(phone = %phone, "Contact retrieved");
            build_response(200, &contact)
        }
        Ok(None) => {
            tracing::warn!(phone = %phone, "Contact not found");
            build_response(404, CONTACT_NOT_FOUND)
        }
        Err(e) => {
            tracing::error!(phone = %phone, error = %e, "Error in retrieving contact");
            build_response(500, GET_FAILED)
        }
    }
}

// ============================================================================
// List Contacts
// ============================================================================

/// List every contact (GET /allContacts).
pub async fn list_contacts(repo: &dyn ContactRepository) -> ApiGatewayProxyResponse {
    match repo.list_contacts().await {
        Ok(contacts) => {
            tracing::info!(count = contacts.len(), "All contacts retrieved");
            build_response(200, &contacts)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error in retrieving all contacts");
            build_response(500, LIST_FAILED)
        }
    }
}

// ============================================================================
// Update Contact
// ============================================================================

/// Overwrite the details of an existing contact (PUT /updateContact?phone=).
pub async fn update_contact(
    repo: &dyn ContactRepository,
    phone: &str,
    details: &ContactDetails,
) -> ApiGatewayProxyResponse {
    match repo.update_contact(phone, details).await {
        Ok(()) => {
            tracing::info!(phone = %phone, "Contact updated");
            build_response(200, CONTACT_UPDATED)
        }
        Err(RepositoryError::NotFound { .. }) => {
            tracing::warn!(phone = %phone, "Contact to update not found");
            build_response(409, UPDATE_NOT_FOUND)
        }
        Err(e) => {
            tracing::error!(phone = %phone, error = %e, "Error in updating contact");
            build_response(500, UPDATE_FAILED)
        }
    }
}

// ============================================================================
// Delete Contact
// ============================================================================

/// Delete a contact (DELETE /deleteContact?phone=).
///
/// Looks the contact up first, then deletes it. A failed lookup is reported
/// as 404 whether the contact is absent or the store errored. The two calls
/// are not atomic; the delete itself is conditional, so a contact removed
/// concurrently in between also ends up as 404 rather than a false success.
pub async fn delete_contact(
    repo: &dyn ContactRepository,
    phone: &str,
) -> ApiGatewayProxyResponse {
    match repo.get_contact(phone).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            tracing::warn!(phone = %phone, "Contact to delete not found");
            return build_response(404, CONTACT_NOT_FOUND);
        }
        Err(e) => {
            tracing::warn!(phone = %phone, error = %e, "Existence check failed before delete");
            return build_response(404, CONTACT_NOT_FOUND);
        }
    }

    match repo.delete_contact(phone).await {
        Ok(()) => {
            tracing::info!(phone = %phone, "Contact deleted");
            build_response(200, CONTACT_DELETED)
        }
        Err(RepositoryError::NotFound { .. }) => {
            tracing::warn!(phone = %phone, "Contact removed between check and delete");
            build_response(404, CONTACT_NOT_FOUND)
        }
        Err(e) => {
            tracing::error!(phone = %phone, error = %e, "Error in deleting contact");
            build_response(500, DELETE_FAILED)
        }
    }
}
