use async_trait::async_trait;

use crate::contact::{Contact, ContactDetails};

use super::Result;

/// Repository for contact operations, keyed by phone number.
///
/// Implementations must make `create_contact`, `update_contact` and
/// `delete_contact` conditional on key absence/presence in a single store call.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Gets a contact by phone number.
    async fn get_contact(&self, phone: &str) -> Result<Option<Contact>>;

    /// Gets every stored contact, in store order.
    async fn list_contacts(&self) -> Result<Vec<Contact>>;

    /// Creates a new contact. Fails with `AlreadyExists` if the phone is taken.
    async fn create_contact(&self, contact: &Contact) -> Result<()>;

    /// Overwrites the non-key fields of an existing contact.
    /// Fails with `NotFound` if no contact has this phone.
    async fn update_contact(&self, phone: &str, details: &ContactDetails) -> Result<()>;

    /// Deletes a contact. Fails with `NotFound` if no contact has this phone.
    async fn delete_contact(&self, phone: &str) -> Result<()>;
}
