//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use addressbook_core::contact::{Contact, ContactDetails};
use addressbook_core::storage::{ContactRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    contacts: Arc<RwLock<HashMap<String, Contact>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryRepository {
    async fn get_contact(&self, phone: &str) -> Result<Option<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.get(phone).cloned())
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.values().cloned().collect())
    }

    async fn create_contact(&self, contact: &Contact) -> Result<()> {
        let mut contacts = self.contacts.write().await;
        if contacts.contains_key(&contact.phone) {
            return Err(RepositoryError::contact_exists(&contact.phone));
        }
        contacts.insert(contact.phone.clone(), contact.clone());
        Ok(())
    }

    async fn update_contact(&self, phone: &str, details: &ContactDetails) -> Result<()> {
        let mut contacts = self.contacts.write().await;
        let contact = contacts
            .get_mut(phone)
            .ok_or_else(|| RepositoryError::contact_not_found(phone))?;
        contact.apply(details.clone());
        Ok(())
    }

    async fn delete_contact(&self, phone: &str) -> Result<()> {
        let mut contacts = self.contacts.write().await;
        if contacts.remove(phone).is_none() {
            return Err(RepositoryError::contact_not_found(phone));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contact(phone: &str) -> Contact {
        Contact::new(phone).with_details(ContactDetails::new(
            "Grace",
            "Hopper",
            "grace@example.com",
            "compiler pioneer",
        ))
    }

    #[tokio::test]
    async fn test_contact_create_and_get() {
        let repo = InMemoryRepository::new();
        let contact = sample_contact("555-0100");

        repo.create_contact(&contact).await.unwrap();

        let retrieved = repo.get_contact("555-0100").await.unwrap();
        assert_eq!(retrieved, Some(contact));
    }

    #[tokio::test]
    async fn test_contact_get_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.get_contact("555-0199").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_contact_create_duplicate() {
        let repo = InMemoryRepository::new();
        repo.create_contact(&sample_contact("555-0100"))
            .await
            .unwrap();

        let result = repo.create_contact(&Contact::new("555-0100")).await;

        assert!(matches!(
            result,
            Err(RepositoryError::AlreadyExists { .. })
        ));
        // The original record is left untouched
        let stored = repo.get_contact("555-0100").await.unwrap().unwrap();
        assert_eq!(stored.first_name.as_deref(), Some("Grace"));
    }

    #[tokio::test]
    async fn test_contact_update() {
        let repo = InMemoryRepository::new();
        repo.create_contact(&Contact::new("555-0100")).await.unwrap();

        let details = ContactDetails::new("Alan", "Turing", "alan@example.com", "");
        repo.update_contact("555-0100", &details).await.unwrap();

        let stored = repo.get_contact("555-0100").await.unwrap().unwrap();
        assert_eq!(stored, Contact::new("555-0100").with_details(details));
    }

    #[tokio::test]
    async fn test_contact_update_nonexistent() {
        let repo = InMemoryRepository::new();
        let details = ContactDetails::new("Alan", "Turing", "alan@example.com", "");

        let result = repo.update_contact("555-0199", &details).await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
        assert!(repo.get_contact("555-0199").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_contact_delete() {
        let repo = InMemoryRepository::new();
        repo.create_contact(&sample_contact("555-0100"))
            .await
            .unwrap();

        repo.delete_contact("555-0100").await.unwrap();

        assert!(repo.get_contact("555-0100").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_contact_delete_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.delete_contact("555-0199").await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_contacts() {
        let repo = InMemoryRepository::new();
        assert!(repo.list_contacts().await.unwrap().is_empty());

        for phone in ["555-0100", "555-0101", "555-0102"] {
            repo.create_contact(&sample_contact(phone)).await.unwrap();
        }

        let mut phones: Vec<String> = repo
            .list_contacts()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.phone)
            .collect();
        phones.sort();

        assert_eq!(phones, vec!["555-0100", "555-0101", "555-0102"]);
    }
}
