//! Process-wide application state.
//!
//! The repository is built once when the process starts and shared by every
//! invocation the Lambda runtime delivers to it.

use std::sync::Arc;

use addressbook_core::storage::ContactRepository;

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Contact repository backing every operation.
    pub contact_repo: Arc<dyn ContactRepository>,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repo }
    }

    /// Creates the AppState backed by DynamoDB.
    #[cfg(feature = "dynamodb")]
    pub async fn from_config(config: &Config) -> Self {
        use crate::storage::DynamoDbRepository;

        let repo = DynamoDbRepository::from_config(config).await;
        tracing::info!(
            table = %repo.table_name(),
            region = %config.region,
            "Connected to database"
        );

        Self::new(Arc::new(repo))
    }

    /// Creates the AppState backed by an empty in-memory store.
    #[cfg(feature = "inmemory")]
    pub async fn from_config(config: &Config) -> Self {
        use crate::storage::InMemoryRepository;

        tracing::warn!(
            table = %config.table_name,
            "Using in-memory storage, data is lost when the process exits"
        );

        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
