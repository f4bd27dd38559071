use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Shorthand for a missing contact.
    pub fn contact_not_found(phone: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            id: phone.into(),
        }
    }

    /// Shorthand for a contact whose phone is already taken.
    pub fn contact_exists(phone: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity_type: "Contact",
            id: phone.into(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::contact_not_found("555-0100");
        assert_eq!(error.to_string(), "Contact not found: 555-0100");
    }

    #[test]
    fn test_repository_error_already_exists_display() {
        let error = RepositoryError::contact_exists("555-0100");
        assert_eq!(error.to_string(), "Contact already exists: 555-0100");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string());
        assert_eq!(
            error.to_string(),
            "Query failed: Throughput exceeded, please retry"
        );
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("Missing or invalid field: phone".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid data: Missing or invalid field: phone"
        );
    }
}
