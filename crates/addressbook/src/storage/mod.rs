//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `ContactRepository`
//! trait defined in `addressbook_core::storage`. The backend is selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory`: HashMap backend for local runs; always compiled for tests
//!
//! Build for local runs without AWS:
//! ```bash
//! cargo build -p addressbook --no-default-features --features inmemory
//! ```

#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!(
    "Features 'dynamodb' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "dynamodb", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory' feature. \
    Example: cargo build -p addressbook --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;
