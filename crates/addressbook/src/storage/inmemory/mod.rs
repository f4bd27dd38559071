//! In-memory storage backend.
//!
//! Stores contacts in a HashMap wrapped in `Arc<RwLock<_>>`. Each operation
//! takes the lock once, so the conditional create/update/delete semantics
//! match the DynamoDB backend.

mod repository;

pub use repository::InMemoryRepository;
