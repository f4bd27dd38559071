//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `ContactRepository`
//! using `aws-sdk-dynamodb`. The table has a single string partition key,
//! `phone`, and no sort key.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
