//! Functional core for the addressbook service.
//!
//! Pure data types and functions with no I/O: the contact entity and its
//! request payloads, routing and response building over API Gateway proxy
//! events, and the storage trait implemented by the service crate.

pub mod contact;
pub mod gateway;
pub mod storage;
