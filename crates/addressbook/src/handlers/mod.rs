//! Request handlers.

pub mod contacts;
