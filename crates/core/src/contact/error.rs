use thiserror::Error;

/// Errors raised while reading a request's inputs, before any store call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Request body is missing")]
    MissingBody,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Missing phone query parameter")]
    MissingPhone,
}
