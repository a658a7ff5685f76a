//! Error types for the API client.

use crate::request::Payload;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    /// The request never produced a response (DNS, refused connection, reset).
    #[error("Request failed: {0}")]
    Network(String),
    /// The API answered with a non-success status. `body` is parsed the same
    /// way a successful response would be (JSON or raw text).
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: Payload },
    /// A response did not match the schema documented for its endpoint.
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// The base URL or request path could not be turned into a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// A verb name that does not map to any client operation.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

impl Error {
    /// HTTP status code, present only for [`Error::HttpStatus`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parsed response body, present only for [`Error::HttpStatus`].
    pub fn body(&self) -> Option<&Payload> {
        match self {
            Error::HttpStatus { body, .. } => Some(body),
            _ => None,
        }
    }
}
