//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding configuration and input failures.
#[derive(Debug, Clone)]
pub enum CodeTypeError {
    /// An error from the underlying API client.
    Api(codetype_api::Error),
    /// The environment or flags describe an unusable configuration.
    Config(String),
    /// User-provided input could not be parsed.
    InvalidInput(String),
}

impl CodeTypeError {
    /// HTTP status of the underlying API failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for CodeTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for CodeTypeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<codetype_api::Error> for CodeTypeError {
    fn from(e: codetype_api::Error) -> Self {
        Self::Api(e)
    }
}
