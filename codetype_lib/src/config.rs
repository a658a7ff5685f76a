//! Environment-driven configuration.
//!
//! `CODETYPE_API_BASE_URL` names the API (it may carry a path prefix such as
//! `/api`). When it is unset or blank, requests go to `CODETYPE_ORIGIN`, the
//! origin the front end is served from, and finally to `http://localhost`.
//! A `.env` file in the working directory is honoured.

use codetype_api::{base_target, Client};

use crate::error::CodeTypeError;

pub const API_BASE_URL_VAR: &str = "CODETYPE_API_BASE_URL";
pub const ORIGIN_VAR: &str = "CODETYPE_ORIGIN";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub origin: Option<String>,
}

impl Config {
    /// Reads the process environment, loading `.env` first if present.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self {
            api_base_url: env_string(API_BASE_URL_VAR),
            origin: env_string(ORIGIN_VAR),
        }
    }

    /// Replaces the API base, e.g. from a command-line flag.
    pub fn with_api_base_url(mut self, base_url: Option<String>) -> Self {
        if base_url.is_some() {
            self.api_base_url = base_url;
        }
        self
    }

    /// The base URL requests will be resolved against.
    pub fn base_url(&self) -> &str {
        base_target(self.api_base_url.as_deref(), self.origin.as_deref())
    }

    pub fn client(&self) -> Result<Client, CodeTypeError> {
        let base = self.base_url();
        Client::with_base_url(base)
            .map_err(|e| CodeTypeError::Config(format!("cannot use base URL '{}': {}", base, e)))
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
