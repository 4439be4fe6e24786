//! API key and endpoint resolution from multiple sources

use log::debug;

use crate::config::{api, credentials};
use crate::error::{AdminError, Result};

/// Resolves the Admin API key and base URL
///
/// Sources in order: CLI argument, environment variable, then (for the base
/// URL only) the built-in default. Empty values count as unset.
pub struct CredentialsResolver {
    env_api_key: Option<String>,
    env_base_url: Option<String>,
}

impl CredentialsResolver {
    /// Create a resolver reading the process environment
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(credentials::API_KEY_ENV_VAR).ok(),
            std::env::var(credentials::BASE_URL_ENV_VAR).ok(),
        )
    }

    /// Create a resolver with explicit environment values
    pub fn new(env_api_key: Option<String>, env_base_url: Option<String>) -> Self {
        Self {
            env_api_key: non_empty(env_api_key),
            env_base_url: non_empty(env_base_url),
        }
    }

    /// Resolve the API key:
    /// 1. CLI argument (if provided)
    /// 2. `ANTHROPIC_API_KEY` environment variable
    pub fn resolve_api_key(&self, cli_api_key: Option<&str>) -> Result<String> {
        if let Some(key) = cli_api_key.filter(|k| !k.is_empty()) {
            debug!("Using API key from CLI argument");
            return Ok(key.to_string());
        }

        if let Some(key) = &self.env_api_key {
            debug!(
                "Using API key from {} environment variable",
                credentials::API_KEY_ENV_VAR
            );
            return Ok(key.clone());
        }

        Err(AdminError::ApiKeyNotFound(Self::api_key_not_found_message()))
    }

    /// Resolve the API endpoint, falling back to the public default
    pub fn resolve_base_url(&self, cli_base_url: Option<&str>) -> String {
        let url = if let Some(url) = cli_base_url.filter(|u| !u.is_empty()) {
            debug!("Using base URL from CLI argument: {}", url);
            url.to_string()
        } else if let Some(url) = &self.env_base_url {
            debug!(
                "Using base URL from {} environment variable: {}",
                credentials::BASE_URL_ENV_VAR,
                url
            );
            url.clone()
        } else {
            api::BASE_URL.to_string()
        };

        url.trim_end_matches('/').to_string()
    }

    fn api_key_not_found_message() -> String {
        format!(
            "No Admin API key found. Please provide one using either:\n\
             \n\
             1. CLI argument:      anthropic-admin --api-key <KEY>\n\
             2. Environment var:   export {}=<KEY>\n\
             \n\
             Admin API keys start with 'sk-ant-admin' and are created in the Console.",
            credentials::API_KEY_ENV_VAR
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
