//! Per-environment configuration record.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::Environment;
use crate::errors::{ConfigError, ConfigResult};

const REDACTED: &str = "[REDACTED]";

/// The configuration values bound to one environment.
///
/// Immutable once constructed; the provider hands out references or clones,
/// never a mutation path.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub web_url: String,
    pub api_url: String,
    pub api_key: String,
}

impl std::fmt::Debug for EnvironmentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvironmentConfig")
            .field("web_url", &self.web_url)
            .field("api_url", &self.api_url)
            .field("api_key", &REDACTED)
            .finish()
    }
}

impl EnvironmentConfig {
    /// Create a validated configuration record.
    pub fn new(
        web_url: impl Into<String>,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> ConfigResult<Self> {
        let config = Self {
            web_url: web_url.into(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        };
        config.validate("config")?;
        Ok(config)
    }

    /// Check the record invariants: URLs parse, nothing is empty.
    ///
    /// `scope` qualifies field names in errors (e.g. "staging.api_url").
    pub(crate) fn validate(&self, scope: &str) -> ConfigResult<()> {
        checked_url(format!("{scope}.web_url"), &self.web_url)?;
        checked_url(format!("{scope}.api_url"), &self.api_url)?;
        checked_token(format!("{scope}.api_key"), &self.api_key)?;
        Ok(())
    }

    pub(crate) fn validate_for(&self, environment: Environment) -> ConfigResult<()> {
        self.validate(environment.as_str())
    }

    /// Get a copy safe for display and logging, with the API key blanked.
    pub fn redacted(&self) -> Self {
        Self {
            web_url: self.web_url.clone(),
            api_url: self.api_url.clone(),
            api_key: REDACTED.to_string(),
        }
    }
}

fn checked_url(field: String, value: &str) -> ConfigResult<()> {
    if value.is_empty() {
        return Err(ConfigError::EmptyValue { field });
    }
    Url::parse(value).map_err(|source| ConfigError::InvalidUrl { field, source })?;
    Ok(())
}

fn checked_token(field: String, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyValue { field });
    }
    Ok(())
}
