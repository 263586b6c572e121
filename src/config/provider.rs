//! Environment-scoped configuration lookup.

use std::collections::HashMap;
use std::env;

use once_cell::sync::Lazy;

use crate::config::constants::{
    API_KEY_SUFFIX, API_URL_SUFFIX, MOCK_API_KEY, MOCK_API_URL, MOCK_WEB_URL, PRODUCTION_API_KEY,
    PRODUCTION_API_URL, PRODUCTION_WEB_URL, STAGING_API_KEY, STAGING_API_URL, STAGING_WEB_URL,
    WEB_URL_SUFFIX,
};
use crate::config::{Environment, EnvironmentConfig};
use crate::errors::{ConfigError, ConfigResult};

static SHARED: Lazy<ConfigProvider> = Lazy::new(ConfigProvider::builtin);

/// Lookup table mapping each environment to its configuration.
///
/// One entry per [`Environment`] variant, held directly so the lookup is total
/// by construction. Immutable after construction, so sharing across threads
/// needs no locking.
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    mock: EnvironmentConfig,
    staging: EnvironmentConfig,
    production: EnvironmentConfig,
}

impl ConfigProvider {
    /// Create a provider over the compiled-in endpoint table.
    pub fn builtin() -> Self {
        Self {
            mock: EnvironmentConfig {
                web_url: MOCK_WEB_URL.to_string(),
                api_url: MOCK_API_URL.to_string(),
                api_key: MOCK_API_KEY.to_string(),
            },
            staging: EnvironmentConfig {
                web_url: STAGING_WEB_URL.to_string(),
                api_url: STAGING_API_URL.to_string(),
                api_key: STAGING_API_KEY.to_string(),
            },
            production: EnvironmentConfig {
                web_url: PRODUCTION_WEB_URL.to_string(),
                api_url: PRODUCTION_API_URL.to_string(),
                api_key: PRODUCTION_API_KEY.to_string(),
            },
        }
    }

    /// Get the process-wide provider over the builtin table.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Create a provider from the builtin table plus process variable
    /// overrides (`MOCK_WEB_URL`, `STAGING_API_KEY`, `PRODUCTION_API_KEY`, ...).
    ///
    /// Loads a `.env` file first if one is present. Every override is
    /// validated; a malformed value fails construction rather than falling
    /// back to the compiled-in one.
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create a provider from an injected table covering every environment.
    pub fn with_table(mut table: HashMap<Environment, EnvironmentConfig>) -> ConfigResult<Self> {
        let mut take = |environment: Environment| {
            table
                .remove(&environment)
                .ok_or(ConfigError::IncompleteTable { environment })
        };
        let provider = Self {
            mock: take(Environment::Mock)?,
            staging: take(Environment::Staging)?,
            production: take(Environment::Production)?,
        };
        for environment in Environment::ALL {
            provider.get(environment).validate_for(environment)?;
        }
        Ok(provider)
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut provider = Self::builtin();
        for environment in Environment::ALL {
            let prefix = environment.as_str().to_ascii_uppercase();
            let entry = provider.entry_mut(environment);
            for (suffix, field) in [
                (WEB_URL_SUFFIX, &mut entry.web_url),
                (API_URL_SUFFIX, &mut entry.api_url),
                (API_KEY_SUFFIX, &mut entry.api_key),
            ] {
                let key = format!("{prefix}_{suffix}");
                if let Some(value) = lookup(&key) {
                    tracing::debug!(
                        environment = %environment,
                        variable = %key,
                        "applying configuration override"
                    );
                    *field = value;
                }
            }
            provider.get(environment).validate_for(environment)?;
        }
        if provider.production.api_key == PRODUCTION_API_KEY {
            tracing::warn!(
                "PRODUCTION_API_KEY not set, using the compiled-in placeholder key"
            );
        }
        Ok(provider)
    }

    /// Get the configuration for an environment.
    ///
    /// Total over the closed environment set; same input always yields the
    /// same output for the lifetime of the provider.
    pub fn get(&self, environment: Environment) -> &EnvironmentConfig {
        match environment {
            Environment::Mock => &self.mock,
            Environment::Staging => &self.staging,
            Environment::Production => &self.production,
        }
    }

    /// Get the web URL for an environment.
    pub fn web_url(&self, environment: Environment) -> &str {
        &self.get(environment).web_url
    }

    /// Get the API URL for an environment.
    pub fn api_url(&self, environment: Environment) -> &str {
        &self.get(environment).api_url
    }

    /// Get the API key for an environment.
    pub fn api_key(&self, environment: Environment) -> &str {
        &self.get(environment).api_key
    }

    fn entry_mut(&mut self, environment: Environment) -> &mut EnvironmentConfig {
        match environment {
            Environment::Mock => &mut self.mock,
            Environment::Staging => &mut self.staging,
            Environment::Production => &mut self.production,
        }
    }
}

impl Default for ConfigProvider {
    fn default() -> Self {
        Self::builtin()
    }
}
