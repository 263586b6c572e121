//! Deployment environment enumeration.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::constants::APP_ENV_VAR;
use crate::errors::{ConfigError, ConfigResult};

/// Deployment environments
///
/// A closed set: adding a variant is a source change, never a runtime event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Mock,
    Staging,
    Production,
}

impl Environment {
    /// All environments, in selector order
    pub const ALL: [Environment; 3] = [
        Environment::Mock,
        Environment::Staging,
        Environment::Production,
    ];

    /// Get the canonical selector string for this environment
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Mock => "mock",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// Check if this environment carries production credentials
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Resolve the active environment from the APP_ENV process variable.
    ///
    /// A set but unrecognized selector is always an error; silently running
    /// against the wrong backend is the one failure worth refusing. An unset
    /// variable falls back to [`Environment::Mock`] in debug builds only.
    pub fn detect() -> ConfigResult<Self> {
        match env::var(APP_ENV_VAR) {
            Ok(selector) => selector.parse(),
            Err(_) => {
                if cfg!(debug_assertions) {
                    tracing::warn!("{} not set, assuming mock environment", APP_ENV_VAR);
                    Ok(Environment::Mock)
                } else {
                    Err(ConfigError::MissingEnvironment)
                }
            }
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(Environment::Mock),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            _ => Err(ConfigError::UnknownEnvironment {
                selector: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_selectors() {
        assert_eq!("mock".parse::<Environment>().unwrap(), Environment::Mock);
        assert_eq!(
            "staging".parse::<Environment>().unwrap(),
            Environment::Staging
        );
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "Production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(" MOCK ".parse::<Environment>().unwrap(), Environment::Mock);
    }

    #[test]
    fn test_parse_rejects_unknown_selector() {
        let err = "dev".parse::<Environment>().unwrap_err();
        match err {
            ConfigError::UnknownEnvironment { selector } => assert_eq!(selector, "dev"),
            other => panic!("expected UnknownEnvironment, got {other:?}"),
        }
    }

    #[test]
    fn test_display_round_trips() {
        for env in Environment::ALL {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn test_only_production_is_production() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Mock.is_production());
        assert!(!Environment::Staging.is_production());
    }
}
