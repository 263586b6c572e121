//! Centralized error handling.
//!
//! A configuration lookup over a closed environment set is infallible; every
//! variant here covers the boundary where external input enters (selector
//! strings, injected tables, environment variable overrides).

use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A selector string named an environment outside the closed set.
    #[error("unknown environment selector {selector:?} (expected one of: mock, staging, production)")]
    UnknownEnvironment { selector: String },

    /// No environment selector was provided and none could be assumed.
    #[error("no environment selected: set the APP_ENV variable to mock, staging or production")]
    MissingEnvironment,

    /// An injected table did not cover every environment.
    #[error("no configuration entry for environment '{environment}'")]
    IncompleteTable { environment: crate::config::Environment },

    /// A configured value that must be a URL did not parse as one.
    #[error("invalid URL for {field}")]
    InvalidUrl {
        field: String,
        #[source]
        source: url::ParseError,
    },

    /// A configured value was present but empty.
    #[error("empty value for {field}")]
    EmptyValue { field: String },

    #[error("serialization error")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Get a stable error code for diagnostics and logs
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::UnknownEnvironment { .. } => "UNKNOWN_ENVIRONMENT",
            ConfigError::MissingEnvironment => "MISSING_ENVIRONMENT",
            ConfigError::IncompleteTable { .. } => "INCOMPLETE_TABLE",
            ConfigError::InvalidUrl { .. } => "INVALID_URL",
            ConfigError::EmptyValue { .. } => "EMPTY_VALUE",
            ConfigError::Serialize(_) => "SERIALIZE_ERROR",
        }
    }
}
