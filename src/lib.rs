//! envconf - environment-scoped endpoint configuration
//!
//! A typed provider for the deployment constants (web URL, API URL, API key)
//! of a closed environment set: mock, staging and production. One compiled-in
//! table, one accessor; deployments override individual values through process
//! variables instead of patching literals.
//!
//! # Usage
//!
//! ```
//! use envconf::{ConfigProvider, Environment};
//!
//! let provider = ConfigProvider::builtin();
//! let config = provider.get(Environment::Staging);
//! assert!(!config.api_url.is_empty());
//! ```
//!
//! # CLI
//!
//! ```bash
//! # Print the resolved configuration for an environment
//! envconf show --env staging
//!
//! # Validate the effective table before startup
//! envconf check
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types at crate root
pub use config::{BuildInfo, ConfigProvider, Environment, EnvironmentConfig};
pub use errors::{ConfigError, ConfigResult};
