//! Application configuration module
//!
//! The environment table, its per-environment records, and the provider that
//! serves them.

mod build_info;
mod constants;
mod environment;
mod profile;
mod provider;

pub use build_info::BuildInfo;
pub use constants::*;
pub use environment::Environment;
pub use profile::EnvironmentConfig;
pub use provider::ConfigProvider;
