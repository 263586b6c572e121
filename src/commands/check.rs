//! Check command implementation.

use crate::config::{BuildInfo, ConfigProvider, Environment};
use crate::errors::ConfigResult;

/// Validate the effective configuration table for every environment.
///
/// Intended for startup scripts: a non-zero exit means the deployment would
/// run with a broken or incomplete table.
pub fn execute() -> ConfigResult<()> {
    tracing::debug!("running {}", BuildInfo::current());

    let provider = ConfigProvider::from_env()?;
    for environment in Environment::ALL {
        let config = provider.get(environment);
        tracing::info!(
            environment = %environment,
            web_url = %config.web_url,
            api_url = %config.api_url,
            "configuration entry valid"
        );
    }

    println!("configuration ok");
    Ok(())
}
