//! Show command implementation.

use crate::cli::ShowArgs;
use crate::config::{ConfigProvider, Environment};
use crate::errors::ConfigResult;

/// Print the resolved configuration for the selected environment as JSON.
///
/// The API key is redacted unless `--reveal-key` was passed.
pub fn execute(args: ShowArgs) -> ConfigResult<()> {
    let environment = match args.env {
        Some(selector) => selector.parse()?,
        None => Environment::detect()?,
    };

    let provider = ConfigProvider::from_env()?;
    let config = provider.get(environment);
    let printable = if args.reveal_key {
        config.clone()
    } else {
        config.redacted()
    };

    tracing::debug!(environment = %environment, "resolved configuration");
    println!("{}", serde_json::to_string_pretty(&printable)?);
    Ok(())
}
