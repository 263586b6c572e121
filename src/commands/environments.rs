//! Environments command implementation.

use crate::config::Environment;
use crate::errors::ConfigResult;

/// List the valid environment selectors.
pub fn execute() -> ConfigResult<()> {
    for environment in Environment::ALL {
        println!("{environment}");
    }
    Ok(())
}
