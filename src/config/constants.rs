//! Configuration constants
//!
//! Single source of truth for the builtin endpoint table and the names of the
//! process variables that may override it.

// =============================================================================
// Builtin endpoints
// =============================================================================

/// Web URL for the mock backend
pub const MOCK_WEB_URL: &str = "http://www.google.com/";

/// API URL for the mock backend
pub const MOCK_API_URL: &str = "http://private-778487-alvinrusliappschef.apiary-mock.com/";

/// API key for the mock backend
pub const MOCK_API_KEY: &str = "mymockapikey";

// Staging still points at the mock backend; diverge via STAGING_* overrides.
pub const STAGING_WEB_URL: &str = MOCK_WEB_URL;
pub const STAGING_API_URL: &str = MOCK_API_URL;
pub const STAGING_API_KEY: &str = MOCK_API_KEY;

pub const PRODUCTION_WEB_URL: &str = MOCK_WEB_URL;
pub const PRODUCTION_API_URL: &str = MOCK_API_URL;

/// Compiled-in production key, a placeholder; deployments should inject the
/// real one through the PRODUCTION_API_KEY variable.
pub const PRODUCTION_API_KEY: &str = "myproductionapikey";

// =============================================================================
// Process variables
// =============================================================================

/// Variable holding the active environment selector
pub const APP_ENV_VAR: &str = "APP_ENV";

/// Override variable suffix for the web URL (e.g. STAGING_WEB_URL)
pub const WEB_URL_SUFFIX: &str = "WEB_URL";

/// Override variable suffix for the API URL (e.g. STAGING_API_URL)
pub const API_URL_SUFFIX: &str = "API_URL";

/// Override variable suffix for the API key (e.g. STAGING_API_KEY)
pub const API_KEY_SUFFIX: &str = "API_KEY";
