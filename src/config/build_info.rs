//! Build metadata for the running binary.

use serde::Serialize;

/// Compile-time package metadata
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BuildInfo {
    pub package: &'static str,
    pub version: &'static str,
    pub profile: &'static str,
}

impl BuildInfo {
    /// Get the metadata of the current build.
    pub fn current() -> Self {
        Self {
            package: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            profile: if cfg!(debug_assertions) {
                "debug"
            } else {
                "release"
            },
        }
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.package, self.version, self.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_reflects_cargo_metadata() {
        let info = BuildInfo::current();
        assert_eq!(info.package, "envconf");
        assert!(!info.version.is_empty());
    }
}
