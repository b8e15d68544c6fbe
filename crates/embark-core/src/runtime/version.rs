//! Framework version resolution

use semver::Version;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid framework version '{version}': {source}")]
pub struct VersionError {
    version: String,
    #[source]
    source: semver::Error,
}

/// Resolve the framework version for an install run: the caller's override
/// if given, otherwise the product default. A leading 'v' is tolerated;
/// anything that doesn't parse as semver is rejected before the installer
/// ever runs.
pub fn resolve_framework_version(
    requested: Option<&str>,
    default: &str,
) -> Result<String, VersionError> {
    let raw = requested.unwrap_or(default);
    let cleaned = raw.strip_prefix('v').unwrap_or(raw);

    Version::parse(cleaned).map_err(|source| VersionError {
        version: raw.to_string(),
        source,
    })?;

    Ok(cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_version_is_used_without_override() {
        assert_eq!(
            resolve_framework_version(None, "0.57.8").unwrap(),
            "0.57.8"
        );
    }

    #[test]
    fn test_override_wins() {
        assert_eq!(
            resolve_framework_version(Some("0.58.0"), "0.57.8").unwrap(),
            "0.58.0"
        );
    }

    #[test]
    fn test_leading_v_is_stripped() {
        assert_eq!(
            resolve_framework_version(Some("v0.58.0"), "0.57.8").unwrap(),
            "0.58.0"
        );
    }

    #[test]
    fn test_invalid_version_is_rejected() {
        assert!(resolve_framework_version(Some("latest"), "0.57.8").is_err());
    }
}
