//! Artifact repository metadata
//!
//! Repositories carry no version-dependent state; they resolve verbatim.

use serde::{Deserialize, Serialize};

/// Metadata for an artifact repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Human-readable repository name
    pub name: String,
    pub url: String,
    /// Whether the repository serves snapshot artifacts
    #[serde(default)]
    pub snapshots_enabled: bool,
}

impl Repository {
    /// Creates a release-only repository
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            snapshots_enabled: false,
        }
    }

    /// Creates a repository also serving snapshots
    pub fn with_snapshots(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            snapshots_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_disables_snapshots() {
        let repository = Repository::new("Acme Releases", "https://repo.acme.com/releases");
        assert!(!repository.snapshots_enabled);
    }

    #[test]
    fn test_with_snapshots() {
        let repository =
            Repository::with_snapshots("Acme Snapshots", "https://repo.acme.com/snapshots");
        assert!(repository.snapshots_enabled);
    }

    #[test]
    fn test_deserialize_defaults_snapshots_off() {
        let repository: Repository = toml::from_str(
            r#"
            name = "Acme Releases"
            url = "https://repo.acme.com/releases"
            "#,
        )
        .unwrap();
        assert_eq!(repository.name, "Acme Releases");
        assert!(!repository.snapshots_enabled);
    }
}
