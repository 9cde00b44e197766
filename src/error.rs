//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VersionError: Malformed version strings and range expressions
//! - CatalogError: Catalog loading failures and unresolvable entities
//!
//! All failures are deterministic and input-driven; none are transient, so
//! there is no retry layer. Callers that want "no opinion" instead of an
//! error use the `safe_parse` variants on the version parser.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Version and range parsing errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Catalog related errors
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors raised while parsing version strings and range expressions
#[derive(Error, Debug)]
pub enum VersionError {
    /// The text does not describe a version
    #[error("invalid version '{text}': expected format major.minor.patch[.qualifier] (e.g. 1.0.5.RELEASE)")]
    InvalidVersion { text: String },

    /// The text does not describe a version range
    #[error("invalid version range '{text}': {message}")]
    InvalidRange { text: String, message: String },
}

/// Errors related to the metadata catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file not found
    #[error("catalog file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read the catalog file
    #[error("failed to read catalog file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error in the catalog file
    #[error("failed to parse catalog {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// An entity declares inconsistent or incomplete metadata
    #[error("invalid metadata for '{id}': {message}")]
    InvalidMetadata { id: String, message: String },

    /// A mapping on an entity carries a range expression that does not parse
    #[error("invalid version range '{range}' for '{id}': {source}")]
    InvalidMappingRange {
        id: String,
        range: String,
        #[source]
        source: VersionError,
    },

    /// No mapping matches the platform version and no base coordinates exist
    #[error("no mapping of '{id}' applies to platform version {platform} and no default coordinates are defined")]
    UnresolvedEntity { id: String, platform: String },
}

impl VersionError {
    /// Creates a new InvalidVersion error
    pub fn invalid_version(text: impl Into<String>) -> Self {
        VersionError::InvalidVersion { text: text.into() }
    }

    /// Creates a new InvalidRange error
    pub fn invalid_range(text: impl Into<String>, message: impl Into<String>) -> Self {
        VersionError::InvalidRange {
            text: text.into(),
            message: message.into(),
        }
    }
}

impl CatalogError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        CatalogError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        CatalogError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidMetadata error
    pub fn invalid_metadata(id: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogError::InvalidMetadata {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidMappingRange error
    pub fn invalid_mapping_range(
        id: impl Into<String>,
        range: impl Into<String>,
        source: VersionError,
    ) -> Self {
        CatalogError::InvalidMappingRange {
            id: id.into(),
            range: range.into(),
            source,
        }
    }

    /// Creates a new UnresolvedEntity error
    pub fn unresolved_entity(id: impl Into<String>, platform: impl ToString) -> Self {
        CatalogError::UnresolvedEntity {
            id: id.into(),
            platform: platform.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_version_message() {
        let err = VersionError::invalid_version("foo");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid version 'foo'"));
        assert!(msg.contains("major.minor.patch"));
    }

    #[test]
    fn test_invalid_range_message() {
        let err = VersionError::invalid_range("foo-bar", "malformed bracket syntax");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid version range 'foo-bar'"));
        assert!(msg.contains("malformed bracket syntax"));
    }

    #[test]
    fn test_catalog_not_found() {
        let err = CatalogError::not_found("/path/to/catalog.toml");
        let msg = format!("{}", err);
        assert!(msg.contains("catalog file not found"));
        assert!(msg.contains("catalog.toml"));
    }

    #[test]
    fn test_catalog_toml_parse_error() {
        let err = CatalogError::toml_parse_error("/path/to/catalog.toml", "unexpected key");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse catalog"));
        assert!(msg.contains("unexpected key"));
    }

    #[test]
    fn test_invalid_mapping_range_carries_source() {
        let err = CatalogError::invalid_mapping_range(
            "security",
            "[1.0,",
            VersionError::invalid_range("[1.0,", "malformed bracket syntax"),
        );
        let msg = format!("{}", err);
        assert!(msg.contains("invalid version range '[1.0,' for 'security'"));
    }

    #[test]
    fn test_unresolved_entity_message() {
        let err = CatalogError::unresolved_entity("my-bom", "3.0.0");
        let msg = format!("{}", err);
        assert!(msg.contains("no mapping of 'my-bom'"));
        assert!(msg.contains("3.0.0"));
    }

    #[test]
    fn test_app_error_from_version_error() {
        let err: AppError = VersionError::invalid_version("x").into();
        assert!(format!("{}", err).contains("invalid version"));
    }

    #[test]
    fn test_app_error_from_catalog_error() {
        let err: AppError = CatalogError::unresolved_entity("id", "1.0.0").into();
        assert!(format!("{}", err).contains("no mapping"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = VersionError::invalid_version("bad");
        assert!(format!("{:?}", err).contains("InvalidVersion"));
    }
}
