//! Dependency metadata and its platform-version resolution
//!
//! A dependency carries base coordinates plus an ordered list of mappings,
//! each gated by a platform version range. Resolving against a platform
//! version picks the first matching mapping in declaration order; fields a
//! mapping leaves out fall back to the dependency's base values.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;
use crate::version::{Version, VersionParser, VersionRange};

/// Scope tokens a dependency may declare
pub const SCOPE_ALL: [&str; 6] = [
    "compile",
    "compileOnly",
    "annotationProcessor",
    "runtime",
    "provided",
    "test",
];

fn default_scope() -> String {
    "compile".to_string()
}

/// A version-range-gated override of the dependency coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    /// The range expression, as written in the catalog
    pub version_range: String,
    /// The groupId to use for this mapping, `None` to use the default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// The artifactId to use for this mapping, `None` to use the default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    /// The version to use for this mapping, `None` to use the default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip)]
    pub(crate) range: Option<VersionRange>,
}

impl Mapping {
    /// Creates a mapping overriding only the version
    pub fn new(version_range: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            version_range: version_range.into(),
            group_id: None,
            artifact_id: None,
            version: Some(version.into()),
            range: None,
        }
    }

    /// The compiled range; available after the catalog is compiled
    pub fn range(&self) -> Option<&VersionRange> {
        self.range.as_ref()
    }
}

/// Metadata for a dependency the catalog can emit into a generated build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Primary identifier
    pub id: String,
    /// Alternate identifiers resolving to this dependency
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    /// Default version; `None` means the version is managed elsewhere (e.g.
    /// by a BOM) and is not emitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Declared scope token; unrecognized tokens are rejected at load
    #[serde(default = "default_scope")]
    pub scope: String,
    /// Platform versions this dependency is available for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_range: Option<String>,
    /// Id of the BOM that manages this dependency's version, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bom: Option<String>,
    /// Id of the repository required by this dependency, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mappings: Vec<Mapping>,
    #[serde(skip)]
    pub(crate) range: Option<VersionRange>,
}

/// A dependency with its coordinates settled for one platform version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub scope: String,
    /// Range requirement of the mapping that matched, if any
    pub requirement: Option<String>,
}

impl Dependency {
    /// Creates a dependency with explicit coordinates
    pub fn with_coordinates(
        id: impl Into<String>,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            aliases: Vec::new(),
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            version: None,
            scope: default_scope(),
            version_range: None,
            bom: None,
            repository: None,
            mappings: Vec::new(),
            range: None,
        }
    }

    /// Returns true when both groupId and artifactId are set
    pub fn has_coordinates(&self) -> bool {
        self.group_id.is_some() && self.artifact_id.is_some()
    }

    /// Returns true when the given id is the primary id or an alias
    pub fn answers_to(&self, id: &str) -> bool {
        self.id == id || self.aliases.iter().any(|alias| alias == id)
    }

    /// Validates the declaration and completes missing state.
    ///
    /// An id of the form `group:artifact[:version]` supplies coordinates the
    /// declaration leaves out; compiles the availability range and every
    /// mapping range with the given parser.
    pub(crate) fn compile(&mut self, parser: &VersionParser) -> Result<(), CatalogError> {
        if !SCOPE_ALL.contains(&self.scope.as_str()) {
            return Err(CatalogError::invalid_metadata(
                &self.id,
                format!("invalid scope '{}', must be one of {:?}", self.scope, SCOPE_ALL),
            ));
        }
        if !self.has_coordinates() {
            let mut parts = self.id.split(':');
            match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(group), Some(artifact), version, None) => {
                    self.group_id = Some(group.to_string());
                    self.artifact_id = Some(artifact.to_string());
                    if self.version.is_none() {
                        self.version = version.map(str::to_string);
                    }
                }
                _ => {
                    return Err(CatalogError::invalid_metadata(
                        &self.id,
                        "no coordinates; declare group_id/artifact_id or use a \
                         'group:artifact[:version]' id",
                    ))
                }
            }
        }
        if let Some(ref version_range) = self.version_range {
            self.range = Some(
                parser
                    .parse_range(version_range)
                    .map_err(|err| CatalogError::invalid_mapping_range(&self.id, version_range, err))?,
            );
        }
        for mapping in &mut self.mappings {
            mapping.range = Some(parser.parse_range(&mapping.version_range).map_err(|err| {
                CatalogError::invalid_mapping_range(&self.id, &mapping.version_range, err)
            })?);
        }
        Ok(())
    }

    /// Returns whether this dependency is available for the platform version
    pub fn available_for(&self, platform: &Version) -> bool {
        match self.range {
            Some(ref range) => range.matches(platform),
            None => true,
        }
    }

    /// Resolves the coordinates applicable to the platform version.
    ///
    /// The first mapping (in declaration order) whose range matches wins;
    /// with no matching mapping the base coordinates apply. Fails with
    /// `UnresolvedEntity` when neither yields coordinates.
    pub fn resolve(&self, platform: &Version) -> Result<ResolvedDependency, CatalogError> {
        let mapping = self
            .mappings
            .iter()
            .find(|mapping| matches!(mapping.range, Some(ref range) if range.matches(platform)));

        let group_id = mapping
            .and_then(|m| m.group_id.clone())
            .or_else(|| self.group_id.clone());
        let artifact_id = mapping
            .and_then(|m| m.artifact_id.clone())
            .or_else(|| self.artifact_id.clone());
        let (Some(group_id), Some(artifact_id)) = (group_id, artifact_id) else {
            return Err(CatalogError::unresolved_entity(&self.id, platform));
        };

        Ok(ResolvedDependency {
            group_id,
            artifact_id,
            version: mapping
                .and_then(|m| m.version.clone())
                .or_else(|| self.version.clone()),
            scope: self.scope.clone(),
            requirement: mapping.and_then(|m| m.range()).map(ToString::to_string),
        })
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}:{})",
            self.id,
            self.group_id.as_deref().unwrap_or("?"),
            self.artifact_id.as_deref().unwrap_or("?"),
        )
    }
}
