//! Build item resolution against the metadata catalog
//!
//! Translates catalog entities, resolved for a fixed platform version, into
//! build-tool-neutral records consumed by build-file writers. All operations
//! are pure reads; records are created fresh per call and never cached.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::MetadataCatalog;
use crate::error::CatalogError;
use crate::version::{Version, VersionReference};

/// Dependency scopes a build file writer can express
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyScope {
    AnnotationProcessor,
    Compile,
    CompileOnly,
    ProvidedRuntime,
    Runtime,
    TestCompile,
}

impl DependencyScope {
    /// Maps a catalog scope token to a scope, `None` for unrecognized
    /// tokens (some build systems treat "no scope" as a valid default)
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "annotationProcessor" => Some(DependencyScope::AnnotationProcessor),
            "compile" => Some(DependencyScope::Compile),
            "compileOnly" => Some(DependencyScope::CompileOnly),
            "provided" => Some(DependencyScope::ProvidedRuntime),
            "runtime" => Some(DependencyScope::Runtime),
            "test" => Some(DependencyScope::TestCompile),
            _ => None,
        }
    }

    /// The catalog token for this scope
    pub fn token(&self) -> &'static str {
        match self {
            DependencyScope::AnnotationProcessor => "annotationProcessor",
            DependencyScope::Compile => "compile",
            DependencyScope::CompileOnly => "compileOnly",
            DependencyScope::ProvidedRuntime => "provided",
            DependencyScope::Runtime => "runtime",
            DependencyScope::TestCompile => "test",
        }
    }
}

/// Build-tool-neutral dependency coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCoordinates {
    pub group_id: String,
    pub artifact_id: String,
    /// Version to emit; `None` when the version is managed by a BOM or the
    /// platform itself
    pub version: Option<VersionReference>,
    pub scope: Option<DependencyScope>,
}

impl fmt::Display for ResolvedCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(ref version) = self.version {
            write!(f, ":{}", version)?;
        }
        Ok(())
    }
}

/// A resolved bill of materials import
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBomImport {
    pub group_id: String,
    pub artifact_id: String,
    pub version: VersionReference,
    pub order: i32,
}

impl fmt::Display for ResolvedBomImport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// A resolved artifact repository declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryCoordinates {
    pub id: String,
    pub name: String,
    pub url: String,
    pub snapshots_enabled: bool,
}

impl RepositoryCoordinates {
    /// The public central repository, always available without catalog entry
    pub fn maven_central() -> Self {
        Self {
            id: "maven-central".to_string(),
            name: "Maven Central".to_string(),
            url: "https://repo.maven.apache.org/maven2".to_string(),
            snapshots_enabled: false,
        }
    }
}

/// Resolves catalog entities into build items for one platform version
pub struct BuildItemResolver<'a> {
    catalog: &'a MetadataCatalog,
    platform_version: Version,
}

impl<'a> BuildItemResolver<'a> {
    /// Creates a resolver for the given catalog and platform version
    pub fn new(catalog: &'a MetadataCatalog, platform_version: Version) -> Self {
        Self {
            catalog,
            platform_version,
        }
    }

    /// The platform version this resolver settles entities against
    pub fn platform_version(&self) -> &Version {
        &self.platform_version
    }

    /// Resolves a dependency id into coordinates, `Ok(None)` when the id
    /// has no catalog entry
    pub fn resolve_dependency(
        &self,
        id: &str,
    ) -> Result<Option<ResolvedCoordinates>, CatalogError> {
        let Some(dependency) = self.catalog.dependency(id) else {
            return Ok(None);
        };
        let resolved = dependency.resolve(&self.platform_version)?;
        Ok(Some(ResolvedCoordinates {
            group_id: resolved.group_id,
            artifact_id: resolved.artifact_id,
            version: resolved.version.map(VersionReference::of_value),
            scope: DependencyScope::from_token(&resolved.scope),
        }))
    }

    /// Resolves a BOM id into an import record, `Ok(None)` when the id has
    /// no catalog entry.
    ///
    /// When the BOM declares a version property the record references the
    /// property instead of the literal value, so writers can emit a
    /// `${property}` placeholder.
    pub fn resolve_bom(&self, id: &str) -> Result<Option<ResolvedBomImport>, CatalogError> {
        let Some(bom) = self.catalog.bom(id) else {
            return Ok(None);
        };
        let resolved = bom.resolve(id, &self.platform_version)?;
        let version = match resolved.version_property {
            Some(property) => VersionReference::of_property(property),
            None => VersionReference::of_value(resolved.version),
        };
        Ok(Some(ResolvedBomImport {
            group_id: resolved.group_id,
            artifact_id: resolved.artifact_id,
            version,
            order: resolved.order,
        }))
    }

    /// Resolves a repository id; `"maven-central"` short-circuits to the
    /// central repository constant
    pub fn resolve_repository(&self, id: &str) -> Option<RepositoryCoordinates> {
        if id == "maven-central" {
            return Some(RepositoryCoordinates::maven_central());
        }
        self.catalog
            .repository(id)
            .map(|repository| RepositoryCoordinates {
                id: id.to_string(),
                name: repository.name.clone(),
                url: repository.url.clone(),
                snapshots_enabled: repository.snapshots_enabled,
            })
    }
}
