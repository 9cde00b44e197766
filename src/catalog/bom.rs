//! Bill-of-materials metadata and its platform-version resolution
//!
//! A BOM is represented in the generated project when one of its
//! dependencies is selected. Its version is either pinned per platform line
//! through mappings or externalized into a build property.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;
use crate::version::{Version, VersionParser, VersionProperty, VersionRange};

use super::dependency::Mapping;

fn default_order() -> i32 {
    i32::MAX
}

/// Metadata for a bill of materials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    pub group_id: String,
    pub artifact_id: String,
    /// Default version; may be `None` when every platform line is covered
    /// by a mapping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// When set, the version is emitted as a `${property}` placeholder and
    /// the property itself carries the resolved value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_property: Option<VersionProperty>,
    /// Relative import order; lower values have higher priority
    #[serde(default = "default_order")]
    pub order: i32,
    /// BOM ids to pull in whenever this BOM is required
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_boms: Vec<String>,
    /// Repository ids required by this BOM
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mappings: Vec<Mapping>,
}

/// A BOM with its version and related ids settled for one platform version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBom {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub version_property: Option<VersionProperty>,
    pub order: i32,
    pub additional_boms: Vec<String>,
    pub repositories: Vec<String>,
}

impl BillOfMaterials {
    /// Creates a BOM with a fixed default version
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: Some(version.into()),
            version_property: None,
            order: default_order(),
            additional_boms: Vec::new(),
            repositories: Vec::new(),
            mappings: Vec::new(),
        }
    }

    /// Validates the declaration and compiles every mapping range
    pub(crate) fn compile(&mut self, id: &str, parser: &VersionParser) -> Result<(), CatalogError> {
        if self.version.is_none() && self.mappings.is_empty() {
            return Err(CatalogError::invalid_metadata(
                id,
                "no version available; declare a version or at least one mapping",
            ));
        }
        for mapping in &mut self.mappings {
            mapping.range = Some(parser.parse_range(&mapping.version_range).map_err(|err| {
                CatalogError::invalid_mapping_range(id, &mapping.version_range, err)
            })?);
        }
        Ok(())
    }

    /// Resolves the version, repositories and additional BOMs applicable to
    /// the platform version.
    ///
    /// The first mapping (in declaration order) whose range matches wins;
    /// mapping fields left out fall back to the BOM's base values. Fails with
    /// `UnresolvedEntity` when no mapping matches and no default version
    /// exists.
    pub fn resolve(&self, id: &str, platform: &Version) -> Result<ResolvedBom, CatalogError> {
        let mapping = self
            .mappings
            .iter()
            .find(|mapping| matches!(mapping.range, Some(ref range) if range.matches(platform)));

        let version = mapping
            .and_then(|m| m.version.clone())
            .or_else(|| self.version.clone())
            .ok_or_else(|| CatalogError::unresolved_entity(id, platform))?;

        Ok(ResolvedBom {
            group_id: mapping
                .and_then(|m| m.group_id.clone())
                .unwrap_or_else(|| self.group_id.clone()),
            artifact_id: mapping
                .and_then(|m| m.artifact_id.clone())
                .unwrap_or_else(|| self.artifact_id.clone()),
            version,
            version_property: self.version_property.clone(),
            order: self.order,
            additional_boms: self.additional_boms.clone(),
            repositories: self.repositories.clone(),
        })
    }

    /// Returns the compiled mapping ranges, in declaration order
    pub fn mapping_ranges(&self) -> impl Iterator<Item = &VersionRange> {
        self.mappings.iter().filter_map(|mapping| mapping.range())
    }
}

impl fmt::Display for BillOfMaterials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}
