//! Metadata catalog: dependencies, BOMs and repositories
//!
//! The catalog is author-maintained, loaded once and read-only afterwards;
//! every resolution request is a pure read over it. Declaration order of
//! dependencies and of their mappings is preserved because mapping lookup is
//! first-match-wins.

mod bom;
mod dependency;
mod loader;
mod repository;

pub use bom::{BillOfMaterials, ResolvedBom};
pub use dependency::{Dependency, Mapping, ResolvedDependency, SCOPE_ALL};
pub use loader::load_catalog;
pub use repository::Repository;

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::CatalogError;
use crate::version::{QualifierOrder, Version, VersionParser, VersionRange};

/// The read-only metadata catalog the resolution engine works against
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataCatalog {
    /// Known concrete platform versions; the pool variable versions resolve
    /// against
    #[serde(default)]
    pub platform_versions: Vec<String>,
    /// Platform version assumed when the caller names none
    #[serde(default)]
    pub default_platform: Option<String>,
    /// Qualifier precedence table override, earliest first
    #[serde(default)]
    pub qualifier_order: Option<Vec<String>>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub boms: HashMap<String, BillOfMaterials>,
    #[serde(default)]
    pub repositories: HashMap<String, Repository>,
    #[serde(skip)]
    parser: VersionParser,
}

impl MetadataCatalog {
    /// Parses a catalog from its TOML representation and compiles it
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let mut catalog: MetadataCatalog = toml::from_str(content)
            .map_err(|err| CatalogError::toml_parse_error("<inline>", err.to_string()))?;
        catalog.compile()?;
        Ok(catalog)
    }

    /// Validates every entity and compiles all range expressions.
    ///
    /// Range expressions are parsed eagerly so a malformed catalog fails at
    /// load instead of at resolution time.
    pub fn compile(&mut self) -> Result<(), CatalogError> {
        let order = match self.qualifier_order {
            Some(ref known) => QualifierOrder::new(known.iter().cloned()),
            None => QualifierOrder::default(),
        };
        let bootstrap = VersionParser::with_order(Vec::new(), order.clone());
        let mut known = Vec::with_capacity(self.platform_versions.len());
        for text in &self.platform_versions {
            known.push(bootstrap.parse(text).map_err(|err| {
                CatalogError::invalid_metadata("platform_versions", err.to_string())
            })?);
        }
        self.parser = VersionParser::with_order(known, order);

        for dependency in &mut self.dependencies {
            dependency.compile(&self.parser)?;
        }
        for (id, bom) in &mut self.boms {
            bom.compile(id, &self.parser)?;
        }
        Ok(())
    }

    /// The parser configured with this catalog's known versions and
    /// qualifier table
    pub fn parser(&self) -> &VersionParser {
        &self.parser
    }

    /// Looks up a dependency by primary id or alias
    pub fn dependency(&self, id: &str) -> Option<&Dependency> {
        self.dependencies
            .iter()
            .find(|dependency| dependency.answers_to(id))
    }

    /// Looks up a BOM by id
    pub fn bom(&self, id: &str) -> Option<&BillOfMaterials> {
        self.boms.get(id)
    }

    /// Looks up a repository by id
    pub fn repository(&self, id: &str) -> Option<&Repository> {
        self.repositories.get(id)
    }

    /// Reports catalog oddities that are not hard errors.
    ///
    /// Mapping lookup is first-match-in-declaration-order, which silently
    /// depends on authors keeping ranges disjoint; overlapping ranges on the
    /// same entity are flagged here so they can be fixed rather than
    /// silently shadowed.
    pub fn lint(&self) -> Vec<String> {
        let order = self.parser.order();
        let mut warnings = Vec::new();
        for dependency in &self.dependencies {
            let ranges: Vec<&VersionRange> =
                dependency.mappings.iter().filter_map(|m| m.range()).collect();
            warn_on_overlap(&mut warnings, &dependency.id, &ranges, order);
        }
        for (id, bom) in &self.boms {
            let ranges: Vec<&VersionRange> = bom.mapping_ranges().collect();
            warn_on_overlap(&mut warnings, id, &ranges, order);
        }
        warnings
    }
}

fn warn_on_overlap(
    warnings: &mut Vec<String>,
    id: &str,
    ranges: &[&VersionRange],
    order: &QualifierOrder,
) {
    for (index, first) in ranges.iter().enumerate() {
        for second in &ranges[index + 1..] {
            if ranges_overlap(first, second, order) {
                warnings.push(format!(
                    "'{}': mapping ranges {} and {} overlap; the first declared one wins",
                    id, first, second
                ));
            }
        }
    }
}

/// Interval overlap: neither range ends strictly before the other starts
fn ranges_overlap(first: &VersionRange, second: &VersionRange, order: &QualifierOrder) -> bool {
    !ends_before(first, second, order) && !ends_before(second, first, order)
}

fn ends_before(range: &VersionRange, other: &VersionRange, order: &QualifierOrder) -> bool {
    let Some(upper) = range.upper() else {
        return false;
    };
    match upper.compare(other.lower(), order) {
        std::cmp::Ordering::Less => true,
        std::cmp::Ordering::Equal => !(range.is_upper_inclusive() && other.is_lower_inclusive()),
        std::cmp::Ordering::Greater => false,
    }
}
