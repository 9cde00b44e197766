//! Dependency ranges report
//!
//! An informational view of which platform range each catalog entry actually
//! covers, per pinned version. This feeds diagnostics only; the build
//! resolution path in `resolver` never consults it, so a reporting bug
//! cannot change generated coordinates.
//!
//! When every mapping of an entity is capped by an upper bound and none of
//! them pins the entity's own default version, the report adds a synthetic
//! `managed` entry starting at the highest upper bound: past every
//! explicitly pinned range, that is the newest version known to be
//! compatible. Any open-ended mapping already covers "everything above", so
//! it suppresses the synthesis.

use serde::Serialize;
use std::cmp::Ordering;

use crate::catalog::{BillOfMaterials, Dependency, Mapping, MetadataCatalog};
use crate::version::{QualifierOrder, VersionRange};

/// Label of the synthetic entry covering versions past every pinned range
pub const MANAGED_LABEL: &str = "managed";

/// One pinned version and the platform range it applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeEntry {
    /// The pinned version, or `managed` for the synthetic entry
    pub label: String,
    /// Platform range requirement, e.g. `[1.0.0.RELEASE,2.0.0.RELEASE)`
    pub requirement: String,
}

/// The ranges covered by a single catalog entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityRanges {
    pub id: String,
    pub entries: Vec<RangeEntry>,
}

/// Report over every dependency and BOM carrying explicit versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyRangesReport {
    pub dependencies: Vec<EntityRanges>,
    pub boms: Vec<EntityRanges>,
}

impl DependencyRangesReport {
    /// Builds the report for the given catalog
    pub fn generate(catalog: &MetadataCatalog) -> Self {
        let order = catalog.parser().order();
        let dependencies = catalog
            .dependencies
            .iter()
            // Dependencies relying on a BOM have no version of their own
            .filter(|dependency| dependency.bom.is_none())
            .filter_map(|dependency| dependency_ranges(dependency, order))
            .collect();

        let mut entries: Vec<(&String, &BillOfMaterials)> = catalog.boms.iter().collect();
        entries.sort_by_key(|(id, _)| *id);
        let boms = entries
            .into_iter()
            .filter_map(|(id, bom)| bom_ranges(id, bom, order))
            .collect();

        Self { dependencies, boms }
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.boms.is_empty()
    }
}

fn dependency_ranges(dependency: &Dependency, order: &QualifierOrder) -> Option<EntityRanges> {
    if !dependency.mappings.is_empty() {
        let mut entries = mapping_entries(&dependency.mappings);
        if entries.is_empty() {
            return None;
        }
        // An own availability range already states where the entity ends;
        // nothing past it is known to be compatible
        if dependency.version_range.is_none() {
            if let Some(managed) =
                synthesize_managed(&dependency.mappings, dependency.version.as_deref(), order)
            {
                entries.push(managed);
            }
        }
        return Some(EntityRanges {
            id: dependency.id.clone(),
            entries,
        });
    }
    // No mappings: report the availability range of the fixed version
    match (&dependency.version, &dependency.range) {
        (Some(version), Some(range)) => Some(EntityRanges {
            id: dependency.id.clone(),
            entries: vec![RangeEntry {
                label: version.clone(),
                requirement: range.to_string(),
            }],
        }),
        _ => None,
    }
}

fn bom_ranges(id: &str, bom: &BillOfMaterials, order: &QualifierOrder) -> Option<EntityRanges> {
    let mut entries = mapping_entries(&bom.mappings);
    if entries.is_empty() {
        return None;
    }
    if let Some(managed) = synthesize_managed(&bom.mappings, bom.version.as_deref(), order) {
        entries.push(managed);
    }
    Some(EntityRanges {
        id: id.to_string(),
        entries,
    })
}

fn mapping_entries(mappings: &[Mapping]) -> Vec<RangeEntry> {
    mappings
        .iter()
        .filter_map(|mapping| {
            let range = mapping.range()?;
            let version = mapping.version.as_ref()?;
            Some(RangeEntry {
                label: version.clone(),
                requirement: range.to_string(),
            })
        })
        .collect()
}

/// Synthesizes the `managed` entry, or `None` when an open-ended mapping
/// exists, a mapping already pins the default version, or nothing is mapped
fn synthesize_managed(
    mappings: &[Mapping],
    default_version: Option<&str>,
    order: &QualifierOrder,
) -> Option<RangeEntry> {
    if let Some(default_version) = default_version {
        let pinned_by_mapping = mappings
            .iter()
            .any(|mapping| mapping.version.as_deref() == Some(default_version));
        if pinned_by_mapping {
            return None;
        }
    }
    let mut highest = None;
    for mapping in mappings {
        // An unbounded mapping leaves nothing above it to report
        let upper = mapping.range()?.upper()?;
        if highest.map_or(true, |current| {
            upper.compare(current, order) == Ordering::Greater
        }) {
            highest = Some(upper);
        }
    }
    highest.map(|upper| RangeEntry {
        label: MANAGED_LABEL.to_string(),
        requirement: VersionRange::unbounded(upper.clone()).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(toml: &str) -> DependencyRangesReport {
        DependencyRangesReport::generate(&MetadataCatalog::from_toml(toml).unwrap())
    }

    const MAPPED: &str = r#"
        [[dependencies]]
        id = "com.acme:security"

        [[dependencies.mappings]]
        version_range = "[1.0.0.RELEASE,1.1.0.RELEASE)"
        version = "0.9.0.RELEASE"

        [[dependencies.mappings]]
        version_range = "[1.1.0.RELEASE,1.3.0.RELEASE)"
        version = "0.10.0.RELEASE"
    "#;

    #[test]
    fn test_managed_entry_synthesized_when_all_ranges_bounded() {
        let report = report(MAPPED);
        let entries = &report.dependencies[0].entries;
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].label, "0.9.0.RELEASE");
        assert_eq!(entries[0].requirement, "[1.0.0.RELEASE,1.1.0.RELEASE)");
        assert_eq!(entries[2].label, MANAGED_LABEL);
        assert_eq!(entries[2].requirement, ">=1.3.0.RELEASE");
    }

    #[test]
    fn test_no_managed_entry_when_a_range_is_open_ended() {
        let report = report(
            r#"
            [[dependencies]]
            id = "com.acme:security"

            [[dependencies.mappings]]
            version_range = "[1.0.0.RELEASE,1.1.0.RELEASE)"
            version = "0.9.0.RELEASE"

            [[dependencies.mappings]]
            version_range = "1.1.0.RELEASE"
            version = "0.10.0.RELEASE"
            "#,
        );
        let entries = &report.dependencies[0].entries;
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|entry| entry.label != MANAGED_LABEL));
    }

    #[test]
    fn test_no_managed_entry_when_default_version_pinned_by_mapping() {
        let report = report(
            r#"
            [[dependencies]]
            id = "com.acme:security"
            version = "0.9.0.RELEASE"

            [[dependencies.mappings]]
            version_range = "[1.0.0.RELEASE,1.1.0.RELEASE)"
            version = "0.9.0.RELEASE"
            "#,
        );
        let entries = &report.dependencies[0].entries;
        assert!(entries.iter().all(|entry| entry.label != MANAGED_LABEL));
    }

    #[test]
    fn test_no_managed_entry_when_entity_has_own_availability_range() {
        let report = report(
            r#"
            [[dependencies]]
            id = "com.acme:security"
            version_range = "[1.0.0.RELEASE,3.0.0.RELEASE)"

            [[dependencies.mappings]]
            version_range = "[1.0.0.RELEASE,2.0.0.RELEASE)"
            version = "0.9.0.RELEASE"
            "#,
        );
        let entries = &report.dependencies[0].entries;
        assert_eq!(entries.len(), 1);
        assert!(entries.iter().all(|entry| entry.label != MANAGED_LABEL));
    }

    #[test]
    fn test_managed_entry_compares_bounds_under_catalog_qualifier_order() {
        // A table dating snapshots after releases
        let report = report(
            r#"
            qualifier_order = ["M", "RC", "RELEASE", "SR", "BUILD-SNAPSHOT"]

            [[dependencies]]
            id = "com.acme:security"

            [[dependencies.mappings]]
            version_range = "[1.0.0.RELEASE,2.0.0.RELEASE)"
            version = "0.9.0.RELEASE"

            [[dependencies.mappings]]
            version_range = "[2.0.0.RELEASE,2.0.0.BUILD-SNAPSHOT)"
            version = "0.10.0.RELEASE"
            "#,
        );
        let entries = &report.dependencies[0].entries;
        assert_eq!(entries.last().unwrap().label, MANAGED_LABEL);
        assert_eq!(
            entries.last().unwrap().requirement,
            ">=2.0.0.BUILD-SNAPSHOT"
        );
    }

    #[test]
    fn test_managed_entry_uses_maximum_upper_bound() {
        let report = report(
            r#"
            [[dependencies]]
            id = "com.acme:security"

            [[dependencies.mappings]]
            version_range = "[2.0.0.RELEASE,3.0.0.RELEASE)"
            version = "b.RELEASE"

            [[dependencies.mappings]]
            version_range = "[1.0.0.RELEASE,2.0.0.RELEASE)"
            version = "a.RELEASE"
            "#,
        );
        let entries = &report.dependencies[0].entries;
        assert_eq!(entries.last().unwrap().requirement, ">=3.0.0.RELEASE");
    }

    #[test]
    fn test_fixed_version_with_availability_range() {
        let report = report(
            r#"
            [[dependencies]]
            id = "com.acme:modern"
            version = "1.0.0.RELEASE"
            version_range = "2.0.0.RELEASE"
            "#,
        );
        let entries = &report.dependencies[0].entries;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "1.0.0.RELEASE");
        assert_eq!(entries[0].requirement, ">=2.0.0.RELEASE");
    }

    #[test]
    fn test_dependencies_managed_by_bom_excluded() {
        let report = report(
            r#"
            [[dependencies]]
            id = "com.acme:bommed"
            version = "1.0.0.RELEASE"
            version_range = "2.0.0.RELEASE"
            bom = "acme-bom"

            [boms.acme-bom]
            group_id = "com.acme"
            artifact_id = "acme-bom"
            version = "Arcturus.RELEASE"
            "#,
        );
        assert!(report.is_empty());
    }

    #[test]
    fn test_bom_section_with_managed_entry() {
        let report = report(
            r#"
            [boms.acme-bom]
            group_id = "com.acme"
            artifact_id = "acme-bom"

            [[boms.acme-bom.mappings]]
            version_range = "[1.0.0.RELEASE,2.0.0.RELEASE)"
            version = "Arcturus.RELEASE"
            "#,
        );
        assert_eq!(report.boms.len(), 1);
        let entries = &report.boms[0].entries;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].label, MANAGED_LABEL);
        assert_eq!(entries[1].requirement, ">=2.0.0.RELEASE");
    }

    #[test]
    fn test_unversioned_dependency_without_range_excluded() {
        let report = report(
            r#"
            [[dependencies]]
            id = "com.acme:plain"
            "#,
        );
        assert!(report.is_empty());
    }
}
