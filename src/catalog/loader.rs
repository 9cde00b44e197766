//! Catalog file loading
//!
//! Catalogs are authored as TOML documents. Loading reads the file, parses
//! it and compiles every range expression so a malformed catalog is rejected
//! before any resolution runs.

use std::fs;
use std::path::Path;

use crate::error::CatalogError;

use super::MetadataCatalog;

/// Loads and compiles a catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<MetadataCatalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::not_found(path));
    }
    let content = fs::read_to_string(path).map_err(|err| CatalogError::read_error(path, err))?;
    let mut catalog: MetadataCatalog = toml::from_str(&content)
        .map_err(|err| CatalogError::toml_parse_error(path, err.to_string()))?;
    catalog.compile()?;
    Ok(catalog)
}
