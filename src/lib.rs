//! vercat - Platform metadata resolution library
//!
//! This library provides the core functionality for resolving build
//! metadata against a platform version:
//! - Version parsing, ordering and ranges (with qualifier precedence)
//! - Metadata catalogs of dependencies, BOMs and repositories
//! - Mapping-based coordinate resolution per platform version
//! - Dependency range reporting

pub mod catalog;
pub mod cli;
pub mod error;
pub mod output;
pub mod report;
pub mod resolver;
pub mod version;
