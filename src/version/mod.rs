//! Version model: parsing, ordering, ranges and references
//!
//! This module contains the value types the resolution engine is built on:
//! - Version with its qualifier-aware total ordering
//! - VersionParser for literal and variable (wildcard) version forms
//! - VersionRange predicates with inclusive/exclusive bounds
//! - VersionProperty/VersionReference for externalized version values

mod parser;
mod range;
mod reference;
#[allow(clippy::module_inception)]
mod version;

pub use parser::VersionParser;
pub use range::VersionRange;
pub use reference::{VersionProperty, VersionReference};
pub use version::{Qualifier, QualifierOrder, Version};
