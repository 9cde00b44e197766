//! Version range predicate
//!
//! A square bracket denotes an inclusive end of the range and a round
//! bracket an exclusive end. A range without bracket syntax is unbounded:
//! the named version and anything after it.
//!
//! - `[1.2.0.RELEASE,1.3.0.RELEASE)`: 1.2.0 up to, but not including, 1.3.0
//! - `(2.0.0.RELEASE,3.2.0.RELEASE]`: anything after 2.0.0 up to and
//!   including 3.2.0
//! - `1.4.5.RELEASE`: 1.4.5 and all later versions

use std::cmp::Ordering;
use std::fmt;

use crate::error::VersionError;
use crate::version::parser::VersionParser;
use crate::version::version::{QualifierOrder, Version};

/// An upper/lower bound pair over versions, each bound optionally inclusive.
/// Invariant, enforced by the parser: when an upper bound is present the
/// lower bound does not exceed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    lower: Version,
    lower_inclusive: bool,
    upper: Option<Version>,
    upper_inclusive: bool,
}

impl VersionRange {
    /// Creates a range matching the given version and any later one
    pub fn unbounded(lower: Version) -> Self {
        Self {
            lower,
            lower_inclusive: true,
            upper: None,
            upper_inclusive: false,
        }
    }

    pub(crate) fn bounded(
        lower: Version,
        lower_inclusive: bool,
        upper: Version,
        upper_inclusive: bool,
    ) -> Self {
        Self {
            lower,
            lower_inclusive,
            upper: Some(upper),
            upper_inclusive,
        }
    }

    /// Parses a range expression with the default parser
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        VersionParser::default().parse_range(text)
    }

    /// Returns whether the version is contained in this range
    pub fn matches(&self, version: &Version) -> bool {
        self.matches_with(version, &QualifierOrder::default())
    }

    /// Returns whether the version is contained in this range, comparing
    /// qualifiers under the given precedence table
    pub fn matches_with(&self, version: &Version, order: &QualifierOrder) -> bool {
        match self.lower.compare(version, order) {
            Ordering::Greater => return false,
            Ordering::Equal if !self.lower_inclusive => return false,
            _ => {}
        }
        if let Some(ref upper) = self.upper {
            match upper.compare(version, order) {
                Ordering::Less => return false,
                Ordering::Equal if !self.upper_inclusive => return false,
                _ => {}
            }
        }
        true
    }

    pub fn lower(&self) -> &Version {
        &self.lower
    }

    pub fn is_lower_inclusive(&self) -> bool {
        self.lower_inclusive
    }

    /// The upper bound, `None` for an unbounded range
    pub fn upper(&self) -> Option<&Version> {
        self.upper.as_ref()
    }

    pub fn is_upper_inclusive(&self) -> bool {
        self.upper_inclusive
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper {
            Some(ref upper) => write!(
                f,
                "{}{},{}{}",
                if self.lower_inclusive { "[" } else { "(" },
                self.lower,
                upper,
                if self.upper_inclusive { "]" } else { ")" },
            ),
            None => write!(f, ">={}", self.lower),
        }
    }
}
