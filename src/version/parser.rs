//! Version and range expression parser
//!
//! Handles:
//! - Literal versions: `1.2.0`, `1.2.0.RELEASE`, `2.0.0.RC1`
//! - Variable versions: `1.3.x.BUILD-SNAPSHOT`, `1.x.x.RELEASE`, `1.4.x`
//! - Range expressions: `[1.0.0,2.0.0)`, `(1.0.0,2.0.0]`, bare `1.4.5.RELEASE`
//!
//! A parser is configured with a pool of known concrete versions; a variable
//! version resolves to the newest pool entry matching its fixed prefix and
//! qualifier. With no matching pool entry the wildcard components become the
//! `999` sentinel, so `1.4.x.BUILD-SNAPSHOT` against an empty pool parses to
//! `1.4.999.BUILD-SNAPSHOT` and still compares above any real `1.4` line.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::VersionError;
use crate::version::range::VersionRange;
use crate::version::version::{Qualifier, QualifierOrder, Version};

// Version: major.minor.patch with optional dot-separated qualifier; minor and
// patch may be the `x` wildcard
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+|x)\.(\d+|x)(?:\.([^0-9]+)(\d+)?)?$").unwrap());

// Bracket range: [lower,upper] with round brackets for exclusive ends
static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\(|\[)(.*),(.*)(\)|\])$").unwrap());

/// Sentinel substituted for wildcard components that cannot be resolved
/// against the known-version pool
const UNRESOLVED_SENTINEL: u32 = 999;

/// A parsed variable-version pattern: the fixed numeric prefix plus an
/// optional fixed qualifier. Ephemeral, only used while resolving.
struct VariableVersionExpression {
    major: u32,
    minor: Option<u32>,
    patch: Option<u32>,
    qualifier: Option<Qualifier>,
}

impl VariableVersionExpression {
    fn accepts(&self, candidate: &Version) -> bool {
        if self.major != candidate.major() {
            return false;
        }
        if let Some(minor) = self.minor {
            if minor != candidate.minor() {
                return false;
            }
        }
        if let Some(patch) = self.patch {
            if patch != candidate.patch() {
                return false;
            }
        }
        match self.qualifier {
            Some(ref qualifier) => Some(qualifier) == candidate.qualifier(),
            None => true,
        }
    }

    fn sentinel(self) -> Version {
        Version::new(
            self.major,
            self.minor.unwrap_or(UNRESOLVED_SENTINEL),
            self.patch.unwrap_or(UNRESOLVED_SENTINEL),
            self.qualifier,
        )
    }
}

/// Parser for versions and version ranges, resolving variable versions
/// against a configurable pool of known versions
#[derive(Debug, Clone, Default)]
pub struct VersionParser {
    known_versions: Vec<Version>,
    order: QualifierOrder,
}

impl VersionParser {
    /// Creates a parser resolving variable versions against the given pool
    pub fn new(known_versions: Vec<Version>) -> Self {
        Self {
            known_versions,
            order: QualifierOrder::default(),
        }
    }

    /// Creates a parser with a custom qualifier precedence table
    pub fn with_order(known_versions: Vec<Version>, order: QualifierOrder) -> Self {
        Self {
            known_versions,
            order,
        }
    }

    /// The qualifier precedence table this parser compares with
    pub fn order(&self) -> &QualifierOrder {
        &self.order
    }

    /// Parses the string representation of a version.
    ///
    /// Surrounding whitespace is ignored. Variable forms (`1.3.x`) resolve
    /// against the known-version pool.
    pub fn parse(&self, text: &str) -> Result<Version, VersionError> {
        let trimmed = text.trim();
        let captures = VERSION_RE
            .captures(trimmed)
            .ok_or_else(|| VersionError::invalid_version(text))?;

        // The numeric groups only contain digits, but huge components still
        // overflow; treat those as invalid rather than panicking
        let major: u32 = captures[1]
            .parse()
            .map_err(|_| VersionError::invalid_version(text))?;
        let minor_text = &captures[2];
        let patch_text = &captures[3];

        let qualifier = captures.get(4).map(|id| {
            let number = captures.get(5).and_then(|n| n.as_str().parse().ok());
            Qualifier {
                id: id.as_str().to_string(),
                number,
            }
        });

        let minor = parse_component(minor_text, text)?;
        let patch = parse_component(patch_text, text)?;
        // A wildcard propagates rightwards: 1.x.2 is not a valid pattern
        if minor.is_none() && patch.is_some() {
            return Err(VersionError::invalid_version(text));
        }

        match (minor, patch) {
            (Some(minor), Some(patch)) => Ok(Version::new(major, minor, patch, qualifier)),
            _ => Ok(self.resolve_variable(VariableVersionExpression {
                major,
                minor,
                patch,
                qualifier,
            })),
        }
    }

    /// Parses a version string, returning `None` for invalid input
    pub fn safe_parse(&self, text: &str) -> Option<Version> {
        self.parse(text).ok()
    }

    /// Parses the string representation of a version range.
    ///
    /// Bracket syntax gives a bounded range with the stated inclusivity on
    /// each side; a bare version gives an unbounded range starting at that
    /// version, inclusive.
    pub fn parse_range(&self, text: &str) -> Result<VersionRange, VersionError> {
        let trimmed = text.trim();
        let Some(captures) = RANGE_RE.captures(trimmed) else {
            // No bracket syntax: read it as a single version
            let version = self.parse(trimmed).map_err(|_| {
                VersionError::invalid_range(text, "not a version nor a bracket range expression")
            })?;
            return Ok(VersionRange::unbounded(version));
        };

        let lower_inclusive = &captures[1] == "[";
        let lower = self
            .parse(&captures[2])
            .map_err(|err| VersionError::invalid_range(text, err.to_string()))?;
        let upper = self
            .parse(&captures[3])
            .map_err(|err| VersionError::invalid_range(text, err.to_string()))?;
        let upper_inclusive = &captures[4] == "]";

        if lower.compare(&upper, &self.order) == std::cmp::Ordering::Greater {
            return Err(VersionError::invalid_range(
                text,
                format!("lower bound {} is above upper bound {}", lower, upper),
            ));
        }
        Ok(VersionRange::bounded(
            lower,
            lower_inclusive,
            upper,
            upper_inclusive,
        ))
    }

    fn resolve_variable(&self, expression: VariableVersionExpression) -> Version {
        let best = self
            .known_versions
            .iter()
            .filter(|candidate| expression.accepts(candidate))
            .max_by(|a, b| a.compare(b, &self.order));
        match best {
            Some(version) => version.clone(),
            None => expression.sentinel(),
        }
    }
}

fn parse_component(text: &str, full: &str) -> Result<Option<u32>, VersionError> {
    if text == "x" {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .map_err(|_| VersionError::invalid_version(full))
}
