//! Platform version value type
//!
//! A version is `MAJOR.MINOR.PATCH[.QUALIFIER]` where the qualifier is
//! optional and may carry a trailing counter, e.g. `1.2.0.RC1` is the first
//! release candidate of 1.2.0. The main purpose of parsing a version is to
//! compare it with another version: qualifiers are ordered by a precedence
//! table (`QualifierOrder`) rather than plain text, so `1.2.0.M4` sorts
//! before `1.2.0.RC1` which sorts before `1.2.0.RELEASE`.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use crate::error::VersionError;
use crate::version::parser::VersionParser;

static DEFAULT_ORDER: LazyLock<QualifierOrder> = LazyLock::new(QualifierOrder::default);

/// A version qualifier: a textual id plus an optional trailing counter.
///
/// `RC2` parses as id `RC` with counter `2`; the counter is compared
/// numerically so `RC10` sorts after `RC9`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Qualifier {
    /// The qualifier text without its trailing counter
    pub id: String,
    /// The trailing counter, if any
    pub number: Option<u32>,
}

impl Qualifier {
    /// Creates a new qualifier without a counter
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number: None,
        }
    }

    /// Creates a new qualifier with a counter
    pub fn with_number(id: impl Into<String>, number: u32) -> Self {
        Self {
            id: id.into(),
            number: Some(number),
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if let Some(number) = self.number {
            write!(f, "{}", number)?;
        }
        Ok(())
    }
}

/// Precedence table for version qualifiers.
///
/// The table is an ordered list of known qualifier ids, earliest (least
/// mature) first. Qualifiers absent from the table sort lexicographically
/// after every known qualifier; a version without qualifier sorts as
/// `RELEASE`. The table is supplied externally because the relative order of
/// the less common qualifiers follows catalog conventions, not a fixed rule.
#[derive(Debug, Clone)]
pub struct QualifierOrder {
    known: Vec<String>,
}

impl QualifierOrder {
    /// The qualifier an absent qualifier is equivalent to
    pub const RELEASE: &'static str = "RELEASE";

    /// Creates a precedence table from an ordered list of qualifier ids
    pub fn new(known: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            known: known.into_iter().map(Into::into).collect(),
        }
    }

    /// Compares two optional qualifiers under this table
    pub fn compare(&self, first: Option<&Qualifier>, second: Option<&Qualifier>) -> Ordering {
        let release = Qualifier::new(Self::RELEASE);
        let first = first.unwrap_or(&release);
        let second = second.unwrap_or(&release);

        let first_index = self.index_of(&first.id);
        let second_index = self.index_of(&second.id);

        let by_id = match (first_index, second_index) {
            // Both unknown: alphabetic ordering
            (None, None) => first.id.cmp(&second.id),
            // Unknown qualifiers sort after every known one
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(&b),
        };
        if by_id != Ordering::Equal {
            return by_id;
        }
        first.number.unwrap_or(0).cmp(&second.number.unwrap_or(0))
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.known.iter().position(|known| known == id)
    }
}

impl Default for QualifierOrder {
    /// The conventional catalog ordering: milestones, then release
    /// candidates, then snapshots, then final releases and service releases.
    fn default() -> Self {
        Self::new(["M", "RC", "BUILD-SNAPSHOT", "SNAPSHOT", "RELEASE", "SR"])
    }
}

/// An immutable version value, created only by the parser
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
    qualifier: Option<Qualifier>,
}

impl Version {
    pub(crate) fn new(major: u32, minor: u32, patch: u32, qualifier: Option<Qualifier>) -> Self {
        Self {
            major,
            minor,
            patch,
            qualifier,
        }
    }

    /// Parses a version string with the default parser (no known versions,
    /// so wildcard forms resolve to the `999` sentinel)
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        VersionParser::default().parse(text)
    }

    /// Parses a version string, returning `None` for invalid input
    pub fn safe_parse(text: &str) -> Option<Self> {
        VersionParser::default().safe_parse(text)
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    pub fn qualifier(&self) -> Option<&Qualifier> {
        self.qualifier.as_ref()
    }

    /// Compares two versions under the given qualifier precedence table
    pub fn compare(&self, other: &Version, order: &QualifierOrder) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| order.compare(self.qualifier(), other.qualifier()))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other, &DEFAULT_ORDER)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(ref qualifier) = self.qualifier {
            write!(f, ".{}", qualifier)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> Version {
        Version::parse(text).unwrap()
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["1.2.0", "1.2.0.RELEASE", "1.2.0.RC2", "2.0.0.BUILD-SNAPSHOT"] {
            assert_eq!(v(text).to_string(), text);
        }
    }

    #[test]
    fn test_equality_requires_all_components() {
        assert_eq!(v("1.2.0.RELEASE"), v("1.2.0.RELEASE"));
        assert_ne!(v("1.2.0.RELEASE"), v("1.2.1.RELEASE"));
        assert_ne!(v("1.2.0.RELEASE"), v("1.2.0"));
        assert_ne!(v("1.2.0.RC1"), v("1.2.0.RC2"));
    }

    #[test]
    fn test_numeric_ordering() {
        assert!(v("1.2.0") < v("2.0.0"));
        assert!(v("1.2.0") < v("1.10.0"));
        assert!(v("1.2.9") < v("1.2.10"));
    }

    #[test]
    fn test_qualifier_ordering() {
        assert!(v("1.2.0.M4") < v("1.2.0.RC1"));
        assert!(v("1.2.0.RC1") < v("1.2.0.BUILD-SNAPSHOT"));
        assert!(v("1.2.0.BUILD-SNAPSHOT") < v("1.2.0.RELEASE"));
        assert!(v("1.2.0.RELEASE") < v("1.2.0.SR1"));
    }

    #[test]
    fn test_no_qualifier_sorts_as_release() {
        assert_eq!(v("1.2.0").cmp(&v("1.2.0.RELEASE")), Ordering::Equal);
        assert!(v("1.2.0.RC5") < v("1.2.0"));
        assert!(v("1.2.0") < v("1.2.0.SR1"));
    }

    #[test]
    fn test_qualifier_counter_compared_numerically() {
        assert!(v("1.2.0.RC1") < v("1.2.0.RC3"));
        assert!(v("1.2.0.RC9") < v("1.2.0.RC10"));
        assert!(v("1.2.0.M1") < v("1.2.0.M2"));
    }

    #[test]
    fn test_unknown_qualifiers_sort_after_known() {
        assert!(v("1.2.0.RELEASE") < v("1.2.0.alpha"));
        assert!(v("1.2.0.SR3") < v("1.2.0.zeta"));
        // Both unknown: alphabetic
        assert!(v("1.2.0.alpha") < v("1.2.0.beta"));
    }

    #[test]
    fn test_ordering_is_total() {
        let a = v("1.2.0.RC1");
        let b = v("1.2.0.RELEASE");
        let c = v("1.3.0");
        assert_eq!(a.cmp(&a), Ordering::Equal);
        assert!(a < b && b < c && a < c);
        assert_eq!(b.cmp(&a), Ordering::Greater);
    }

    #[test]
    fn test_custom_qualifier_order() {
        // A table that sorts snapshots after releases
        let order = QualifierOrder::new(["M", "RC", "RELEASE", "SR", "BUILD-SNAPSHOT"]);
        let snapshot = v("1.2.0.BUILD-SNAPSHOT");
        let release = v("1.2.0.RELEASE");
        assert_eq!(release.compare(&snapshot, &order), Ordering::Less);
        // The default table keeps snapshots before releases
        assert!(snapshot < release);
    }

    #[test]
    fn test_qualifier_display() {
        assert_eq!(Qualifier::new("RELEASE").to_string(), "RELEASE");
        assert_eq!(Qualifier::with_number("RC", 2).to_string(), "RC2");
    }

    #[test]
    fn test_accessors() {
        let version = v("1.2.3.RC4");
        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), 2);
        assert_eq!(version.patch(), 3);
        let qualifier = version.qualifier().unwrap();
        assert_eq!(qualifier.id, "RC");
        assert_eq!(qualifier.number, Some(4));
    }
}
