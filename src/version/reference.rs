//! Version references for generated build files
//!
//! A resolved coordinate either pins a literal version value or points at a
//! named build property so downstream writers can emit a `${property}`
//! placeholder instead of a hard-coded value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The name of a build property holding a version value.
///
/// Property names are lower case and restricted to letters, digits, `.` and
/// `-` so they stay valid across Maven properties and Gradle extra
/// properties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionProperty(String);

impl VersionProperty {
    /// Creates a property name, validating its format
    pub fn new(property: impl Into<String>) -> Result<Self, String> {
        let property = property.into();
        for c in property.chars() {
            if c.is_uppercase() {
                return Err(format!(
                    "invalid property '{}': must not contain upper case",
                    property
                ));
            }
            if !c.is_alphanumeric() && c != '.' && c != '-' {
                return Err(format!(
                    "unsupported character '{}' in property '{}'",
                    c, property
                ));
            }
        }
        Ok(Self(property))
    }

    /// The property name in its standard dotted format
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The property name in camel case, as Gradle extra properties use it
    pub fn to_camel_case(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut capitalize = false;
        for c in self.0.chars() {
            if c == '.' || c == '-' {
                capitalize = true;
            } else if capitalize {
                out.extend(c.to_uppercase());
                capitalize = false;
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl TryFrom<String> for VersionProperty {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VersionProperty> for String {
    fn from(property: VersionProperty) -> String {
        property.0
    }
}

impl fmt::Display for VersionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Either a literal version value or a reference to a build property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionReference {
    /// A literal version value
    Value(String),
    /// A named build property carrying the version
    Property(VersionProperty),
}

impl VersionReference {
    /// Creates a literal version reference
    pub fn of_value(value: impl Into<String>) -> Self {
        VersionReference::Value(value.into())
    }

    /// Creates a property version reference
    pub fn of_property(property: VersionProperty) -> Self {
        VersionReference::Property(property)
    }

    /// Returns true when this reference points at a build property
    pub fn is_property(&self) -> bool {
        matches!(self, VersionReference::Property(_))
    }
}

impl fmt::Display for VersionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionReference::Value(value) => write!(f, "{}", value),
            VersionReference::Property(property) => write!(f, "${{{}}}", property),
        }
    }
}
