//! Output formatting for resolution results
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for machine processing

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use serde::Serialize;
use std::io::Write;

use crate::report::DependencyRangesReport;
use crate::resolver::{RepositoryCoordinates, ResolvedBomImport, ResolvedCoordinates};

/// A resolved item paired with the id it was requested under
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedItem<T> {
    pub id: String,
    #[serde(flatten)]
    pub item: T,
}

impl<T> ResolvedItem<T> {
    pub fn new(id: impl Into<String>, item: T) -> Self {
        Self {
            id: id.into(),
            item,
        }
    }
}

/// An id that could not be resolved, with the reason
#[derive(Debug, Clone, Serialize)]
pub struct Failure {
    pub id: String,
    pub reason: String,
}

/// Everything a single resolver run produced, ready for formatting
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolutionOutcome {
    /// The platform version entities were resolved against
    pub platform: String,
    pub dependencies: Vec<ResolvedItem<ResolvedCoordinates>>,
    pub boms: Vec<ResolvedItem<ResolvedBomImport>>,
    pub repositories: Vec<ResolvedItem<RepositoryCoordinates>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<Failure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<DependencyRangesReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ResolutionOutcome {
    /// Returns true if any requested id failed to resolve
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Minimal output
    Quiet,
    /// Normal output
    #[default]
    Normal,
    /// Detailed output with additional information
    Verbose,
}

/// Configuration for output formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit JSON instead of human-readable text
    pub json: bool,
    pub verbosity: Verbosity,
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(json: bool, verbose: bool, quiet: bool) -> Self {
        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Self { json, verbosity }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the resolution outcome
    fn format(&self, outcome: &ResolutionOutcome, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    if config.json {
        Box::new(JsonFormatter::new())
    } else {
        Box::new(TextFormatter::new(config.verbosity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_default() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn test_output_config_from_cli() {
        let config = OutputConfig::from_cli(true, false, false);
        assert!(config.json);
        assert_eq!(config.verbosity, Verbosity::Normal);

        let config = OutputConfig::from_cli(false, true, false);
        assert_eq!(config.verbosity, Verbosity::Verbose);

        let config = OutputConfig::from_cli(false, false, true);
        assert_eq!(config.verbosity, Verbosity::Quiet);
    }

    #[test]
    fn test_outcome_has_failures() {
        let mut outcome = ResolutionOutcome::default();
        assert!(!outcome.has_failures());
        outcome.failures.push(Failure {
            id: "missing".to_string(),
            reason: "no catalog entry".to_string(),
        });
        assert!(outcome.has_failures());
    }
}
