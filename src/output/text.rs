//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Resolved coordinate display with colors
//! - The dependency-ranges report rendering
//! - Failure and lint warning display

use colored::Colorize;
use std::io::Write;

use crate::output::{OutputFormatter, ResolutionOutcome, Verbosity};
use crate::report::{DependencyRangesReport, MANAGED_LABEL};

/// Text formatter for human-readable output
pub struct TextFormatter {
    verbosity: Verbosity,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    fn format_report(
        &self,
        report: &DependencyRangesReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer, "{}", "Dependency ranges:".bold())?;
        for section in [&report.dependencies, &report.boms] {
            for entity in section {
                writeln!(writer, "  {}", entity.id.cyan())?;
                for entry in &entity.entries {
                    let label = if entry.label == MANAGED_LABEL {
                        entry.label.yellow()
                    } else {
                        entry.label.normal()
                    };
                    writeln!(writer, "    {} for platform {}", label, entry.requirement)?;
                }
            }
        }
        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, outcome: &ResolutionOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity != Verbosity::Quiet {
            writeln!(
                writer,
                "{} {}",
                "Platform version:".bold(),
                outcome.platform
            )?;
        }

        if !outcome.dependencies.is_empty() {
            writeln!(writer, "{}", "Dependencies:".bold())?;
            for dependency in &outcome.dependencies {
                let scope = dependency
                    .item
                    .scope
                    .map(|scope| format!(" ({})", scope.token()))
                    .unwrap_or_default();
                writeln!(
                    writer,
                    "  {} {} {}{}",
                    dependency.id.cyan(),
                    "->".dimmed(),
                    dependency.item,
                    scope.dimmed(),
                )?;
            }
        }

        if !outcome.boms.is_empty() {
            writeln!(writer, "{}", "Bills of materials:".bold())?;
            for bom in &outcome.boms {
                writeln!(writer, "  {} {} {}", bom.id.cyan(), "->".dimmed(), bom.item)?;
            }
        }

        if !outcome.repositories.is_empty() {
            writeln!(writer, "{}", "Repositories:".bold())?;
            for repository in &outcome.repositories {
                let snapshots = if repository.item.snapshots_enabled {
                    " [snapshots]"
                } else {
                    ""
                };
                writeln!(
                    writer,
                    "  {} {} {} ({}){}",
                    repository.id.cyan(),
                    "->".dimmed(),
                    repository.item.name,
                    repository.item.url,
                    snapshots.dimmed(),
                )?;
            }
        }

        if let Some(ref report) = outcome.report {
            self.format_report(report, writer)?;
        }

        if !outcome.failures.is_empty() {
            writeln!(writer, "{}", "Failures:".red().bold())?;
            for failure in &outcome.failures {
                writeln!(writer, "  {}: {}", failure.id.red(), failure.reason)?;
            }
        }

        if self.verbosity == Verbosity::Verbose && !outcome.warnings.is_empty() {
            writeln!(writer, "{}", "Warnings:".yellow().bold())?;
            for warning in &outcome.warnings {
                writeln!(writer, "  {}", warning)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{Failure, ResolvedItem};
    use crate::resolver::{DependencyScope, ResolvedCoordinates};
    use crate::version::VersionReference;

    fn render(outcome: &ResolutionOutcome, verbosity: Verbosity) -> String {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        TextFormatter::new(verbosity)
            .format(outcome, &mut buffer)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn sample_outcome() -> ResolutionOutcome {
        ResolutionOutcome {
            platform: "2.0.0.RELEASE".to_string(),
            dependencies: vec![ResolvedItem::new(
                "security",
                ResolvedCoordinates {
                    group_id: "com.acme".to_string(),
                    artifact_id: "acme-security".to_string(),
                    version: Some(VersionReference::of_value("0.9.0.RELEASE")),
                    scope: Some(DependencyScope::Runtime),
                },
            )],
            ..Default::default()
        }
    }

    #[test]
    fn test_format_lists_coordinates_and_scope() {
        let text = render(&sample_outcome(), Verbosity::Normal);
        assert!(text.contains("Platform version: 2.0.0.RELEASE"));
        assert!(text.contains("security -> com.acme:acme-security:0.9.0.RELEASE (runtime)"));
    }

    #[test]
    fn test_quiet_omits_platform_header() {
        let text = render(&sample_outcome(), Verbosity::Quiet);
        assert!(!text.contains("Platform version"));
        assert!(text.contains("acme-security"));
    }

    #[test]
    fn test_failures_are_listed() {
        let mut outcome = sample_outcome();
        outcome.failures.push(Failure {
            id: "missing".to_string(),
            reason: "no catalog entry".to_string(),
        });
        let text = render(&outcome, Verbosity::Normal);
        assert!(text.contains("Failures:"));
        assert!(text.contains("missing: no catalog entry"));
    }

    #[test]
    fn test_warnings_only_in_verbose() {
        let mut outcome = sample_outcome();
        outcome.warnings.push("ranges overlap".to_string());
        assert!(!render(&outcome, Verbosity::Normal).contains("ranges overlap"));
        assert!(render(&outcome, Verbosity::Verbose).contains("ranges overlap"));
    }
}
