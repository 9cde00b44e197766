//! Command-line interface definition
//!
//! This module provides:
//! - Argument parsing with clap
//! - Selection of catalog entries to resolve
//! - Output mode flags

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Resolve dependency, BOM and repository coordinates against a platform version
#[derive(Parser, Debug)]
#[command(name = "vercat", version, about)]
pub struct CliArgs {
    /// Path to the metadata catalog (TOML)
    pub catalog: PathBuf,

    /// Platform version to resolve against (defaults to the catalog's default)
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Dependency id to resolve (repeatable)
    #[arg(short, long = "dependency", action = ArgAction::Append)]
    pub dependencies: Vec<String>,

    /// BOM id to resolve (repeatable)
    #[arg(short, long = "bom", action = ArgAction::Append)]
    pub boms: Vec<String>,

    /// Repository id to resolve (repeatable)
    #[arg(short, long = "repository", action = ArgAction::Append)]
    pub repositories: Vec<String>,

    /// Include the per-entity dependency ranges report
    #[arg(long)]
    pub report: bool,

    /// Output results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Show additional detail, including catalog lint warnings
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress headers, printing only resolved items
    #[arg(short, long)]
    pub quiet: bool,
}
