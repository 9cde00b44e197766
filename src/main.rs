//! vercat - Platform metadata resolution CLI
//!
//! Resolves catalog entries against a platform version:
//! - Dependencies (with mapping-based coordinate overrides)
//! - Bills of materials
//! - Repositories

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use vercat::catalog::load_catalog;
use vercat::cli::CliArgs;
use vercat::output::{create_formatter, Failure, OutputConfig, ResolutionOutcome, ResolvedItem};
use vercat::report::DependencyRangesReport;
use vercat::resolver::BuildItemResolver;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("vercat v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Catalog: {}", args.catalog.display());
    }

    let catalog = load_catalog(&args.catalog)?;

    let platform_text = match args.platform.as_ref().or(catalog.default_platform.as_ref()) {
        Some(platform) => platform.clone(),
        None => anyhow::bail!("no platform version given and the catalog declares no default"),
    };
    let platform = catalog.parser().parse(&platform_text)?;

    let resolver = BuildItemResolver::new(&catalog, platform);
    let mut outcome = ResolutionOutcome {
        platform: resolver.platform_version().to_string(),
        ..Default::default()
    };

    for id in &args.dependencies {
        match resolver.resolve_dependency(id) {
            Ok(Some(coordinates)) => outcome
                .dependencies
                .push(ResolvedItem::new(id, coordinates)),
            Ok(None) => outcome.failures.push(Failure {
                id: id.clone(),
                reason: "no catalog entry".to_string(),
            }),
            Err(e) => outcome.failures.push(Failure {
                id: id.clone(),
                reason: e.to_string(),
            }),
        }
    }

    for id in &args.boms {
        match resolver.resolve_bom(id) {
            Ok(Some(import)) => outcome.boms.push(ResolvedItem::new(id, import)),
            Ok(None) => outcome.failures.push(Failure {
                id: id.clone(),
                reason: "no catalog entry".to_string(),
            }),
            Err(e) => outcome.failures.push(Failure {
                id: id.clone(),
                reason: e.to_string(),
            }),
        }
    }

    for id in &args.repositories {
        match resolver.resolve_repository(id) {
            Some(repository) => outcome.repositories.push(ResolvedItem::new(id, repository)),
            None => outcome.failures.push(Failure {
                id: id.clone(),
                reason: "no catalog entry".to_string(),
            }),
        }
    }

    if args.report {
        outcome.report = Some(DependencyRangesReport::generate(&catalog));
    }

    if args.verbose {
        outcome.warnings = catalog.lint();
    }

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&outcome, &mut stdout)?;
    stdout.flush()?;

    if outcome.has_failures() {
        // Partial success - some entries could not be resolved
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
