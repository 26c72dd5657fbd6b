//! # vcop-openapi
//!
//! Generates the OpenAPI documents for the VCOP Protocol from the compiled
//! contract ABIs.
//!
//! ## Running
//!
//! ```bash
//! # After `forge build`, from the repository root
//! cargo run --bin vcop-openapi
//!
//! # Custom locations
//! cargo run --bin vcop-openapi -- --abi-dir out --output-dir docs/api
//! ```
//!
//! Exit status is `0` on success, `1` when the documents could not be
//! written and `2` for configuration errors. Contracts whose artifacts are
//! missing or malformed are skipped with a warning.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use vcop_openapi_core::{generate, GeneratorConfig, GeneratorError};

mod cli;
mod logging;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match logging::init(cli.log_format) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Failed to initialize logging: {err:#}");
            return ExitCode::from(2);
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Error generating OpenAPI spec: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config =
        GeneratorConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let report = generate(&config).context("Failed to generate OpenAPI specification")?;

    info!(
        contracts = report.contracts.len(),
        skipped = report.skipped.len(),
        paths = report.paths,
        "Done"
    );

    println!("Contracts: {}", report.contracts.len());
    println!("Paths: {}", report.paths);
    for path in &report.written {
        println!("Written to: {}", path.display());
    }

    Ok(())
}

/// Maps a failed run to the process exit status.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<GeneratorError>()
        .map_or(1, GeneratorError::exit_code)
}
