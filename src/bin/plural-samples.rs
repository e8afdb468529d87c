//! plural-samples - compact sample ranges for plural rule keywords
//!
//! Generates samples for the bundled rule sets, lists locales, checks rule
//! boundedness and manages user settings.

use clap::Parser;
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use plural_samples::cli::commands;
use plural_samples::cli::Cli;

/// Exit code for a run that completed but recorded failures.
const EXIT_FAILURES: i32 = 2;

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "plural_samples=warn",
            1 => "plural_samples=info",
            _ => "plural_samples=debug",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match commands::execute(cli.command, cli.config.as_deref()) {
        Ok(0) => {}
        Ok(failures) => {
            tracing::info!(target: "plural_samples::cli", failures, "run finished with failures");
            process::exit(EXIT_FAILURES);
        }
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            process::exit(1);
        }
    }
}
