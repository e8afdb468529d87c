//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::diagnostics::Diagnostics;
use crate::report::{generate_builtin, Report};
use crate::rules::builtin;
use crate::samples::compute_bounded;
use crate::serialization::{JsonWriter, PlainTextWriter, ReportWriter, XmlWriter};

use super::args::{Commands, OutputFormat, TypeSelection};
use super::paths::PersistentConfig;

/// Execute a CLI command.
///
/// Returns the number of failure diagnostics the command recorded.
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<usize> {
    match command {
        Commands::Generate {
            plural_type,
            filter,
            format,
            output,
        } => cmd_generate(config_path, plural_type, filter, format, output),
        Commands::Locales { plural_type } => cmd_locales(config_path, plural_type),
        Commands::CheckRule { rule } => {
            cmd_check_rule(&rule);
            Ok(0)
        }
        Commands::Settings {
            set_type,
            set_filter,
            clear_filter,
            set_format,
            reset,
        } => {
            cmd_settings(config_path, set_type, set_filter, clear_filter, set_format, reset)?;
            Ok(0)
        }
    }
}

/// Generate command
fn cmd_generate(
    config_path: Option<&Path>,
    plural_type: Option<TypeSelection>,
    filter: Option<String>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
) -> Result<usize> {
    let config = PersistentConfig::load_from(config_path)?.merge_with_cli(plural_type, filter, format);
    let filter = config.filter.as_deref();

    let mut diagnostics = Diagnostics::new();
    let mut reports = Vec::new();
    for &plural_type in config.plural_type_or_default().plural_types() {
        let report = generate_builtin(plural_type, filter, &mut diagnostics)
            .with_context(|| format!("Failed to generate {} samples", plural_type))?;
        if report.classes.is_empty() {
            eprintln!(
                "  {}: no bundled {} locales match /{}/",
                "Warning".yellow().bold(),
                plural_type,
                filter.unwrap_or_default()
            );
        }
        reports.push(report);
    }

    let format = config.format_or_default();
    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_reports(&reports, format, BufWriter::new(file))
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            eprintln!(
                "{} {} report to {}",
                "Wrote".green().bold(),
                format,
                path.display().to_string().cyan()
            );
        }
        None => write_reports(&reports, format, io::stdout().lock())?,
    }

    print_diagnostics(&diagnostics);
    Ok(diagnostics.failure_count())
}

/// Write reports in the chosen format
pub fn write_reports<W: Write>(reports: &[Report], format: OutputFormat, writer: W) -> Result<()> {
    match format {
        OutputFormat::Text => PlainTextWriter::write(reports, writer)?,
        OutputFormat::Json => JsonWriter::write(reports, writer)?,
        OutputFormat::Xml => XmlWriter::write(reports, writer)?,
    }
    Ok(())
}

/// Print diagnostics to stderr
fn print_diagnostics(diagnostics: &Diagnostics) {
    if diagnostics.is_empty() {
        return;
    }

    eprintln!();
    eprintln!("{}", "Diagnostics:".bold().underline());
    for message in diagnostics.messages() {
        if message.starts_with("***Failure") || message.starts_with("Duplicate rules") {
            eprintln!("  {}", message.red());
        } else {
            eprintln!("  {}", message.dimmed());
        }
    }

    let failures = diagnostics.failure_count();
    if failures > 0 {
        eprintln!();
        eprintln!("{}: {}", "Failures".red().bold(), failures);
    }
}

/// Locales command
fn cmd_locales(config_path: Option<&Path>, plural_type: Option<TypeSelection>) -> Result<usize> {
    let config = PersistentConfig::load_from(config_path)?.merge_with_cli(plural_type, None, None);

    for &plural_type in config.plural_type_or_default().plural_types() {
        let locales: Vec<&str> = builtin::locales(plural_type).collect();
        println!("{}", plural_type.to_string().bold());
        println!("  {}", locales.join(" "));
    }
    Ok(0)
}

/// Check-rule command
fn cmd_check_rule(rule: &str) {
    let describe = |bounded: bool| {
        if bounded {
            "bounded".green()
        } else {
            "unbounded".yellow()
        }
    };

    println!("{}", "Rule:".bold());
    println!("  {}", rule.cyan());
    println!();
    println!("  Integers: {}", describe(compute_bounded(Some(rule), true)));
    println!("  Decimals: {}", describe(compute_bounded(Some(rule), false)));
}

/// Settings command
fn cmd_settings(
    config_path: Option<&Path>,
    set_type: Option<TypeSelection>,
    set_filter: Option<String>,
    clear_filter: bool,
    set_format: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = PersistentConfig::default();
        let path = config.save_to(config_path)?;
        println!("{}", "Configuration reset to defaults".green().bold());
        println!();
        print_config(&config, &path);
        return Ok(());
    }

    let mut config = PersistentConfig::load_from(config_path)?;
    let mut changed = false;

    if let Some(plural_type) = set_type {
        config.plural_type = Some(plural_type);
        println!("  Set default type: {}", plural_type.to_string().green());
        changed = true;
    }

    if let Some(filter) = set_filter {
        println!("  Set default filter: {}", filter.cyan());
        config.filter = Some(filter);
        changed = true;
    }

    if clear_filter {
        config.filter = None;
        println!("  Cleared default filter");
        changed = true;
    }

    if let Some(format) = set_format {
        config.format = Some(format);
        println!("  Set default format: {}", format.to_string().green());
        changed = true;
    }

    let path = if changed {
        let path = config.save_to(config_path)?;
        println!();
        println!("{}", "Configuration saved".green().bold());
        path
    } else {
        super::paths::config_file_path_with_override(config_path)?
    };

    println!();
    print_config(&config, &path);
    Ok(())
}

/// Print current configuration
fn print_config(config: &PersistentConfig, path: &Path) {
    println!("{}", "Current Configuration:".bold().underline());
    println!();
    println!(
        "  Type:    {}",
        config.plural_type_or_default().to_string().yellow()
    );
    println!(
        "  Filter:  {}",
        config.filter.as_deref().unwrap_or("none").yellow()
    );
    println!("  Format:  {}", config.format_or_default().to_string().yellow());
    println!();
    println!("  Config file: {}", path.display().to_string().cyan());
}
