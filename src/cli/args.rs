//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::rules::PluralType;

#[derive(Parser)]
#[command(name = "plural-samples")]
#[command(about = "Compact sample ranges for plural rule keywords")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate samples for the bundled rule sets
    Generate {
        /// Plural type(s) to generate
        #[arg(short = 't', long = "type")]
        plural_type: Option<TypeSelection>,

        /// Only include locales matching this regex
        #[arg(long)]
        filter: Option<String>,

        /// Output format
        #[arg(short = 'f', long)]
        format: Option<OutputFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the bundled locales
    Locales {
        /// Plural type(s) to list
        #[arg(short = 't', long = "type")]
        plural_type: Option<TypeSelection>,
    },

    /// Show which sample classes a rule text is known to bound
    CheckRule {
        /// Rule text, e.g. "i is 1 and v is 0"
        rule: String,
    },

    /// Show or update user settings
    Settings {
        /// Set default plural type(s)
        #[arg(long)]
        set_type: Option<TypeSelection>,

        /// Set default locale filter (a regex)
        #[arg(long)]
        set_filter: Option<String>,

        /// Remove the default locale filter
        #[arg(long, conflicts_with = "set_filter")]
        clear_filter: bool,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Which plural types a command covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeSelection {
    /// Cardinal rules only
    Cardinal,
    /// Ordinal rules only
    Ordinal,
    /// Cardinal, then ordinal
    All,
}

impl TypeSelection {
    /// The plural types selected, in output order.
    pub fn plural_types(self) -> &'static [PluralType] {
        match self {
            Self::Cardinal => &PluralType::ALL[..1],
            Self::Ordinal => &PluralType::ALL[1..],
            Self::All => &PluralType::ALL,
        }
    }
}

impl std::fmt::Display for TypeSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cardinal => write!(f, "cardinal"),
            Self::Ordinal => write!(f, "ordinal"),
            Self::All => write!(f, "all"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated text, one keyword per line
    Text,
    /// JSON array of reports
    Json,
    /// CLDR supplemental data XML
    Xml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Xml => write!(f, "xml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_selection() {
        assert_eq!(TypeSelection::Cardinal.plural_types(), &[PluralType::Cardinal]);
        assert_eq!(TypeSelection::Ordinal.plural_types(), &[PluralType::Ordinal]);
        assert_eq!(
            TypeSelection::All.plural_types(),
            &[PluralType::Cardinal, PluralType::Ordinal]
        );
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "plural-samples",
            "-vv",
            "generate",
            "--type",
            "ordinal",
            "--filter",
            "en",
            "-f",
            "xml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Generate {
                plural_type,
                filter,
                format,
                output,
            } => {
                assert_eq!(plural_type, Some(TypeSelection::Ordinal));
                assert_eq!(filter.as_deref(), Some("en"));
                assert_eq!(format, Some(OutputFormat::Xml));
                assert!(output.is_none());
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_settings_filter_conflict() {
        let result = Cli::try_parse_from([
            "plural-samples",
            "settings",
            "--set-filter",
            "en",
            "--clear-filter",
        ]);
        assert!(result.is_err());
    }
}
