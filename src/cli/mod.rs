//! CLI interface for plural-samples
//!
//! Provides command-line utilities for generating and inspecting samples.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands, OutputFormat, TypeSelection};
pub use paths::{config_dir, PersistentConfig};
