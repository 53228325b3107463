//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// emrank - rank the highest emitting industries
///
/// Loads an emissions CSV (columns: industry, year, emissions_mtco2e),
/// totals emissions per industry for the most recent year and prints the
/// top-ranked industries. Tied totals share a rank.
///
/// Examples:
///   emrank --input emissions.csv
///   emrank --input emissions.csv --top 10 --format markdown -o report.md
///   emrank --input emissions.csv --year 2022 --format json
///   emrank --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Emissions CSV file to load
    ///
    /// Defaults to the config file value, then to emissions.csv.
    #[arg(short, long, value_name = "FILE", env = "EMRANK_INPUT")]
    pub input: Option<PathBuf>,

    /// Rank cutoff for the top list
    ///
    /// Every industry ranked at or above the cutoff is listed, so ties at
    /// the boundary can list more than N industries. Default: 5.
    #[arg(short = 'n', long, value_name = "N")]
    pub top: Option<usize>,

    /// Report on this year instead of the most recent one
    #[arg(long, value_name = "YEAR")]
    pub year: Option<i32>,

    /// Output format (text, markdown, json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .emrank.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .emrank.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text tables (default)
    #[default]
    Text,
    /// Markdown format
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.init_config {
            return Ok(());
        }

        if self.top == Some(0) {
            return Err("Top N must be at least 1".to_string());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(ref input) = self.input {
            if input.is_dir() {
                return Err(format!("Input path is a directory: {}", input.display()));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
