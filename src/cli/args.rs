//! Command line argument parsing for the docsim CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Docsim - pairwise TF-IDF document similarity
#[derive(Parser, Debug, Clone)]
#[command(name = "docsim")]
#[command(about = "Compute pairwise TF-IDF cosine similarity between text documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DocsimArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DocsimArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compare documents pairwise and report similarity scores
    Compare(CompareArgs),

    /// Show corpus statistics (document count, vocabulary size, lengths)
    Stats(CompareArgs),
}

/// Arguments for supplying the document collection.
///
/// Documents come from files (one document per file), `--text` literals,
/// or stdin (one document per line) when neither is given.
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// Document files, one document per file
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Literal document text (repeatable)
    #[arg(short, long = "text", value_name = "TEXT")]
    pub text: Vec<String>,
}

impl CompareArgs {
    /// Check whether any input source was given on the command line.
    pub fn has_inline_input(&self) -> bool {
        !self.files.is_empty() || !self.text.is_empty()
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
