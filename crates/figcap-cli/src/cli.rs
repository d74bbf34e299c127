use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Inspect the layout of rendered PDF pages for figure extraction.
#[derive(Debug, Parser)]
#[command(name = "figcap", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract text-region layout from one rendered HTML page
    Layout {
        /// Path to the rendered HTML page
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List a document's rendered page artifacts in natural order
    Pages {
        /// Folder containing rendered page artifacts
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for subcommand results.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated rows
    Text,
    /// JSON
    Json,
}
