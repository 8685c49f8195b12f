//! Command-line argument definitions

use clap::{Parser, ValueEnum};

/// Adjust a closed survey traverse with the Bowditch (compass) rule
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON file holding an array of legs: [{"length": .., "bearing": ..}, ...]
    #[arg(help = "Path to the legs JSON file")]
    pub input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// One line per leg in text output
    #[arg(long)]
    pub compact: bool,

    /// Path to engine configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Closure summary and adjusted leg table
    Text,
    /// Full numeric report as JSON
    Json,
    /// Adjusted leg table as CSV
    Csv,
}
