//! CLI argument parsing for docsim
//!
//! Uses clap for argument parsing.
//! Flags: --top, --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::Parser;

use docsim_core::error::DocsimError;
use docsim_core::similarity::DEFAULT_TOP_K;
pub use docsim_core::format::OutputFormat;

/// Docsim - ranks the most similar document pairs in a directory
#[derive(Parser, Debug)]
#[command(name = "docsim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the document collection
    pub dir: PathBuf,

    /// Number of top-scoring pairs to report
    #[arg(long, short = 'k', default_value_t = DEFAULT_TOP_K)]
    pub top: usize,

    /// Output format
    #[arg(long, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: DocsimError| e.to_string())
}
