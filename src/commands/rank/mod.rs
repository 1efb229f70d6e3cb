//! `docsim <dir>` - rank the most similar document pairs
//!
//! Loads every document directly under the directory, builds TF-IDF
//! vectors, computes cosine similarity for all pairs, and reports the
//! top K in the selected output format.

pub mod format;

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use docsim_core::corpus::loader;
use docsim_core::error::Result;
use docsim_core::pipeline;
use docsim_core::similarity;

use self::format::{output_human, output_json, output_records};

/// Execute the rank command
pub fn execute(cli: &Cli) -> Result<()> {
    let start = Instant::now();

    let documents = loader::load_documents(&cli.dir)?;
    if cli.verbose {
        debug!(documents = documents.len(), elapsed = ?start.elapsed(), "load_corpus");
    }

    let available = similarity::total_pairs(documents.len());
    let pairs = pipeline::rank(&documents, cli.top);

    match cli.format {
        OutputFormat::Human => output_human(cli, &pairs, available),
        OutputFormat::Json => output_json(&pairs)?,
        OutputFormat::Records => output_records(cli, &pairs),
    }

    Ok(())
}
