//! Human-readable output formatting for the rank command

use docsim_core::similarity::SimilarPair;

use crate::cli::Cli;

/// Output in human-readable format
pub fn output_human(cli: &Cli, pairs: &[SimilarPair], available: usize) {
    if pairs.is_empty() {
        if !cli.quiet {
            println!("No document pairs to compare in {}", cli.dir.display());
        }
        return;
    }

    println!("Top {} similar document pairs (of {}):", pairs.len(), available);
    for pair in pairs {
        // Scores are presented as percentages; raw [0,1] values are
        // available through the json and records formats
        println!("{}  {}  {:.2}%", pair.doc_a, pair.doc_b, pair.score * 100.0);
    }

    if pairs.len() < cli.top && !cli.quiet {
        eprintln!(
            "note: only {} pairs available (requested {})",
            pairs.len(),
            cli.top
        );
    }
}
