//! Records output formatting for the rank command

use docsim_core::similarity::SimilarPair;

use crate::cli::Cli;

/// Output in records format
pub fn output_records(cli: &Cli, pairs: &[SimilarPair]) {
    println!(
        "H docsim=1 records=1 dir={} mode=rank requested={} pairs={}",
        cli.dir.display(),
        cli.top,
        pairs.len()
    );

    for pair in pairs {
        println!("P {} {} score={}", pair.doc_a, pair.doc_b, pair.score);
    }
}
