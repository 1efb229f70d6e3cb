//! JSON output formatting for the rank command

use docsim_core::error::Result;
use docsim_core::similarity::SimilarPair;

/// Output in JSON format
pub fn output_json(pairs: &[SimilarPair]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(pairs)?);
    Ok(())
}
