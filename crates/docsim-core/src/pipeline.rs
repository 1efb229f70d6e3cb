//! End-to-end ranking pipeline over an in-memory corpus snapshot
//!
//! Each stage produces an explicit value consumed by the next: profiles,
//! then the IDF table, then normalized vectors, then the ranked pairs. The
//! IDF table is finished before any vector is normalized.

use std::time::Instant;

use tracing::debug;

use crate::corpus::loader::RawDocument;
use crate::corpus::Corpus;
use crate::similarity::{self, SimilarPair};
use crate::tokenizer;
use crate::vectorizer::{self, DocumentVector};

/// Run the full ranking pipeline: tokenize every document, compute the
/// IDF table, build normalized vectors, and return the top `k` pairs.
///
/// A pure function of its input snapshot; running it twice over the same
/// documents yields identical output.
pub fn rank(documents: &[RawDocument], k: usize) -> Vec<SimilarPair> {
    let start = Instant::now();
    let mut corpus = Corpus::new();
    for doc in documents {
        corpus.add_document(doc.id.as_str(), tokenizer::tokenize(&doc.text));
    }
    debug!(documents = corpus.len(), elapsed = ?start.elapsed(), "tokenize");

    let start = Instant::now();
    let idf = corpus.compute_idf();
    debug!(vocabulary = idf.len(), elapsed = ?start.elapsed(), "compute_idf");

    let start = Instant::now();
    let vectors: Vec<(String, DocumentVector)> = corpus
        .documents()
        .iter()
        .map(|doc| (doc.id.clone(), vectorizer::normalize(&doc.profile, &idf)))
        .collect();
    debug!(elapsed = ?start.elapsed(), "normalize");

    let start = Instant::now();
    let pairs = similarity::top_k_pairs(&vectors, k);
    debug!(pairs = pairs.len(), elapsed = ?start.elapsed(), "rank");

    pairs
}
