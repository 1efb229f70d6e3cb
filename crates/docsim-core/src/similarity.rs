//! Pairwise cosine similarity and top-K ranking

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use serde::Serialize;
use tracing::debug;

use crate::vectorizer::DocumentVector;

/// Number of top pairs reported when the caller does not ask for a count
pub const DEFAULT_TOP_K: usize = 50;

/// Similarity score for one unordered document pair.
///
/// `doc_a` is the lexicographically smaller identifier; scores lie in
/// [0, 1] since the weights are non-negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarPair {
    pub doc_a: String,
    pub doc_b: String,
    pub score: f64,
}

/// Number of unordered pairs in a corpus of `doc_count` documents
pub fn total_pairs(doc_count: usize) -> usize {
    doc_count * doc_count.saturating_sub(1) / 2
}

/// Cosine similarity of two unit vectors: the dot product over tokens
/// present in both. Iterates the smaller vector and probes the other.
pub fn cosine_similarity(a: &DocumentVector, b: &DocumentVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .map(|(token, weight)| weight * large.weight(token))
        .sum()
}

/// Heap entry ordered by rank: higher score first, equal scores broken by
/// ascending identifier pair.
#[derive(Debug, PartialEq)]
struct RankedPair(SimilarPair);

impl Eq for RankedPair {}

impl Ord for RankedPair {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.score.total_cmp(&other.0.score).then_with(|| {
            (other.0.doc_a.as_str(), other.0.doc_b.as_str())
                .cmp(&(self.0.doc_a.as_str(), self.0.doc_b.as_str()))
        })
    }
}

impl PartialOrd for RankedPair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Rank every unordered document pair by cosine similarity and return the
/// `k` best, descending by score.
///
/// The pair loop covers indices i < j over the live length of `documents`.
/// Equal scores order lexicographically ascending by identifier pair, so
/// the ranking is reproducible across runs. `k` is clamped to the number
/// of available pairs; the returned length is `min(k, total pairs)`.
pub fn top_k_pairs(documents: &[(String, DocumentVector)], k: usize) -> Vec<SimilarPair> {
    let available = total_pairs(documents.len());
    if k > available {
        debug!(requested = k, available, "top_k_clamped");
    }
    let k = k.min(available);

    // Bounded min-heap of the best k pairs seen so far; Reverse keeps the
    // weakest ranked entry on top for eviction.
    let mut heap: BinaryHeap<Reverse<RankedPair>> = BinaryHeap::with_capacity(k + 1);
    for (i, (id_a, vector_a)) in documents.iter().enumerate() {
        for (id_b, vector_b) in &documents[i + 1..] {
            let score = cosine_similarity(vector_a, vector_b);
            let (doc_a, doc_b) = if id_a <= id_b {
                (id_a.clone(), id_b.clone())
            } else {
                (id_b.clone(), id_a.clone())
            };
            heap.push(Reverse(RankedPair(SimilarPair { doc_a, doc_b, score })));
            if heap.len() > k {
                heap.pop();
            }
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse(RankedPair(pair))| pair)
        .collect()
}
