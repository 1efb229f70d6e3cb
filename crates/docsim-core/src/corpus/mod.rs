//! Corpus snapshot and inverse document frequency
//!
//! A `Corpus` is an immutable snapshot of the document collection captured
//! at the start of a run. The IDF table is computed once from exactly the
//! documents present in the snapshot; adding or removing documents requires
//! a fresh pass.

pub mod loader;

use std::collections::HashMap;

use crate::tokenizer::TokenProfile;

/// A document in the corpus: stable 1-based index, external identifier,
/// and its token-count profile.
#[derive(Debug, Clone)]
pub struct Document {
    /// Index in assignment order, 1-based
    pub index: usize,
    /// External identifier (file name)
    pub id: String,
    /// Raw token counts, untouched by weighting
    pub profile: TokenProfile,
}

/// Immutable snapshot of a document collection
#[derive(Debug, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document; indices are assigned in insertion order, 1-based
    pub fn add_document(&mut self, id: impl Into<String>, profile: TokenProfile) {
        self.documents.push(Document {
            index: self.documents.len() + 1,
            id: id.into(),
            profile,
        });
    }

    /// Number of documents in the corpus
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The documents in index order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Compute the IDF table for this snapshot.
    ///
    /// Document frequency is accumulated in a single pass over the corpus:
    /// each document increments the counter of every distinct token it
    /// contains, so the cost is linear in the number of profile entries
    /// rather than tokens times documents. IDF is `ln(n / df)`; every
    /// enumerated token occurs in at least one document, so `df >= 1`.
    pub fn compute_idf(&self) -> IdfTable {
        let n = self.documents.len() as f64;

        let mut doc_frequencies: HashMap<String, u32> = HashMap::new();
        for doc in &self.documents {
            for (token, _) in doc.profile.tokens() {
                *doc_frequencies.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        let idf = doc_frequencies
            .into_iter()
            .map(|(token, df)| (token, (n / f64::from(df)).ln()))
            .collect();

        IdfTable { idf }
    }
}

/// Inverse document frequency per token, shared read-only across all
/// documents once computed
#[derive(Debug, Clone, Default)]
pub struct IdfTable {
    idf: HashMap<String, f64>,
}

impl IdfTable {
    /// IDF of a token; tokens outside the corpus vocabulary weigh 0
    pub fn get(&self, token: &str) -> f64 {
        self.idf.get(token).copied().unwrap_or(0.0)
    }

    /// Size of the corpus vocabulary
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    /// Whether the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }
}
