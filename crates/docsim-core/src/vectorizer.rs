//! TF-IDF weighting and L2 normalization of token profiles

use std::collections::HashMap;

use crate::corpus::IdfTable;
use crate::tokenizer::TokenProfile;

/// Sparse TF-IDF document vector; absent tokens have weight zero.
///
/// A finalized non-empty vector has unit Euclidean norm, so cosine
/// similarity between two vectors reduces to their dot product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentVector {
    weights: HashMap<String, f64>,
}

impl DocumentVector {
    /// Weight of a token, 0.0 if absent
    pub fn weight(&self, token: &str) -> f64 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    /// Number of tokens with non-zero representation
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the vector carries no weight at all
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate over (token, weight) entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(token, &w)| (token.as_str(), w))
    }

    /// Euclidean norm of the vector
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }
}

/// Convert a token-count profile into a TF-IDF weighted unit vector.
///
/// Term frequency is the token count divided by the document's total token
/// count; the weight is tf times the token's IDF. The resulting vector is
/// divided by its Euclidean norm. The input profile is left untouched.
///
/// Two degenerate cases yield the empty vector instead of dividing by
/// zero: a profile with no tokens, and a profile whose weights are all
/// zero because every one of its tokens occurs in every document.
pub fn normalize(profile: &TokenProfile, idf: &IdfTable) -> DocumentVector {
    let total_tokens = profile.total_tokens();
    if total_tokens == 0 {
        return DocumentVector::default();
    }
    let total_tokens = total_tokens as f64;

    let mut weights = HashMap::with_capacity(profile.distinct_tokens());
    let mut squared_sum = 0.0;
    for (token, count) in profile.tokens() {
        let tf = f64::from(count) / total_tokens;
        let weight = tf * idf.get(token);
        squared_sum += weight * weight;
        weights.insert(token.to_string(), weight);
    }

    let norm = squared_sum.sqrt();
    if norm == 0.0 {
        return DocumentVector::default();
    }
    for weight in weights.values_mut() {
        *weight /= norm;
    }

    DocumentVector { weights }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::tokenizer::tokenize;

    fn corpus_of(texts: &[&str]) -> Corpus {
        let mut corpus = Corpus::new();
        for (i, text) in texts.iter().enumerate() {
            corpus.add_document(format!("doc{}", i + 1), tokenize(text));
        }
        corpus
    }

    #[test]
    fn test_normalized_vector_has_unit_norm() {
        let corpus = corpus_of(&[
            "<TEXT>apple banana cherry</TEXT>",
            "<TEXT>apple date</TEXT>",
            "<TEXT>elderberry</TEXT>",
        ]);
        let idf = corpus.compute_idf();

        for doc in corpus.documents() {
            let vector = normalize(&doc.profile, &idf);
            assert!(
                (vector.norm() - 1.0).abs() < 1e-9,
                "norm of {} was {}",
                doc.id,
                vector.norm()
            );
        }
    }

    #[test]
    fn test_empty_profile_yields_empty_vector() {
        let corpus = corpus_of(&["<TEXT></TEXT>", "<TEXT>word</TEXT>", "<TEXT>other</TEXT>"]);
        let idf = corpus.compute_idf();
        let vector = normalize(&corpus.documents()[0].profile, &idf);
        assert!(vector.is_empty());
        assert_eq!(vector.norm(), 0.0);
    }

    #[test]
    fn test_all_zero_weights_yield_empty_vector() {
        // Every token occurs in every document, so every IDF is ln(1) = 0
        let corpus = corpus_of(&["<TEXT>cat dog</TEXT>", "<TEXT>cat cat dog</TEXT>"]);
        let idf = corpus.compute_idf();

        for doc in corpus.documents() {
            let vector = normalize(&doc.profile, &idf);
            assert!(vector.is_empty(), "{} should be all-zero", doc.id);
        }
    }

    #[test]
    fn test_weights_follow_tf_times_idf() {
        let corpus = corpus_of(&["<TEXT>rare shared shared</TEXT>", "<TEXT>shared</TEXT>"]);
        let idf = corpus.compute_idf();
        let vector = normalize(&corpus.documents()[0].profile, &idf);

        // "shared" has IDF 0, so all weight concentrates on "rare"
        assert!((vector.weight("rare") - 1.0).abs() < 1e-9);
        assert_eq!(vector.weight("shared"), 0.0);
    }

    #[test]
    fn test_known_two_token_vector() {
        let corpus = corpus_of(&[
            "<TEXT>apple apple banana</TEXT>",
            "<TEXT>banana cherry</TEXT>",
            "<TEXT>cherry date</TEXT>",
        ]);
        let idf = corpus.compute_idf();
        let vector = normalize(&corpus.documents()[0].profile, &idf);

        let w_apple = 2.0 / 3.0 * 3.0f64.ln();
        let w_banana = 1.0 / 3.0 * 1.5f64.ln();
        let norm = (w_apple * w_apple + w_banana * w_banana).sqrt();
        assert!((vector.weight("apple") - w_apple / norm).abs() < 1e-9);
        assert!((vector.weight("banana") - w_banana / norm).abs() < 1e-9);
    }
}
