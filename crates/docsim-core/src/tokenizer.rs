//! Tag-aware tokenization of document text
//!
//! Tokens are extracted only from the content regions opened by `<TITLE>`
//! and `<TEXT>` tags and closed by any other tag. Tokens are lower-case
//! runs of alphanumeric or underscore characters; no stemming or stop-word
//! filtering is applied.

use std::collections::HashMap;

/// Token-count profile of a single document.
///
/// Maps each token to its occurrence count and records the total number of
/// tokens counted. The sum of per-token counts always equals the total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenProfile {
    counts: HashMap<String, u32>,
    total_tokens: u64,
}

impl TokenProfile {
    /// Count the pending token and reset the buffer. Empty buffers are a
    /// no-op so callers can flush unconditionally.
    fn flush(&mut self, word: &mut String) {
        if word.is_empty() {
            return;
        }
        *self.counts.entry(std::mem::take(word)).or_insert(0) += 1;
        self.total_tokens += 1;
    }

    /// Occurrence count of a token, 0 if absent
    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Total number of tokens counted for the document
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Number of distinct tokens
    pub fn distinct_tokens(&self) -> usize {
        self.counts.len()
    }

    /// Whether the profile contains the token
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Whether the document produced no tokens at all
    pub fn is_empty(&self) -> bool {
        self.total_tokens == 0
    }

    /// Iterate over (token, count) entries
    pub fn tokens(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }
}

/// Tokenize document text into a token-count profile.
///
/// The scanner lower-cases the input and walks it character by character.
/// The buffer between `<` and `>` is the tag name: a `title` or `text` tag
/// opens a content region, any other tag closes it. Inside a content
/// region, runs of alphanumeric/underscore characters accumulate into a
/// token and any other character ends it. A token still being built when
/// `<` arrives is flushed before the tag is read; a token still pending at
/// end of input is not flushed.
pub fn tokenize(text: &str) -> TokenProfile {
    let mut profile = TokenProfile::default();
    let mut word = String::new();
    let mut in_tag = false;
    let mut in_content = false;

    for ch in text.to_lowercase().chars() {
        if ch == '<' {
            profile.flush(&mut word);
            in_tag = true;
        } else if ch == '>' {
            in_tag = false;
            in_content = word == "title" || word == "text";
            word.clear();
        } else if in_tag {
            word.push(ch);
        } else if in_content {
            if ch.is_alphanumeric() || ch == '_' {
                word.push(ch);
            } else {
                profile.flush(&mut word);
            }
        }
    }

    profile
}
