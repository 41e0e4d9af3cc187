//! Token normalization: raw words to canonical, order-independent signatures.
//!
//! A signature is the space-joined, sorted list of Porter stems of the
//! distinct, lowercased, non-stop-word input words. Two word sequences that
//! differ only in case, order, repetition or stop words share a signature.
//!
//! # Example
//!
//! ```
//! use stockmatch_core::normalize::{normalize, normalize_title};
//!
//! assert_eq!(normalize(&["Cakes", "the", "Birthday", "cakes"]), "birthdai cake");
//! assert_eq!(normalize_title("The Birthday Cakes"), "birthdai cake");
//! ```

pub mod stem;

use std::collections::HashSet;

pub use stem::stem;

/// Words dropped before stemming. Matched against the lowercased word.
pub const STOP_WORDS: &[&str] = &[
    "about", "all", "alone", "also", "am", "and", "as", "at", "is", "because", "before", "beside",
    "besides", "between", "but", "he", "him", "she", "her", "the", "by", "etc", "for", "i", "of",
    "on", "other", "others", "so", "than", "that", "though", "to", "too", "through", "until", "&",
];

/// Is `word` (already lowercased) a stop word?
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Normalize a word sequence into its sorted list of stems.
///
/// Words are lowercased before anything else, and the stemmer only ever sees
/// lowercased input. Empty words are neither stop words nor filtered: they
/// stem to themselves and appear as empty tokens.
pub fn normalize_tokens<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut tokens: Vec<String> = Vec::new();

    for word in words {
        let lowered = word.as_ref().to_lowercase();
        if is_stop_word(&lowered) {
            continue;
        }
        if !seen.contains(&lowered) {
            tokens.push(stem(&lowered));
            seen.insert(lowered);
        }
    }

    tokens.sort();
    tokens
}

/// Normalize a word sequence into a signature string.
pub fn normalize<S: AsRef<str>>(words: &[S]) -> String {
    normalize_tokens(words).join(" ")
}

/// Split free text on whitespace and normalize the resulting words.
pub fn normalize_title(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    normalize(&words)
}
