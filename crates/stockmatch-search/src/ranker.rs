//! Approximate ranking of a query signature against candidate signatures.
//!
//! A candidate matches when every character of the folded query appears, in
//! order, somewhere in the folded candidate. Matches are scored by Levenshtein
//! distance between the two folded strings, so a short query that is
//! scattered across a long signature ranks below one that covers most of a
//! short signature.
//!
//! The ranker knows nothing about catalogs: it takes any list of strings and
//! reports positions into that list.
//!
//! # Example
//!
//! ```
//! use stockmatch_search::ranker::rank;
//!
//! let signatures = ["birthdai cake", "desk offic", "birthdai"];
//! let matches = rank("birthdai", &signatures);
//!
//! let order: Vec<usize> = matches.iter().map(|m| m.index).collect();
//! assert_eq!(order, vec![2, 0]);
//! assert_eq!(matches[0].distance, 0);
//! ```

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A candidate that passed the match gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Position of the candidate in the list handed to the ranker.
    pub index: usize,
    /// Edit distance between the folded query and the folded candidate.
    pub distance: usize,
}

/// Optional limits applied on top of the match gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankOptions {
    /// Drop matches whose distance exceeds this value.
    pub max_distance: Option<usize>,
    /// Keep at most this many matches.
    pub limit: Option<usize>,
}

/// Rank `signatures` against `query` with no extra limits.
pub fn rank<S: AsRef<str>>(query: &str, signatures: &[S]) -> Vec<Match> {
    rank_with(query, signatures, RankOptions::default())
}

/// Rank `signatures` against `query`.
///
/// Results are ordered by ascending distance; equal distances keep their
/// original order.
pub fn rank_with<S: AsRef<str>>(query: &str, signatures: &[S], options: RankOptions) -> Vec<Match> {
    let query = fold(query);

    let mut matches: Vec<Match> = signatures
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| {
            let candidate = fold(candidate.as_ref());
            if !is_subsequence(&query, &candidate) {
                return None;
            }
            let distance = strsim::levenshtein(&query, &candidate);
            Some(Match { index, distance })
        })
        .filter(|m| options.max_distance.map_or(true, |max| m.distance <= max))
        .collect();

    matches.sort_by(|a, b| a.distance.cmp(&b.distance).then(a.index.cmp(&b.index)));

    if let Some(limit) = options.limit {
        matches.truncate(limit);
    }
    matches
}

/// Fold a string for comparison: strip diacritics and lowercase.
///
/// "Café" and "cafe" fold to the same string.
pub fn fold(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect::<String>()
        .to_lowercase()
}

/// Do the chars of `needle` appear in `haystack` in the same order?
///
/// The empty needle is a subsequence of everything.
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut remaining = haystack.chars();
    needle
        .chars()
        .all(|wanted| remaining.by_ref().any(|c| c == wanted))
}
