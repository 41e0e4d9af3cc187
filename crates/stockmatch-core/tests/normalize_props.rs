//! Property tests for signature normalization.

use proptest::prelude::*;
use stockmatch_core::normalize::{normalize, normalize_title, STOP_WORDS};

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,10}"
}

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 0..8)
}

proptest! {
    #[test]
    fn order_does_not_matter(
        (original, permuted) in words().prop_flat_map(|tags| (Just(tags.clone()), Just(tags).prop_shuffle()))
    ) {
        prop_assert_eq!(normalize(&original), normalize(&permuted));
    }

    #[test]
    fn case_does_not_matter(tags in words()) {
        let upper: Vec<String> = tags.iter().map(|t| t.to_uppercase()).collect();
        let lower: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();
        prop_assert_eq!(normalize(&upper), normalize(&lower));
        prop_assert_eq!(normalize(&tags), normalize(&lower));
    }

    #[test]
    fn duplicates_do_not_matter(tags in words()) {
        let doubled: Vec<String> = tags.iter().chain(tags.iter()).cloned().collect();
        prop_assert_eq!(normalize(&doubled), normalize(&tags));
    }

    #[test]
    fn stop_words_do_not_matter(tags in words(), stop in prop::sample::select(STOP_WORDS)) {
        let mut padded = tags.clone();
        padded.insert(0, stop.to_uppercase());
        padded.push(stop.to_string());
        prop_assert_eq!(normalize(&padded), normalize(&tags));
    }

    #[test]
    fn signature_tokens_are_sorted(tags in words()) {
        let signature = normalize(&tags);
        let tokens: Vec<&str> = signature.split(' ').collect();
        let mut sorted = tokens.clone();
        sorted.sort_unstable();
        prop_assert_eq!(tokens, sorted);
    }

    #[test]
    fn title_matches_word_list(tags in prop::collection::vec(word(), 1..8)) {
        prop_assert_eq!(normalize_title(&tags.join("  ")), normalize(&tags));
    }
}
