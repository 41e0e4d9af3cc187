use stockmatch_core::normalize::{normalize, normalize_title};

/// Print the signature `words` normalize to.
///
/// With `as_title`, the words are joined and re-split on whitespace, which
/// drops empty words; otherwise each argument is one tag.
pub fn show_signature(words: &[String], as_title: bool) {
    println!("{}", signature_for(words, as_title));
}

fn signature_for(words: &[String], as_title: bool) -> String {
    if as_title {
        normalize_title(&words.join(" "))
    } else {
        normalize(words)
    }
}
