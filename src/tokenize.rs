use once_cell::sync::Lazy;
use regex::Regex;

// Pre-compiled patterns using once_cell
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());
static PUNCTUATION_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Extract lowercased word tokens in order of appearance.
///
/// A token is a contiguous run of word characters; everything else is a
/// separator. Empty or all-punctuation input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split on whitespace after stripping punctuation.
///
/// Feeds average word length, where trailing punctuation must not count
/// toward a word's length.
pub fn split_words(text: &str) -> Vec<String> {
    let stripped = PUNCTUATION_PATTERN.replace_all(text, "");
    stripped
        .split_whitespace()
        .map(|w| w.to_string())
        .collect()
}
