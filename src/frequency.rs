use std::collections::{HashMap, HashSet};

use crate::core::FrequencyEntry;

/// Common function words excluded from frequency ranking.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;
pub const DEFAULT_TOP_WORDS: usize = 10;

pub fn default_stop_words() -> HashSet<String> {
    DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect()
}

/// Rank surviving tokens by occurrence count.
///
/// Tokens shorter than `min_length` characters or present in
/// `stop_words` are dropped before counting. Entries come back sorted
/// by count descending; ties keep the order in which each word first
/// appeared, which requires a stable sort over insertion order. The
/// result is truncated to `top_n` entries, and empty input yields an
/// empty vector.
pub fn rank(
    tokens: &[String],
    stop_words: &HashSet<String>,
    min_length: usize,
    top_n: usize,
) -> Vec<FrequencyEntry> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<FrequencyEntry> = Vec::new();

    for token in tokens {
        if token.chars().count() < min_length || stop_words.contains(token.as_str()) {
            continue;
        }
        match index.get(token.as_str()) {
            Some(&at) => entries[at].count += 1,
            None => {
                index.insert(token.as_str(), entries.len());
                entries.push(FrequencyEntry::new(token.clone(), 1));
            }
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(top_n);
    entries
}
