use std::collections::HashSet;

use crate::core::{LinguisticFeatures, ReadingLevel};

/// Compute the linguistic feature vector for one input.
///
/// `tokens` drive diversity and uniqueness; `words` (punctuation
/// stripped) drive average word length so that punctuation does not
/// inflate it. All divisions are guarded, so every field is finite even
/// for empty input.
pub fn analyze(text: &str, tokens: &[String], words: &[String]) -> LinguisticFeatures {
    let average_word_length = average_word_length(words);

    LinguisticFeatures {
        average_word_length,
        reading_level: classify_reading_level(average_word_length),
        word_diversity: word_diversity(tokens),
        punctuation_density: punctuation_density(text),
        unique_word_count: unique_word_count(tokens),
    }
}

pub fn average_word_length(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }

    let total: usize = words.iter().map(|w| w.chars().count()).sum();
    total as f64 / words.len() as f64
}

/// Coarse three-tier complexity proxy. Strict comparisons: an average
/// of exactly 5.0 is Intermediate, not Advanced.
pub fn classify_reading_level(average_word_length: f64) -> ReadingLevel {
    if average_word_length > 5.0 {
        ReadingLevel::Advanced
    } else if average_word_length > 4.0 {
        ReadingLevel::Intermediate
    } else {
        ReadingLevel::Basic
    }
}

/// Ratio of total tokens to unique tokens. Higher means more repetition.
pub fn word_diversity(tokens: &[String]) -> f64 {
    tokens.len() as f64 / unique_word_count(tokens).max(1) as f64
}

/// Sentence punctuation marks per character of input.
pub fn punctuation_density(text: &str) -> f64 {
    let punctuation = text
        .chars()
        .filter(|c| matches!(c, '.' | ',' | '!' | '?'))
        .count();
    punctuation as f64 / text.chars().count().max(1) as f64
}

pub fn unique_word_count(tokens: &[String]) -> usize {
    tokens.iter().collect::<HashSet<_>>().len()
}
