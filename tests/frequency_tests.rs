use std::collections::HashSet;

use moodmap::frequency::{default_stop_words, rank, DEFAULT_MIN_WORD_LENGTH, DEFAULT_TOP_WORDS};
use moodmap::tokenize::tokenize;

fn no_stop_words() -> HashSet<String> {
    HashSet::new()
}

#[test]
fn test_rank_empty_input() {
    let entries = rank(&[], &default_stop_words(), DEFAULT_MIN_WORD_LENGTH, DEFAULT_TOP_WORDS);
    assert!(entries.is_empty());
}

#[test]
fn test_rank_orders_by_count_descending() {
    let tokens = tokenize("cat dog cat bird dog cat");
    let entries = rank(&tokens, &no_stop_words(), 3, 10);

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].word, "cat");
    assert_eq!(entries[0].count, 3);
    assert_eq!(entries[1].word, "dog");
    assert_eq!(entries[1].count, 2);
    assert_eq!(entries[2].word, "bird");
    assert_eq!(entries[2].count, 1);
}

#[test]
fn test_rank_ties_keep_first_seen_order() {
    let tokens = tokenize("dog cat dog cat bird");
    let entries = rank(&tokens, &no_stop_words(), 3, 10);

    assert_eq!(entries[0].word, "dog");
    assert_eq!(entries[1].word, "cat");
    assert_eq!(entries[2].word, "bird");
}

#[test]
fn test_rank_filters_stop_words() {
    let tokens = tokenize("the cat and the dog");
    let entries = rank(&tokens, &default_stop_words(), 3, 10);

    let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["cat", "dog"]);
}

#[test]
fn test_rank_filters_short_tokens() {
    let tokens = tokenize("go cat go ox");
    let entries = rank(&tokens, &no_stop_words(), 3, 10);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].word, "cat");
}

#[test]
fn test_rank_truncates_to_top_n() {
    let tokens = tokenize("alpha beta gamma delta epsilon");
    let entries = rank(&tokens, &no_stop_words(), 3, 2);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].word, "alpha");
    assert_eq!(entries[1].word, "beta");
}

#[test]
fn test_rank_all_stop_words_is_empty() {
    let tokens = tokenize("the a an");
    let entries = rank(&tokens, &default_stop_words(), DEFAULT_MIN_WORD_LENGTH, DEFAULT_TOP_WORDS);

    assert!(entries.is_empty());
}

#[test]
fn test_rank_min_length_counts_characters() {
    // Multibyte characters count as one character each
    let tokens = vec!["héllo".to_string(), "ab".to_string()];
    let entries = rank(&tokens, &no_stop_words(), 3, 10);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].word, "héllo");
}
