use moodmap::tokenize::{split_words, tokenize};

#[test]
fn test_tokenize_empty() {
    let tokens = tokenize("");
    assert!(tokens.is_empty());
}

#[test]
fn test_tokenize_all_punctuation() {
    let tokens = tokenize("... !!! ??? ,,,");
    assert!(tokens.is_empty());
}

#[test]
fn test_tokenize_lowercases() {
    let tokens = tokenize("Hello WORLD");
    assert_eq!(tokens, vec!["hello", "world"]);
}

#[test]
fn test_tokenize_splits_on_nonword_runs() {
    let tokens = tokenize("rock-n-roll, again...again");
    assert_eq!(tokens, vec!["rock", "n", "roll", "again", "again"]);
}

#[test]
fn test_tokenize_keeps_digits_and_underscores() {
    let tokens = tokenize("top_10 items");
    assert_eq!(tokens, vec!["top_10", "items"]);
}

#[test]
fn test_tokenize_preserves_order() {
    let tokens = tokenize("first second third");
    assert_eq!(tokens, vec!["first", "second", "third"]);
}

#[test]
fn test_split_words_empty() {
    let words = split_words("");
    assert!(words.is_empty());
}

#[test]
fn test_split_words_strips_punctuation_before_splitting() {
    let words = split_words("Hello, world!");
    assert_eq!(words, vec!["Hello", "world"]);
}

#[test]
fn test_split_words_punctuation_does_not_inflate_length() {
    let words = split_words("wait... what?!");
    assert_eq!(words, vec!["wait", "what"]);
}

#[test]
fn test_split_words_whitespace_only() {
    let words = split_words("   \t\n  ");
    assert!(words.is_empty());
}
