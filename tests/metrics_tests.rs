use moodmap::core::metrics::{count_at_least, max_count, total_occurrences};
use moodmap::core::FrequencyEntry;

fn entries(pairs: &[(&str, usize)]) -> Vec<FrequencyEntry> {
    pairs
        .iter()
        .map(|(word, count)| FrequencyEntry::new(word.to_string(), *count))
        .collect()
}

#[test]
fn test_total_occurrences_empty() {
    assert_eq!(total_occurrences(&[]), 0);
}

#[test]
fn test_total_occurrences_sums_counts() {
    let table = entries(&[("cat", 3), ("dog", 2), ("bird", 1)]);
    assert_eq!(total_occurrences(&table), 6);
}

#[test]
fn test_max_count_empty() {
    assert_eq!(max_count(&[]), 0);
}

#[test]
fn test_max_count_finds_peak() {
    let table = entries(&[("cat", 3), ("dog", 7), ("bird", 1)]);
    assert_eq!(max_count(&table), 7);
}

#[test]
fn test_count_at_least() {
    let table = entries(&[("cat", 3), ("dog", 2), ("bird", 1)]);

    assert_eq!(count_at_least(&table, 1), 3);
    assert_eq!(count_at_least(&table, 2), 2);
    assert_eq!(count_at_least(&table, 4), 0);
}
