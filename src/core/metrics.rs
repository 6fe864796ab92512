use crate::core::FrequencyEntry;

pub fn total_occurrences(entries: &[FrequencyEntry]) -> usize {
    entries.iter().map(|e| e.count).sum()
}

pub fn max_count(entries: &[FrequencyEntry]) -> usize {
    entries.iter().map(|e| e.count).max().unwrap_or(0)
}

pub fn count_at_least(entries: &[FrequencyEntry], threshold: usize) -> usize {
    entries.iter().filter(|e| e.count >= threshold).count()
}
