use std::collections::HashMap;

use crate::core::Polarity;

/// Hand-curated marker tables. Pairwise disjoint; `Lexicon::new` keeps
/// the last entry when a word appears in more than one table.
pub const POSITIVE_MARKERS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "awesome",
    "wonderful",
    "happy",
    "love",
    "amazing",
    "fantastic",
];

pub const NEGATIVE_MARKERS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "worst",
    "sad",
    "hate",
    "disappointing",
    "frustrating",
];

pub const NEUTRAL_MARKERS: &[&str] = &["okay", "fine", "neutral", "average", "standard"];

/// Word to sentiment category lookup, built once and scanned once per
/// token stream.
#[derive(Clone, Debug)]
pub struct Lexicon {
    entries: HashMap<String, Polarity>,
}

impl Lexicon {
    pub fn new<I, S>(positive: I, negative: I, neutral: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = HashMap::new();
        for word in positive {
            entries.insert(word.as_ref().to_lowercase(), Polarity::Positive);
        }
        for word in negative {
            entries.insert(word.as_ref().to_lowercase(), Polarity::Negative);
        }
        for word in neutral {
            entries.insert(word.as_ref().to_lowercase(), Polarity::Neutral);
        }
        Self { entries }
    }

    /// Exact-string membership test. Tokens are already lowercased, so
    /// lookup is case-insensitive end to end.
    pub fn classify(&self, word: &str) -> Option<Polarity> {
        self.entries.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(POSITIVE_MARKERS, NEGATIVE_MARKERS, NEUTRAL_MARKERS)
    }
}
