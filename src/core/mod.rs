pub mod metrics;

use im::Vector;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub sentiment: SentimentReport,
    pub linguistic: LinguisticFeatures,
    pub word_frequency: Vector<FrequencyEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SentimentReport {
    pub score: f64,
    pub classification: Polarity,
    pub word_count: usize,
    pub emotions: EmotionBreakdown,
    pub word_analysis: MarkerCounts,
}

/// Per-category marker ratios over the token count. Independent ratios:
/// a token outside every marker table contributes to none of them, so
/// the three fields do not sum to 1.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct EmotionBreakdown {
    pub joy: f64,
    pub sadness: f64,
    pub neutral: f64,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkerCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Polarity {
    Positive, // Score above 0.1
    Negative, // Score below -0.1
    Neutral,  // Everything in between, boundaries included
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(Polarity, &str)] = &[
            (Polarity::Positive, "Positive"),
            (Polarity::Negative, "Negative"),
            (Polarity::Neutral, "Neutral"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(p, _)| p == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum ReadingLevel {
    Basic,        // Average word length up to 4
    Intermediate, // Average word length above 4
    Advanced,     // Average word length above 5
}

impl std::fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(ReadingLevel, &str)] = &[
            (ReadingLevel::Basic, "Basic"),
            (ReadingLevel::Intermediate, "Intermediate"),
            (ReadingLevel::Advanced, "Advanced"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(l, _)| l == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LinguisticFeatures {
    pub average_word_length: f64,
    pub reading_level: ReadingLevel,
    pub word_diversity: f64,
    pub punctuation_density: f64,
    pub unique_word_count: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: usize,
}

impl FrequencyEntry {
    pub fn new(word: String, count: usize) -> Self {
        Self { word, count }
    }
}
