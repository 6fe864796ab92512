use std::collections::HashSet;

use im::Vector;

use crate::config::AnalysisConfig;
use crate::core::{AnalysisReport, FrequencyEntry};
use crate::frequency::{self, DEFAULT_MIN_WORD_LENGTH, DEFAULT_TOP_WORDS};
use crate::lexicon::Lexicon;
use crate::{linguistics, sentiment, tokenize};

/// Canned demo inputs. Data only; picking one (randomly or otherwise)
/// is the caller's business, keeping the engine deterministic.
pub const SAMPLE_TEXTS: &[&str] = &[
    "This is a great day! Everything is wonderful and amazing.",
    "The project was challenging but ultimately very successful and rewarding.",
    "Sometimes things are not as bad as they seem. There's always hope and opportunity.",
    "Technology continues to advance at an incredible pace, bringing both excitement and challenges.",
];

/// Facade over the analysis pipeline: tokenize once, then score
/// sentiment, extract linguistic features, and rank word frequency.
pub struct TextAnalyzer {
    pub lexicon: Lexicon,
    pub stop_words: HashSet<String>,
    pub min_word_length: usize, // Default: 3
    pub top_words: usize,       // Default: 10
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self {
            lexicon: Lexicon::default(),
            stop_words: frequency::default_stop_words(),
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            top_words: DEFAULT_TOP_WORDS,
        }
    }
}

impl TextAnalyzer {
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            lexicon: Lexicon::new(
                &config.lexicon.positive,
                &config.lexicon.negative,
                &config.lexicon.neutral,
            ),
            stop_words: config.stop_words.iter().map(|w| w.to_lowercase()).collect(),
            min_word_length: config.min_word_length,
            top_words: config.top_words,
        }
    }

    /// Analyze one input text.
    ///
    /// Whitespace-only input is a defined "no input" case and returns
    /// `None`, not an error. Otherwise every field of the returned
    /// report is populated; no partial results. Takes `&self` and
    /// touches no shared state, so concurrent callers need no
    /// coordination and repeated calls on the same text return
    /// identical reports.
    pub fn analyze(&self, text: &str) -> Option<AnalysisReport> {
        if text.trim().is_empty() {
            return None;
        }

        let tokens = tokenize::tokenize(text);
        let words = tokenize::split_words(text);
        log::debug!("analyzing {} tokens, {} words", tokens.len(), words.len());

        let sentiment = sentiment::score(&tokens, &self.lexicon);
        let linguistic = linguistics::analyze(text, &tokens, &words);
        let word_frequency: Vector<FrequencyEntry> = frequency::rank(
            &tokens,
            &self.stop_words,
            self.min_word_length,
            self.top_words,
        )
        .into_iter()
        .collect();

        Some(AnalysisReport {
            sentiment,
            linguistic,
            word_frequency,
        })
    }
}

/// Analyze with the default lexicon and stop-word tables.
pub fn analyze_text(text: &str) -> Option<AnalysisReport> {
    TextAnalyzer::default().analyze(text)
}
