// Export modules for library usage
pub mod analyzer;
pub mod config;
pub mod core;
pub mod frequency;
pub mod io;
pub mod lexicon;
pub mod linguistics;
pub mod sentiment;
pub mod tokenize;
pub mod trend;

// Re-export commonly used types
pub use crate::core::{
    AnalysisReport, EmotionBreakdown, FrequencyEntry, LinguisticFeatures, MarkerCounts, Polarity,
    ReadingLevel, SentimentReport,
};

pub use crate::analyzer::{analyze_text, TextAnalyzer, SAMPLE_TEXTS};

pub use crate::config::{AnalysisConfig, ConfigError, LexiconConfig};

pub use crate::core::metrics::{count_at_least, max_count, total_occurrences};

pub use crate::io::output::{
    create_writer, export_json, JsonWriter, MarkdownWriter, OutputFormat, OutputWriter,
    TerminalWriter,
};

pub use crate::lexicon::Lexicon;

pub use crate::sentiment::classify_score;

pub use crate::trend::{direction, moving_average, with_score, TrendDirection, TrendPoint};
