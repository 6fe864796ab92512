use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::frequency::{DEFAULT_MIN_WORD_LENGTH, DEFAULT_STOP_WORDS, DEFAULT_TOP_WORDS};
use crate::lexicon::{NEGATIVE_MARKERS, NEUTRAL_MARKERS, POSITIVE_MARKERS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Marker-word tables configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Words counted toward the positive bucket
    #[serde(default = "default_positive_markers")]
    pub positive: Vec<String>,

    /// Words counted toward the negative bucket
    #[serde(default = "default_negative_markers")]
    pub negative: Vec<String>,

    /// Words counted toward the neutral bucket
    #[serde(default = "default_neutral_markers")]
    pub neutral: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            positive: default_positive_markers(),
            negative: default_negative_markers(),
            neutral: default_neutral_markers(),
        }
    }
}

/// Analysis pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Words excluded from frequency ranking
    #[serde(default = "default_stop_words_list")]
    pub stop_words: Vec<String>,

    /// Shortest token length kept by the frequency ranker
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,

    /// Ranked table size limit
    #[serde(default = "default_top_words")]
    pub top_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            lexicon: LexiconConfig::default(),
            stop_words: default_stop_words_list(),
            min_word_length: default_min_word_length(),
            top_words: default_top_words(),
        }
    }
}

impl AnalysisConfig {
    /// Validate that the marker tables are pairwise disjoint and the
    /// ranker limits are usable.
    pub fn validate(&self) -> Result<(), String> {
        for validation in self.collect_validations() {
            validation?;
        }
        Ok(())
    }

    fn collect_validations(&self) -> Vec<Result<(), String>> {
        vec![
            Self::validate_disjoint(&self.lexicon.positive, &self.lexicon.negative, "positive", "negative"),
            Self::validate_disjoint(&self.lexicon.positive, &self.lexicon.neutral, "positive", "neutral"),
            Self::validate_disjoint(&self.lexicon.negative, &self.lexicon.neutral, "negative", "neutral"),
            Self::validate_top_words(self.top_words),
        ]
    }

    // Pure function: report words shared between two marker tables
    fn validate_disjoint(
        left: &[String],
        right: &[String],
        left_name: &str,
        right_name: &str,
    ) -> Result<(), String> {
        let shared: Vec<&str> = left
            .iter()
            .filter(|w| right.iter().any(|r| r.eq_ignore_ascii_case(w.as_str())))
            .map(|w| w.as_str())
            .collect();

        if shared.is_empty() {
            Ok(())
        } else {
            Err(format!(
                "{} and {} marker tables overlap: {}",
                left_name,
                right_name,
                shared.join(", ")
            ))
        }
    }

    fn validate_top_words(top_words: usize) -> Result<(), String> {
        if top_words == 0 {
            Err("top_words must be at least 1".to_string())
        } else {
            Ok(())
        }
    }

    /// Parse and validate a TOML config document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Load configuration from a file path. A missing file is not an
    /// error; it yields the default tables.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config = Self::from_toml_str(&contents)?;
                log::debug!("loaded config from {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }
}

fn default_positive_markers() -> Vec<String> {
    POSITIVE_MARKERS.iter().map(|w| w.to_string()).collect()
}

fn default_negative_markers() -> Vec<String> {
    NEGATIVE_MARKERS.iter().map(|w| w.to_string()).collect()
}

fn default_neutral_markers() -> Vec<String> {
    NEUTRAL_MARKERS.iter().map(|w| w.to_string()).collect()
}

fn default_stop_words_list() -> Vec<String> {
    DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect()
}

fn default_min_word_length() -> usize {
    DEFAULT_MIN_WORD_LENGTH
}

fn default_top_words() -> usize {
    DEFAULT_TOP_WORDS
}
