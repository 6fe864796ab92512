use crate::core::{EmotionBreakdown, MarkerCounts, Polarity, SentimentReport};
use crate::lexicon::Lexicon;

// Fixed classification thresholds. Scores landing exactly on a boundary
// classify as Neutral.
const POSITIVE_THRESHOLD: f64 = 0.1;
const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Map a continuous score to its discrete label.
pub fn classify_score(score: f64) -> Polarity {
    if score > POSITIVE_THRESHOLD {
        Polarity::Positive
    } else if score < NEGATIVE_THRESHOLD {
        Polarity::Negative
    } else {
        Polarity::Neutral
    }
}

/// Score a token stream against a lexicon.
///
/// `score = (positive - negative) / word_count`, with repeats counted.
/// An empty stream yields a zero score, Neutral, and zeroed ratios
/// rather than dividing by zero.
pub fn score(tokens: &[String], lexicon: &Lexicon) -> SentimentReport {
    let word_count = tokens.len();
    if word_count == 0 {
        return SentimentReport {
            score: 0.0,
            classification: Polarity::Neutral,
            word_count: 0,
            emotions: EmotionBreakdown {
                joy: 0.0,
                sadness: 0.0,
                neutral: 0.0,
            },
            word_analysis: MarkerCounts::default(),
        };
    }

    let word_analysis = count_markers(tokens, lexicon);
    let total = word_count as f64;
    let score = (word_analysis.positive as f64 - word_analysis.negative as f64) / total;

    SentimentReport {
        score,
        classification: classify_score(score),
        word_count,
        emotions: EmotionBreakdown {
            joy: word_analysis.positive as f64 / total,
            sadness: word_analysis.negative as f64 / total,
            neutral: word_analysis.neutral as f64 / total,
        },
        word_analysis,
    }
}

fn count_markers(tokens: &[String], lexicon: &Lexicon) -> MarkerCounts {
    tokens.iter().fold(MarkerCounts::default(), |mut acc, token| {
        match lexicon.classify(token) {
            Some(Polarity::Positive) => acc.positive += 1,
            Some(Polarity::Negative) => acc.negative += 1,
            Some(Polarity::Neutral) => acc.neutral += 1,
            None => {}
        }
        acc
    })
}
