use serde::{Deserialize, Serialize};

/// One labeled score in a caller-supplied history. The engine never
/// samples or stores history itself; trends are pure functions of
/// whatever the caller hands in.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub score: f64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TrendDirection {
    Rising,
    Falling,
    Flat,
}

// Movement within this band of the prior mean counts as Flat.
const FLAT_BAND: f64 = 0.05;

/// Return a new history with the point appended. The input is left
/// untouched.
pub fn with_score(history: &[TrendPoint], label: &str, score: f64) -> Vec<TrendPoint> {
    let mut extended = history.to_vec();
    extended.push(TrendPoint {
        label: label.to_string(),
        score,
    });
    extended
}

/// Trailing-window mean at every point of the history. A window of 0 is
/// treated as 1; empty history yields an empty vector.
pub fn moving_average(history: &[TrendPoint], window: usize) -> Vec<f64> {
    let window = window.max(1);
    history
        .iter()
        .enumerate()
        .map(|(at, _)| {
            let start = (at + 1).saturating_sub(window);
            let slice = &history[start..=at];
            slice.iter().map(|p| p.score).sum::<f64>() / slice.len() as f64
        })
        .collect()
}

/// Compare the latest score against the mean of everything before it.
/// Histories with fewer than two points are Flat.
pub fn direction(history: &[TrendPoint]) -> TrendDirection {
    match history.split_last() {
        Some((last, prior)) if !prior.is_empty() => {
            let mean = prior.iter().map(|p| p.score).sum::<f64>() / prior.len() as f64;
            let delta = last.score - mean;
            if delta > FLAT_BAND {
                TrendDirection::Rising
            } else if delta < -FLAT_BAND {
                TrendDirection::Falling
            } else {
                TrendDirection::Flat
            }
        }
        _ => TrendDirection::Flat,
    }
}
