//! Per-feature trend direction over a recent window of samples.
//!
//! The direction compares the mean of the first half of the window against
//! the mean of the second half. A window needs at least two samples before
//! any comparison is meaningful.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Movement of a metric across a window, second half relative to first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TrendDirection {
    Up,
    Flat,
    Down,
    InsufficientData,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Flat => "flat",
            TrendDirection::Down => "down",
            TrendDirection::InsufficientData => "insufficient_data",
        }
    }
}

/// Minimum half-to-half mean shift that counts as movement, on the 0–10
/// symptom scales. The [0, 1] wearable scales use the same fraction of
/// their range.
pub const SYMPTOM_EPSILON: f64 = 0.5;
pub const FRACTION_EPSILON: f64 = 0.05;

/// Direction of a metric over the window, oldest value first.
///
/// Splits at the midpoint (odd windows put the extra sample in the second
/// half) and compares half means against `epsilon`.
pub fn direction(values: &[f64], epsilon: f64) -> TrendDirection {
    if values.len() < 2 {
        return TrendDirection::InsufficientData;
    }
    let mid = values.len() / 2;
    let first = mean(&values[..mid]);
    let second = mean(&values[mid..]);
    if second > first + epsilon {
        TrendDirection::Up
    } else if second < first - epsilon {
        TrendDirection::Down
    } else {
        TrendDirection::Flat
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
