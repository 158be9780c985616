//! Linear trend detection over a metric's history.
//!
//! Closed-form ordinary least squares over the observation index (0..n−1)
//! as X and the metric value as Y. At least three points are required;
//! shorter histories carry no trend signal and classify as neutral.

use bank_health_core::{Direction, HistoryPoint, Trend};

/// Slope magnitudes at or below this are treated as flat
pub const SLOPE_DEAD_ZONE: f64 = 0.01;

pub const MIN_HISTORY_POINTS: usize = 3;

/// Fitted regression line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

/// Fit a least-squares line through the history. Returns `None` when there
/// are fewer than [`MIN_HISTORY_POINTS`] observations.
pub fn fit(history: &[HistoryPoint]) -> Option<TrendLine> {
    let n = history.len();
    if n < MIN_HISTORY_POINTS {
        return None;
    }

    let nf = n as f64;
    let sum_x: f64 = (0..n).map(|i| i as f64).sum();
    let sum_y: f64 = history.iter().map(|p| p.value).sum();
    let sum_xy: f64 = history
        .iter()
        .enumerate()
        .map(|(i, p)| i as f64 * p.value)
        .sum();
    let sum_x2: f64 = (0..n).map(|i| (i as f64) * (i as f64)).sum();

    let denom = nf * sum_x2 - sum_x * sum_x;
    if denom == 0.0 {
        return None;
    }

    let slope = (nf * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / nf;
    Some(TrendLine { slope, intercept })
}

/// Classify the history's trend relative to the metric's direction.
/// Near-flat slopes (|slope| ≤ [`SLOPE_DEAD_ZONE`]) are neutral regardless
/// of sign, as is any history too short to fit.
pub fn classify(history: &[HistoryPoint], direction: Direction) -> Trend {
    let line = match fit(history) {
        Some(line) => line,
        None => return Trend::Neutral,
    };

    if line.slope.abs() <= SLOPE_DEAD_ZONE {
        return Trend::Neutral;
    }

    let rising = line.slope > 0.0;
    match direction {
        Direction::HigherIsBetter if rising => Trend::Improving,
        Direction::HigherIsBetter => Trend::Declining,
        Direction::LowerIsBetter if rising => Trend::Declining,
        Direction::LowerIsBetter => Trend::Improving,
    }
}
