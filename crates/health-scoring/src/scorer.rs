//! Per-metric scoring against a sector benchmark.

use bank_health_core::{Direction, HistoryPoint, MetricValue, ScoreResult, Trend};

/// Bucket the percentage deviation from benchmark into a base score.
/// Boundaries are exclusive on the upper side: a deviation of exactly 20
/// lands in the >10 bucket.
pub fn base_score(effective_diff: f64) -> u8 {
    if effective_diff > 20.0 {
        10
    } else if effective_diff > 10.0 {
        8
    } else if effective_diff > 0.0 {
        6
    } else if effective_diff > -10.0 {
        4
    } else if effective_diff > -20.0 {
        2
    } else {
        0
    }
}

/// Score one metric: benchmark-relative bucket plus trend multiplier.
///
/// An unavailable value scores a neutral 5 rather than penalizing the bank
/// for a gap in the provider's data.
pub fn score(
    value: MetricValue,
    benchmark: f64,
    direction: Direction,
    history: &[HistoryPoint],
) -> ScoreResult {
    let current = match value.as_f64() {
        Some(v) => v,
        None => {
            return ScoreResult {
                base_score: 5,
                trend_multiplier: 1.0,
                trend: Trend::Neutral,
            }
        }
    };

    let percent_diff = (current - benchmark) / benchmark * 100.0;
    let effective_diff = match direction {
        Direction::HigherIsBetter => percent_diff,
        Direction::LowerIsBetter => -percent_diff,
    };

    let trend = trend_analysis::classify(history, direction);
    ScoreResult {
        base_score: base_score(effective_diff),
        trend_multiplier: trend.multiplier(),
        trend,
    }
}
