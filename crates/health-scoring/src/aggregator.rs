//! Composite recommendation from scored safety and profitability metrics.

use bank_health_core::{
    stars_from_score, BankRecommendation, Confidence, Direction, MetricDefinition,
    Recommendation, Trend,
};

use crate::scorer;

/// Trend multipliers span [0.7, 1.3]; their average remaps linearly onto
/// [0, 50] trend points, so an all-neutral bank sits at the 25-point midpoint.
const TREND_MULTIPLIER_FLOOR: f64 = 0.7;
const TREND_MULTIPLIER_SPAN: f64 = 0.6;
const TREND_POINTS: f64 = 50.0;

#[derive(Debug, Clone)]
struct ScoredMetric {
    name: String,
    base_score: u8,
    trend: Trend,
    available: bool,
}

fn score_category(
    metrics: &[MetricDefinition],
    scored: &mut Vec<ScoredMetric>,
    above: &mut u32,
    below: &mut u32,
    multipliers: &mut Vec<f64>,
) -> f64 {
    let mut total = 0.0;
    for metric in metrics {
        let result = scorer::score(metric.value, metric.benchmark, metric.direction, &metric.history);
        total += (result.base_score as f64 / 10.0) * metric.weight;

        if let Some(value) = metric.value.as_f64() {
            let above_average = match metric.direction {
                Direction::HigherIsBetter => value > metric.benchmark,
                Direction::LowerIsBetter => value < metric.benchmark,
            };
            if above_average {
                *above += 1;
            } else {
                *below += 1;
            }
        }

        if metric.history.len() >= trend_analysis::MIN_HISTORY_POINTS {
            multipliers.push(result.trend_multiplier);
        }

        scored.push(ScoredMetric {
            name: metric.name.clone(),
            base_score: result.base_score,
            trend: result.trend,
            available: metric.value.is_available(),
        });
    }
    total
}

fn annotate(metric: &ScoredMetric) -> String {
    format!("{}{}", metric.name, metric.trend.arrow())
}

/// Combine all scored metrics into a graded recommendation.
///
/// Safety and profitability each contribute up to 25 points; the average
/// trend multiplier contributes up to 50. The composite is clamped to
/// [0, 100] and classified on its unrounded value.
pub fn aggregate(
    safety_metrics: &[MetricDefinition],
    profitability_metrics: &[MetricDefinition],
) -> BankRecommendation {
    let mut scored = Vec::with_capacity(safety_metrics.len() + profitability_metrics.len());
    let mut above = 0u32;
    let mut below = 0u32;
    let mut multipliers = Vec::new();

    let safety_score =
        score_category(safety_metrics, &mut scored, &mut above, &mut below, &mut multipliers);
    let profitability_score = score_category(
        profitability_metrics,
        &mut scored,
        &mut above,
        &mut below,
        &mut multipliers,
    );

    let avg_multiplier = if multipliers.is_empty() {
        1.0
    } else {
        multipliers.iter().sum::<f64>() / multipliers.len() as f64
    };
    let trend_score =
        ((avg_multiplier - TREND_MULTIPLIER_FLOOR) / TREND_MULTIPLIER_SPAN) * TREND_POINTS;

    let composite = (safety_score + profitability_score + trend_score).clamp(0.0, 100.0);

    tracing::debug!(
        safety = safety_score,
        profitability = profitability_score,
        trend = trend_score,
        composite,
        "aggregated bank health score"
    );

    // Stable sort keeps definition order for tied base scores
    let mut ranked = scored;
    ranked.sort_by(|a, b| b.base_score.cmp(&a.base_score));

    let strengths: Vec<String> = ranked
        .iter()
        .take(3)
        .filter(|m| m.base_score >= 6 && m.available)
        .map(annotate)
        .collect();
    let concerns: Vec<String> = ranked
        .iter()
        .rev()
        .take(3)
        .filter(|m| m.base_score < 6 && m.available)
        .map(annotate)
        .collect();

    BankRecommendation {
        final_score: composite.round() as u8,
        stars: stars_from_score(composite),
        recommendation: Recommendation::from_score(composite),
        confidence: Confidence::from_score(composite),
        safety_score,
        profitability_score,
        trend_score,
        metrics_above_average: above,
        metrics_below_average: below,
        strengths,
        concerns,
    }
}
