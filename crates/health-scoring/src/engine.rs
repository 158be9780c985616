//! Engine facade: turns a provider snapshot into a graded recommendation.

use async_trait::async_trait;
use bank_health_core::{
    benchmarks, AnalysisError, BankAnalyzer, BankRecommendation, Direction, MetricDefinition,
    MetricValue, MetricsSnapshot,
};

use crate::aggregator;

/// Safety and profitability each carry 25 points, split evenly across
/// their metrics (4 safety, 5 profitability).
const SAFETY_WEIGHT: f64 = 6.25;
const PROFITABILITY_WEIGHT: f64 = 5.0;

pub struct HealthAnalyzer;

impl HealthAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn metric(
        snapshot: &MetricsSnapshot,
        name: &str,
        value: MetricValue,
        benchmark: f64,
        direction: Direction,
        weight: f64,
    ) -> MetricDefinition {
        MetricDefinition {
            name: name.to_string(),
            value,
            benchmark,
            direction,
            history: snapshot.history_for(name).to_vec(),
            weight,
        }
    }

    /// A provider-reported ratio wins over one derived from the statement
    fn reported_or(reported: Option<f64>, derived: MetricValue) -> MetricValue {
        match reported {
            Some(v) => MetricValue::Available(v),
            None => derived,
        }
    }

    fn safety_metrics(snapshot: &MetricsSnapshot) -> Vec<MetricDefinition> {
        let r = &snapshot.reported;
        vec![
            Self::metric(
                snapshot,
                "NPL Ratio",
                MetricValue::from_option(r.npl_ratio),
                benchmarks::NPL_RATIO,
                Direction::LowerIsBetter,
                SAFETY_WEIGHT,
            ),
            Self::metric(
                snapshot,
                "Capital Adequacy Ratio",
                MetricValue::from_option(r.capital_adequacy_ratio),
                benchmarks::CAPITAL_ADEQUACY_RATIO,
                Direction::HigherIsBetter,
                SAFETY_WEIGHT,
            ),
            Self::metric(
                snapshot,
                "CET1 Ratio",
                MetricValue::from_option(r.cet1_ratio),
                benchmarks::CET1_RATIO,
                Direction::HigherIsBetter,
                SAFETY_WEIGHT,
            ),
            Self::metric(
                snapshot,
                "Debt to Equity",
                MetricValue::from_option(r.debt_to_equity),
                benchmarks::DEBT_TO_EQUITY,
                Direction::LowerIsBetter,
                SAFETY_WEIGHT,
            ),
        ]
    }

    fn profitability_metrics(snapshot: &MetricsSnapshot) -> Vec<MetricDefinition> {
        let r = &snapshot.reported;
        let s = &snapshot.statement;
        vec![
            Self::metric(
                snapshot,
                "ROA",
                Self::reported_or(r.roa, metric_deriver::return_on_assets(s)),
                benchmarks::ROA,
                Direction::HigherIsBetter,
                PROFITABILITY_WEIGHT,
            ),
            Self::metric(
                snapshot,
                "ROE",
                Self::reported_or(r.roe, metric_deriver::return_on_equity(s)),
                benchmarks::ROE,
                Direction::HigherIsBetter,
                PROFITABILITY_WEIGHT,
            ),
            Self::metric(
                snapshot,
                "Net Interest Margin",
                Self::reported_or(r.net_interest_margin, metric_deriver::net_interest_margin(s)),
                benchmarks::NET_INTEREST_MARGIN,
                Direction::HigherIsBetter,
                PROFITABILITY_WEIGHT,
            ),
            Self::metric(
                snapshot,
                "Efficiency Ratio",
                Self::reported_or(r.efficiency_ratio, metric_deriver::efficiency_ratio(s)),
                benchmarks::EFFICIENCY_RATIO,
                Direction::LowerIsBetter,
                PROFITABILITY_WEIGHT,
            ),
            Self::metric(
                snapshot,
                "Net Profit Margin",
                Self::reported_or(r.net_profit_margin, metric_deriver::net_profit_margin(s)),
                benchmarks::NET_PROFIT_MARGIN,
                Direction::HigherIsBetter,
                PROFITABILITY_WEIGHT,
            ),
        ]
    }

    /// Grade a snapshot. Always produces a recommendation: unavailable
    /// metrics degrade to neutral scores rather than failing the call.
    pub fn recommend(&self, symbol: &str, snapshot: &MetricsSnapshot) -> BankRecommendation {
        let safety = Self::safety_metrics(snapshot);
        let profitability = Self::profitability_metrics(snapshot);

        let unavailable = safety
            .iter()
            .chain(profitability.iter())
            .filter(|m| !m.value.is_available())
            .count();
        if unavailable == safety.len() + profitability.len() {
            tracing::warn!(symbol, "no metric available; grading on neutral defaults");
        }

        aggregator::aggregate(&safety, &profitability)
    }
}

impl Default for HealthAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BankAnalyzer for HealthAnalyzer {
    async fn analyze(
        &self,
        symbol: &str,
        snapshot: &MetricsSnapshot,
    ) -> Result<BankRecommendation, AnalysisError> {
        Ok(self.recommend(symbol, snapshot))
    }
}
