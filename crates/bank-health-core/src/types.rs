use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A metric value that may be absent.
///
/// Providers report some ratios directly and omit others; derivations with
/// an invalid denominator also come back as `NotAvailable`. The engine never
/// carries NaN, only this explicit sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MetricValue {
    Available(f64),
    NotAvailable,
}

impl MetricValue {
    pub fn from_option(value: Option<f64>) -> Self {
        match value {
            Some(v) => MetricValue::Available(v),
            None => MetricValue::NotAvailable,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Available(v) => Some(*v),
            MetricValue::NotAvailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, MetricValue::Available(_))
    }
}

/// One observation in a metric's history (chronological ascending)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Whether a larger metric value is good or bad for the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// Trend verdict over a metric's history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Improving,
    Declining,
    Neutral,
}

impl Trend {
    /// Multiplier applied to a metric's weighted contribution
    pub fn multiplier(&self) -> f64 {
        match self {
            Trend::Improving => 1.3,
            Trend::Declining => 0.7,
            Trend::Neutral => 1.0,
        }
    }

    /// Arrow suffix for strength/concern labels ("" when neutral)
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Improving => " ↑",
            Trend::Declining => " ↓",
            Trend::Neutral => "",
        }
    }
}

/// A metric ready for scoring: current value, sector benchmark, direction,
/// history, and its point weight within its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    pub name: String,
    pub value: MetricValue,
    pub benchmark: f64,
    pub direction: Direction,
    pub history: Vec<HistoryPoint>,
    pub weight: f64,
}

/// Outcome of scoring a single metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0, 2, 4, 6, 8 or 10
    pub base_score: u8,
    /// 0.7, 1.0 or 1.3
    pub trend_multiplier: f64,
    pub trend: Trend,
}

/// Final investment stance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Buy,
    Hold,
    Sell,
}

impl Recommendation {
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            Recommendation::Buy
        } else if score >= 45.0 {
            Recommendation::Hold
        } else {
            Recommendation::Sell
        }
    }

    pub fn to_label(&self) -> &'static str {
        match self {
            Recommendation::Buy => "Buy",
            Recommendation::Hold => "Hold",
            Recommendation::Sell => "Sell",
        }
    }
}

/// Confidence in the recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            Confidence::High
        } else if score >= 50.0 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Star rating derived from the composite score (1..=5)
pub fn stars_from_score(score: f64) -> u8 {
    if score >= 85.0 {
        5
    } else if score >= 70.0 {
        4
    } else if score >= 45.0 {
        3
    } else if score >= 30.0 {
        2
    } else {
        1
    }
}

/// Graded recommendation for one bank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankRecommendation {
    /// Composite score rounded for display, always within [0, 100]
    pub final_score: u8,
    pub stars: u8,
    pub recommendation: Recommendation,
    pub confidence: Confidence,
    /// Safety category points, [0, 25]
    pub safety_score: f64,
    /// Profitability category points, [0, 25]
    pub profitability_score: f64,
    /// Trend points, [0, 50]
    pub trend_score: f64,
    pub metrics_above_average: u32,
    pub metrics_below_average: u32,
    /// Up to three best-scoring metric names, trend-annotated
    pub strengths: Vec<String>,
    /// Up to three worst-scoring metric names, trend-annotated
    pub concerns: Vec<String>,
}

/// Primitive statement fields, as reported by the provider.
/// Every field is optional; derivations degrade to `NotAvailable` when an
/// input they need is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementFields {
    pub net_income: Option<f64>,
    pub revenue: Option<f64>,
    pub operating_expenses: Option<f64>,
    pub total_assets: Option<f64>,
    pub interest_income: Option<f64>,
    pub interest_expense: Option<f64>,
    pub net_receivables: Option<f64>,
    pub short_term_investments: Option<f64>,
    pub long_term_investments: Option<f64>,
    pub shareholders_equity: Option<f64>,
    pub goodwill: Option<f64>,
    pub intangible_assets: Option<f64>,
    pub preferred_stock: Option<f64>,
    pub common_shares_outstanding: Option<f64>,
}

/// Ratios the provider reports directly. A reported value always takes
/// precedence over one derived from `StatementFields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportedMetrics {
    pub roa: Option<f64>,
    pub roe: Option<f64>,
    pub net_interest_margin: Option<f64>,
    pub efficiency_ratio: Option<f64>,
    pub net_profit_margin: Option<f64>,
    pub npl_ratio: Option<f64>,
    pub capital_adequacy_ratio: Option<f64>,
    pub cet1_ratio: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub loan_to_assets: Option<f64>,
    pub rotce: Option<f64>,
    pub tbvps: Option<f64>,
    pub current_ratio: Option<f64>,
}

/// Everything the retrieval layer hands the engine for one bank.
/// Histories are keyed by metric name, oldest point first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub symbol: String,
    pub current_price: Option<f64>,
    pub reported: ReportedMetrics,
    pub statement: StatementFields,
    #[serde(default)]
    pub history: std::collections::HashMap<String, Vec<HistoryPoint>>,
}

impl MetricsSnapshot {
    /// History for a metric by name; empty slice when none was retrieved
    pub fn history_for(&self, name: &str) -> &[HistoryPoint] {
        self.history.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_value_round_trip() {
        assert_eq!(MetricValue::from_option(Some(1.5)).as_f64(), Some(1.5));
        assert_eq!(MetricValue::from_option(None), MetricValue::NotAvailable);
        assert!(!MetricValue::NotAvailable.is_available());
    }

    #[test]
    fn test_recommendation_thresholds() {
        assert_eq!(Recommendation::from_score(70.0), Recommendation::Buy);
        assert_eq!(Recommendation::from_score(69.9), Recommendation::Hold);
        assert_eq!(Recommendation::from_score(45.0), Recommendation::Hold);
        assert_eq!(Recommendation::from_score(44.9), Recommendation::Sell);
    }

    #[test]
    fn test_star_bands() {
        assert_eq!(stars_from_score(85.0), 5);
        assert_eq!(stars_from_score(72.0), 4);
        assert_eq!(stars_from_score(50.0), 3);
        assert_eq!(stars_from_score(30.0), 2);
        assert_eq!(stars_from_score(10.0), 1);
    }

    #[test]
    fn test_confidence_thresholds() {
        assert_eq!(Confidence::from_score(70.0), Confidence::High);
        assert_eq!(Confidence::from_score(50.0), Confidence::Medium);
        assert_eq!(Confidence::from_score(49.9), Confidence::Low);
    }
}
