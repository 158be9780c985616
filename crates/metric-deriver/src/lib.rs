//! Derived bank metrics from primitive statement fields.
//!
//! Each derivation is a pure function returning `MetricValue`; an invalid
//! or missing denominator yields `NotAvailable`, never NaN. Callers prefer
//! a provider-reported ratio over these when one exists.

use bank_health_core::{MetricValue, StatementFields};

/// numerator / denominator × 100, guarded the same way for every ratio:
/// both operands present, numerator nonzero, denominator strictly positive.
fn pct_ratio(numerator: Option<f64>, denominator: Option<f64>) -> MetricValue {
    match (numerator, denominator) {
        (Some(n), Some(d)) if n != 0.0 && d > 0.0 => MetricValue::Available(n / d * 100.0),
        _ => MetricValue::NotAvailable,
    }
}

/// Operating expenses as a share of revenue (lower is better)
pub fn efficiency_ratio(f: &StatementFields) -> MetricValue {
    pct_ratio(f.operating_expenses, f.revenue)
}

/// (interest income − interest expense) / total assets × 100
pub fn net_interest_margin(f: &StatementFields) -> MetricValue {
    match (f.interest_income, f.interest_expense, f.total_assets) {
        (Some(income), Some(expense), Some(assets)) if assets > 0.0 => {
            MetricValue::Available((income - expense) / assets * 100.0)
        }
        _ => MetricValue::NotAvailable,
    }
}

/// Loans plus investments as a share of total assets. Components the
/// provider omitted count as zero; an all-zero numerator means the
/// statement had no loan book data at all.
pub fn loan_to_assets(f: &StatementFields) -> MetricValue {
    let loans = f.net_receivables.unwrap_or(0.0)
        + f.short_term_investments.unwrap_or(0.0)
        + f.long_term_investments.unwrap_or(0.0);
    match f.total_assets {
        Some(assets) if assets > 0.0 && loans != 0.0 => {
            MetricValue::Available(loans / assets * 100.0)
        }
        _ => MetricValue::NotAvailable,
    }
}

pub fn return_on_assets(f: &StatementFields) -> MetricValue {
    pct_ratio(f.net_income, f.total_assets)
}

pub fn return_on_equity(f: &StatementFields) -> MetricValue {
    pct_ratio(f.net_income, f.shareholders_equity)
}

pub fn net_profit_margin(f: &StatementFields) -> MetricValue {
    pct_ratio(f.net_income, f.revenue)
}

/// Equity less goodwill, intangibles and preferred stock. Absent
/// subtrahends count as zero; equity itself is required.
pub fn tangible_common_equity(f: &StatementFields) -> Option<f64> {
    f.shareholders_equity.map(|equity| {
        equity
            - f.goodwill.unwrap_or(0.0)
            - f.intangible_assets.unwrap_or(0.0)
            - f.preferred_stock.unwrap_or(0.0)
    })
}

/// Return on tangible common equity; NotAvailable when TCE ≤ 0
pub fn return_on_tangible_common_equity(f: &StatementFields) -> MetricValue {
    pct_ratio(f.net_income, tangible_common_equity(f).filter(|tce| *tce > 0.0))
}

/// Tangible book value per share (a dollar amount, not a percentage)
pub fn tangible_book_value_per_share(f: &StatementFields) -> MetricValue {
    match (tangible_common_equity(f), f.common_shares_outstanding) {
        (Some(tce), Some(shares)) if shares > 0.0 => MetricValue::Available(tce / shares),
        _ => MetricValue::NotAvailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> StatementFields {
        StatementFields {
            net_income: Some(250.0),
            revenue: Some(1_000.0),
            operating_expenses: Some(550.0),
            total_assets: Some(20_000.0),
            interest_income: Some(900.0),
            interest_expense: Some(260.0),
            net_receivables: Some(9_000.0),
            short_term_investments: Some(2_000.0),
            long_term_investments: Some(2_000.0),
            shareholders_equity: Some(2_400.0),
            goodwill: Some(300.0),
            intangible_assets: Some(100.0),
            preferred_stock: None,
            common_shares_outstanding: Some(100.0),
        }
    }

    fn assert_close(value: MetricValue, expected: f64) {
        let v = value.as_f64().expect("value should be available");
        assert!((v - expected).abs() < 1e-9, "got {v}, expected {expected}");
    }

    #[test]
    fn test_efficiency_ratio() {
        assert_close(efficiency_ratio(&fields()), 55.0);
        let mut f = fields();
        f.revenue = Some(0.0);
        assert_eq!(efficiency_ratio(&f), MetricValue::NotAvailable);
        f.revenue = None;
        assert_eq!(efficiency_ratio(&f), MetricValue::NotAvailable);
    }

    #[test]
    fn test_net_interest_margin() {
        assert_close(net_interest_margin(&fields()), 3.2);
        let mut f = fields();
        f.interest_expense = None;
        assert_eq!(net_interest_margin(&f), MetricValue::NotAvailable);
        f = fields();
        f.total_assets = Some(0.0);
        assert_eq!(net_interest_margin(&f), MetricValue::NotAvailable);
    }

    #[test]
    fn test_loan_to_assets() {
        assert_close(loan_to_assets(&fields()), 65.0);
        let mut f = fields();
        f.short_term_investments = None;
        // missing component counts as zero, metric still available
        assert_close(loan_to_assets(&f), 55.0);
        f.net_receivables = Some(0.0);
        f.short_term_investments = Some(0.0);
        f.long_term_investments = Some(0.0);
        assert_eq!(loan_to_assets(&f), MetricValue::NotAvailable);
    }

    #[test]
    fn test_profitability_ratios() {
        assert_close(return_on_assets(&fields()), 1.25);
        assert_close(return_on_equity(&fields()), 250.0 / 2_400.0 * 100.0);
        assert_close(net_profit_margin(&fields()), 25.0);

        let mut f = fields();
        f.net_income = Some(0.0);
        assert_eq!(return_on_assets(&f), MetricValue::NotAvailable);
        f = fields();
        f.shareholders_equity = Some(-50.0);
        assert_eq!(return_on_equity(&f), MetricValue::NotAvailable);
    }

    #[test]
    fn test_tangible_common_equity_chain() {
        // TCE = 2400 - 300 - 100 = 2000
        assert_eq!(tangible_common_equity(&fields()), Some(2_000.0));
        assert_close(return_on_tangible_common_equity(&fields()), 12.5);
        assert_close(tangible_book_value_per_share(&fields()), 20.0);

        let mut f = fields();
        f.goodwill = Some(3_000.0); // TCE goes negative
        assert_eq!(
            return_on_tangible_common_equity(&f),
            MetricValue::NotAvailable
        );
        f = fields();
        f.common_shares_outstanding = Some(0.0);
        assert_eq!(tangible_book_value_per_share(&f), MetricValue::NotAvailable);
    }
}
