//! Sector benchmark table for US regional banks.
//!
//! Fixed constants supplied alongside every snapshot; metric values are
//! scored as percentage deviation from these.

pub const ROA: f64 = 1.05;
pub const ROE: f64 = 10.5;
pub const NET_INTEREST_MARGIN: f64 = 3.2;
pub const EFFICIENCY_RATIO: f64 = 55.0;
pub const NET_PROFIT_MARGIN: f64 = 25.0;
pub const NPL_RATIO: f64 = 0.8;
pub const LOAN_TO_ASSETS: f64 = 65.0;
pub const CURRENT_RATIO: f64 = 0.30;
pub const CAPITAL_ADEQUACY_RATIO: f64 = 13.0;
pub const DEBT_TO_EQUITY: f64 = 1.2;
pub const ROTCE: f64 = 15.0;
pub const TBVPS: f64 = 55.0;
pub const CET1_RATIO: f64 = 12.0;
