use async_trait::async_trait;

use crate::{AnalysisError, BankRecommendation, MetricsSnapshot};

/// Trait for the data-retrieval layer that assembles snapshots from
/// market-data and regulatory APIs.
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    async fn fetch_snapshot(&self, symbol: &str) -> Result<MetricsSnapshot, AnalysisError>;
}

/// Trait for engines that grade a bank from a metrics snapshot
#[async_trait]
pub trait BankAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        symbol: &str,
        snapshot: &MetricsSnapshot,
    ) -> Result<BankRecommendation, AnalysisError>;
}
