pub mod aggregator;
pub mod engine;
pub mod scorer;

pub use aggregator::aggregate;
pub use engine::HealthAnalyzer;
pub use scorer::score;
