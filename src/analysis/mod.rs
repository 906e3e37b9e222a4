//! Strategy results, comparison, payment impact and insights

mod strategy_result;
mod comparison;
mod impact;
mod insights;

pub use strategy_result::{
    build_strategy_result, time_to_payoff_label, PrioritizedDebt, StrategyResult, StrategySummary,
};
pub use comparison::{
    compare, recommend, recommend_from_deltas, recommendation_text, Recommendation,
    RecommendedStrategy, StrategyComparison,
};
pub use impact::{ImpactDetail, PaymentImpactAnalyzer, PaymentImpactScenario};
pub use insights::{generate_insights, Insight, InsightKind};
