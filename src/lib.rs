//! Debt Payoff - Deterministic month-by-month debt payoff simulation engine
//!
//! This library provides:
//! - Closed-form single-debt amortization (months to payoff, lifetime interest)
//! - Avalanche, snowball and custom-priority payoff ordering
//! - Portfolio simulation with an extra monthly payment
//! - Strategy comparison and recommendation
//! - Extra payment sensitivity analysis and rule-based insights

pub mod error;
pub mod config;
pub mod debt;
pub mod amortization;
pub mod strategy;
pub mod simulation;
pub mod baseline;
pub mod analysis;
pub mod planner;

// Re-export commonly used types
pub use error::{LoadError, ValidationError};
pub use config::PayoffConfig;
pub use debt::{load_debts, Debt, DebtStatus, DebtType};
pub use amortization::Payoff;
pub use strategy::Strategy;
pub use simulation::{PayoffSimulator, SimulationResult};
pub use analysis::{Insight, PaymentImpactScenario, Recommendation, StrategyResult};
pub use planner::{DebtAnalysis, PayoffPlanner, Portfolio, PortfolioOutcome, StrategyComparisonReport};
