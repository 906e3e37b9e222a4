//! Engine constants and run configuration
//!
//! Every threshold used by the simulator, the recommendation table and the
//! insight rules lives here so each can be audited and overridden.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Hard ceiling on simulated months (50 years)
pub const MAX_SIMULATION_MONTHS: u32 = 600;

/// A balance at or below this amount counts as paid off
pub const PAYOFF_EPSILON: f64 = 0.01;

/// Month count reported to external consumers for a debt that never pays off
pub const IMPOSSIBLE_PAYOFF_MONTHS: u32 = 999;

/// Number of monthly snapshots kept on a strategy result
pub const BREAKDOWN_DISPLAY_MONTHS: usize = 60;

/// Priority assumed for custom ordering when a debt carries none
pub const DEFAULT_CUSTOM_PRIORITY: i32 = 1;

/// Candidate extra payments for the sensitivity table
pub const DEFAULT_IMPACT_AMOUNTS: [f64; 4] = [50.0, 100.0, 200.0, 500.0];

pub const SIMILAR_INTEREST_THRESHOLD: f64 = 100.0;
pub const SIMILAR_TIME_THRESHOLD_MONTHS: i64 = 2;
pub const SIGNIFICANT_INTEREST_SAVINGS: f64 = 500.0;
pub const SIGNIFICANT_TIME_SAVINGS_MONTHS: i64 = 6;

pub const HIGH_INTEREST_RATE_THRESHOLD: f64 = 15.0;
pub const FAVORABLE_PAYMENT_RATIO: f64 = 0.05;
pub const CREDIT_CARD_CONSOLIDATION_COUNT: usize = 2;

/// Decision thresholds for the avalanche/snowball recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationThresholds {
    /// Interest difference below which strategies count as similar
    pub similar_interest: f64,
    /// Month difference at or below which strategies count as similar
    pub similar_months: i64,
    /// Interest saved by avalanche that makes it the clear winner
    pub significant_interest: f64,
    /// Months saved by avalanche that makes it the clear winner
    pub significant_months: i64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            similar_interest: SIMILAR_INTEREST_THRESHOLD,
            similar_months: SIMILAR_TIME_THRESHOLD_MONTHS,
            significant_interest: SIGNIFICANT_INTEREST_SAVINGS,
            significant_months: SIGNIFICANT_TIME_SAVINGS_MONTHS,
        }
    }
}

/// Trigger levels for portfolio insights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightThresholds {
    /// Annual rate (percent) above which a debt is flagged as high interest
    pub high_interest_rate: f64,
    /// Minimum payments / total balance ratio considered favorable
    pub favorable_payment_ratio: f64,
    /// Credit card count that must be exceeded before suggesting consolidation
    pub consolidation_card_count: usize,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            high_interest_rate: HIGH_INTEREST_RATE_THRESHOLD,
            favorable_payment_ratio: FAVORABLE_PAYMENT_RATIO,
            consolidation_card_count: CREDIT_CARD_CONSOLIDATION_COUNT,
        }
    }
}

/// Configuration for a payoff planning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoffConfig {
    /// Simulation stops after this many months even if debts remain
    pub max_months: u32,

    /// Payoff threshold for remaining balances
    pub payoff_epsilon: f64,

    /// Snapshots kept on each strategy result
    pub breakdown_months: usize,

    /// Extra payments tried by the payment impact analysis
    pub impact_amounts: Vec<f64>,

    /// Start date used to project calendar payoff dates (none = no dates)
    pub as_of: Option<NaiveDate>,

    pub recommendation: RecommendationThresholds,

    pub insights: InsightThresholds,
}

impl Default for PayoffConfig {
    fn default() -> Self {
        Self {
            max_months: MAX_SIMULATION_MONTHS,
            payoff_epsilon: PAYOFF_EPSILON,
            breakdown_months: BREAKDOWN_DISPLAY_MONTHS,
            impact_amounts: DEFAULT_IMPACT_AMOUNTS.to_vec(),
            as_of: None,
            recommendation: RecommendationThresholds::default(),
            insights: InsightThresholds::default(),
        }
    }
}

impl PayoffConfig {
    /// Load a config from a JSON file; missing fields take their defaults
    pub fn from_json_path(path: &Path) -> Result<Self, LoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// Parse and validate a JSON config
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, LoadError> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the simulator cannot honor
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.max_months == 0 {
            return Err(LoadError::InvalidConfig(
                "max_months must be at least 1".to_string(),
            ));
        }
        if !(self.payoff_epsilon.is_finite() && self.payoff_epsilon >= 0.0) {
            return Err(LoadError::InvalidConfig(format!(
                "payoff_epsilon must be a non-negative finite amount, got {}",
                self.payoff_epsilon
            )));
        }
        if let Some(amount) = self
            .impact_amounts
            .iter()
            .find(|amount| !(amount.is_finite() && **amount >= 0.0))
        {
            return Err(LoadError::InvalidConfig(format!(
                "impact amounts must be non-negative finite amounts, got {}",
                amount
            )));
        }
        Ok(())
    }

    /// Copy of this config with payoff dates projected from `as_of`
    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }
}
