//! Payoff strategies and the ordering each one imposes on a portfolio

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_CUSTOM_PRIORITY;
use crate::debt::Debt;

/// Rule for choosing which debt receives the extra payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Highest interest rate first
    Avalanche,
    /// Lowest balance first
    Snowball,
    /// Highest user-assigned priority first
    Custom,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Avalanche => "avalanche",
            Strategy::Snowball => "snowball",
            Strategy::Custom => "custom",
        }
    }

    /// Human-readable strategy name
    pub fn display_name(&self) -> &'static str {
        match self {
            Strategy::Avalanche => "Debt Avalanche",
            Strategy::Snowball => "Debt Snowball",
            Strategy::Custom => "Custom Priority",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Avalanche => {
                "Pay minimums on all debts, then put extra money toward the debt with the highest interest rate"
            }
            Strategy::Snowball => {
                "Pay minimums on all debts, then put extra money toward the debt with the lowest balance"
            }
            Strategy::Custom => {
                "Pay minimums on all debts, then put extra money toward debts in your own priority order"
            }
        }
    }

    /// Order debts by this strategy's priority. Sorting is stable, so ties
    /// keep their input order. The input is left untouched.
    pub fn order(&self, debts: &[Debt]) -> Vec<Debt> {
        let mut ordered = debts.to_vec();
        match self {
            Strategy::Avalanche => {
                ordered.sort_by(|a, b| b.annual_rate().total_cmp(&a.annual_rate()));
            }
            Strategy::Snowball => {
                ordered.sort_by(|a, b| a.current_balance.total_cmp(&b.current_balance));
            }
            Strategy::Custom => {
                ordered.sort_by_key(|debt| {
                    std::cmp::Reverse(debt.priority.unwrap_or(DEFAULT_CUSTOM_PRIORITY))
                });
            }
        }
        ordered
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avalanche" => Ok(Strategy::Avalanche),
            "snowball" => Ok(Strategy::Snowball),
            "custom" => Ok(Strategy::Custom),
            other => Err(format!(
                "unknown strategy '{}' (expected avalanche, snowball or custom)",
                other
            )),
        }
    }
}
