//! Avalanche versus snowball comparison and recommendation

use serde::{Deserialize, Serialize};

use crate::config::RecommendationThresholds;
use super::strategy_result::StrategyResult;

/// Strategy suggested to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedStrategy {
    Avalanche,
    Snowball,
    Either,
}

impl RecommendedStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendedStrategy::Avalanche => "avalanche",
            RecommendedStrategy::Snowball => "snowball",
            RecommendedStrategy::Either => "either",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub strategy: RecommendedStrategy,
    pub reason: String,
    /// Interest saved by following the recommendation, never negative
    pub savings: f64,
}

/// Deltas between the two strategies over the same debts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyComparison {
    /// Absolute interest difference
    pub interest_difference: f64,
    /// Absolute month difference
    pub time_difference: u32,
    /// Snowball interest minus avalanche interest
    pub savings_with_avalanche: f64,
    /// Avalanche months minus snowball months
    pub time_with_snowball: i64,
    /// Cheaper strategy, avalanche on ties
    pub best_for_interest: RecommendedStrategy,
    /// Faster strategy, avalanche on ties
    pub best_for_time: RecommendedStrategy,
}

/// Interest and month deltas, both signed so that positive favors avalanche
fn deltas(avalanche: &StrategyResult, snowball: &StrategyResult) -> (f64, i64) {
    let interest_savings = snowball.total_interest - avalanche.total_interest;
    let time_difference = snowball.total_months as i64 - avalanche.total_months as i64;
    (interest_savings, time_difference)
}

/// Compare two strategy results
pub fn compare(avalanche: &StrategyResult, snowball: &StrategyResult) -> StrategyComparison {
    let (interest_savings, time_difference) = deltas(avalanche, snowball);

    StrategyComparison {
        interest_difference: interest_savings.abs(),
        time_difference: time_difference.unsigned_abs() as u32,
        savings_with_avalanche: interest_savings,
        time_with_snowball: -time_difference,
        best_for_interest: if avalanche.total_interest <= snowball.total_interest {
            RecommendedStrategy::Avalanche
        } else {
            RecommendedStrategy::Snowball
        },
        best_for_time: if avalanche.total_months <= snowball.total_months {
            RecommendedStrategy::Avalanche
        } else {
            RecommendedStrategy::Snowball
        },
    }
}

/// Decide between strategies from their interest and month deltas.
///
/// Rules are checked in order and the first match wins:
/// similar results, large interest savings, large time savings, then
/// snowball for motivation.
pub fn recommend_from_deltas(
    interest_savings: f64,
    time_difference: i64,
    thresholds: &RecommendationThresholds,
) -> Recommendation {
    if interest_savings.abs() < thresholds.similar_interest
        && time_difference.abs() <= thresholds.similar_months
    {
        Recommendation {
            strategy: RecommendedStrategy::Either,
            reason: "Both strategies are similar in cost and time".to_string(),
            savings: interest_savings.abs(),
        }
    } else if interest_savings > thresholds.significant_interest {
        Recommendation {
            strategy: RecommendedStrategy::Avalanche,
            reason: "Saves significantly more in interest costs".to_string(),
            savings: interest_savings,
        }
    } else if time_difference > thresholds.significant_months {
        Recommendation {
            strategy: RecommendedStrategy::Avalanche,
            reason: "Pays off debt much faster".to_string(),
            savings: interest_savings.max(0.0),
        }
    } else {
        Recommendation {
            strategy: RecommendedStrategy::Snowball,
            reason: "Provides better psychological motivation with quicker wins".to_string(),
            savings: interest_savings.abs(),
        }
    }
}

/// Recommend a strategy, or none when there is nothing to pay off
pub fn recommend(
    avalanche: &StrategyResult,
    snowball: &StrategyResult,
    thresholds: &RecommendationThresholds,
) -> Option<Recommendation> {
    if avalanche.debts.is_empty() {
        return None;
    }

    let (interest_savings, time_difference) = deltas(avalanche, snowball);
    Some(recommend_from_deltas(interest_savings, time_difference, thresholds))
}

/// One-line summary of a recommendation, empty when there is none
pub fn recommendation_text(recommendation: Option<&Recommendation>) -> String {
    match recommendation {
        None => String::new(),
        Some(rec) if rec.strategy == RecommendedStrategy::Either => {
            format!("Either strategy works well. {}.", rec.reason)
        }
        Some(rec) => {
            let name = match rec.strategy {
                RecommendedStrategy::Avalanche => "Debt Avalanche",
                _ => "Debt Snowball",
            };
            if rec.savings > 0.0 {
                format!(
                    "We recommend the {} strategy. {} (saves {:.2} in interest).",
                    name, rec.reason, rec.savings
                )
            } else {
                format!("We recommend the {} strategy. {}.", name, rec.reason)
            }
        }
    }
}
