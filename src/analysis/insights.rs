//! Rule-based observations about a debt portfolio

use serde::{Deserialize, Serialize};

use crate::config::InsightThresholds;
use crate::debt::{Debt, DebtType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Warning,
    Info,
    Tip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
}

impl Insight {
    fn new(kind: InsightKind, title: &str, message: String) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message,
        }
    }
}

fn high_interest(debts: &[Debt], thresholds: &InsightThresholds) -> Option<Insight> {
    let count = debts
        .iter()
        .filter(|debt| debt.annual_rate() > thresholds.high_interest_rate)
        .count();
    if count == 0 {
        return None;
    }

    let noun = if count == 1 { "debt has an interest rate" } else { "debts have interest rates" };
    Some(Insight::new(
        InsightKind::Warning,
        "High Interest Debt",
        format!(
            "{} {} above {}%. Focus extra payments on these first to cut interest costs.",
            count, noun, thresholds.high_interest_rate
        ),
    ))
}

fn payment_ratio(debts: &[Debt], thresholds: &InsightThresholds) -> Option<Insight> {
    let total_balance: f64 = debts.iter().map(|d| d.current_balance).sum();
    let total_minimum: f64 = debts.iter().map(|d| d.minimum_payment).sum();
    if total_balance <= 0.0 {
        return None;
    }

    let ratio = total_minimum / total_balance;
    if ratio <= thresholds.favorable_payment_ratio {
        return None;
    }

    Some(Insight::new(
        InsightKind::Info,
        "Good Payment Ratio",
        format!(
            "Your minimum payments are {:.1}% of your total debt, which is favorable for faster payoff.",
            ratio * 100.0
        ),
    ))
}

fn consolidation(debts: &[Debt], thresholds: &InsightThresholds) -> Option<Insight> {
    let cards = debts
        .iter()
        .filter(|debt| debt.debt_type == DebtType::CreditCard)
        .count();
    if cards <= thresholds.consolidation_card_count {
        return None;
    }

    Some(Insight::new(
        InsightKind::Tip,
        "Consider Consolidation",
        format!(
            "You have {} credit cards. Consider consolidating them into a single lower-rate loan.",
            cards
        ),
    ))
}

/// Evaluate every rule over `active` debts (already filtered).
/// All matching rules fire; an empty portfolio yields no insights.
pub fn generate_insights(active: &[Debt], thresholds: &InsightThresholds) -> Vec<Insight> {
    if active.is_empty() {
        return Vec::new();
    }

    let rules: [fn(&[Debt], &InsightThresholds) -> Option<Insight>; 3] =
        [high_interest, payment_ratio, consolidation];

    rules
        .iter()
        .filter_map(|rule| rule(active, thresholds))
        .collect()
}
