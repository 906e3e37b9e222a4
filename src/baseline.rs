//! Minimum-payments-only baseline used as the savings anchor
//!
//! Every debt is amortized independently on its own minimum payment, with
//! no extra payment and no prioritization between debts.

use serde::{Deserialize, Serialize};

use crate::amortization::{interest_cost, payoff_months, Payoff};
use crate::debt::Debt;

/// Aggregate payoff time and interest when only minimums are paid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineEstimate {
    /// Longest payoff across all debts
    pub total_months: Payoff,
    pub total_interest: f64,
}

impl BaselineEstimate {
    pub fn empty() -> Self {
        Self {
            total_months: Payoff::Months(0),
            total_interest: 0.0,
        }
    }
}

/// Estimate the baseline for a set of debts.
///
/// Debts without a balance, a minimum payment or a nonzero interest rate
/// are skipped and contribute nothing.
pub fn estimate_baseline(debts: &[Debt]) -> BaselineEstimate {
    debts
        .iter()
        .filter_map(|debt| {
            let rate = debt.interest_rate.filter(|&rate| rate > 0.0)?;
            if debt.current_balance <= 0.0 || debt.minimum_payment <= 0.0 {
                return None;
            }
            Some((
                payoff_months(debt.current_balance, debt.minimum_payment, rate),
                interest_cost(debt.current_balance, debt.minimum_payment, rate),
            ))
        })
        .fold(BaselineEstimate::empty(), |total, (months, interest)| {
            if months.is_never() {
                log::warn!("Debt never pays off on its minimum payment; baseline interest is a worst-case estimate");
            }
            BaselineEstimate {
                total_months: total.total_months.max(months),
                total_interest: total.total_interest + interest.max(0.0),
            }
        })
}
