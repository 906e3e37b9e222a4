//! Output structures for payoff simulations

use serde::{Deserialize, Serialize};

/// A debt reaching zero during the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffEvent {
    pub debt_id: String,
    pub debt_name: String,
    /// Month the balance first fell within the payoff epsilon (1-indexed)
    pub month_paid_off: u32,
    pub original_balance: f64,
}

/// Portfolio totals for one simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    pub month: u32,
    /// Interest accrued this month
    pub total_interest: f64,
    /// Principal repaid this month, minimum plus extra
    pub total_principal: f64,
    /// Sum of balances at month end
    pub remaining_debt: f64,
    pub debts_remaining: usize,
}

/// Complete, untruncated simulation output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub total_months: u32,
    pub total_interest: f64,
    pub payoff_order: Vec<PayoffEvent>,
    pub monthly_breakdown: Vec<MonthlySnapshot>,
    /// True when the month ceiling stopped the run with debts outstanding
    pub reached_month_ceiling: bool,
}

impl SimulationResult {
    pub fn empty() -> Self {
        Self {
            total_months: 0,
            total_interest: 0.0,
            payoff_order: Vec::new(),
            monthly_breakdown: Vec::new(),
            reached_month_ceiling: false,
        }
    }

    /// Month a given debt was paid off, if it was
    pub fn payoff_month(&self, debt_id: &str) -> Option<u32> {
        self.payoff_order
            .iter()
            .find(|event| event.debt_id == debt_id)
            .map(|event| event.month_paid_off)
    }

    /// Total principal repaid across all months
    pub fn total_principal(&self) -> f64 {
        self.monthly_breakdown.iter().map(|s| s.total_principal).sum()
    }

    /// Leading snapshots for display
    pub fn breakdown_head(&self, months: usize) -> Vec<MonthlySnapshot> {
        self.monthly_breakdown.iter().take(months).cloned().collect()
    }
}
