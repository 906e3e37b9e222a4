//! Working state threaded through a payoff simulation

use crate::debt::Debt;

/// Per-debt working balance during a simulation
#[derive(Debug, Clone, PartialEq)]
pub struct DebtState {
    pub debt_id: String,
    pub debt_name: String,

    /// Balance at simulation start
    pub original_balance: f64,

    pub remaining_balance: f64,

    /// Monthly periodic rate as a decimal
    pub monthly_rate: f64,

    pub minimum_payment: f64,

    pub is_paid_off: bool,
}

impl DebtState {
    pub fn from_debt(debt: &Debt) -> Self {
        Self {
            debt_id: debt.id.clone(),
            debt_name: debt.name.clone(),
            original_balance: debt.current_balance,
            remaining_balance: debt.current_balance,
            monthly_rate: debt.monthly_rate(),
            minimum_payment: debt.minimum_payment,
            is_paid_off: false,
        }
    }
}

/// State of a whole portfolio at a month boundary.
///
/// Owned by a single simulation run and moved through each monthly step,
/// so no two steps ever alias the same balances.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    /// Last completed month (0 before the first step)
    pub month: u32,

    /// Debts in priority order
    pub debts: Vec<DebtState>,

    /// Interest accrued across all completed months
    pub total_interest: f64,
}

impl SimulationState {
    /// Initialize state from debts already in priority order
    pub fn from_debts(ordered: &[Debt]) -> Self {
        Self {
            month: 0,
            debts: ordered.iter().map(DebtState::from_debt).collect(),
            total_interest: 0.0,
        }
    }

    pub fn all_paid_off(&self) -> bool {
        self.debts.iter().all(|d| d.is_paid_off)
    }

    pub fn debts_remaining(&self) -> usize {
        self.debts.iter().filter(|d| !d.is_paid_off).count()
    }

    /// Sum of remaining balances, including residues on paid-off debts
    pub fn remaining_debt(&self) -> f64 {
        self.debts.iter().map(|d| d.remaining_balance).sum()
    }

    /// Index of the highest-priority debt still being paid
    pub fn first_unpaid(&self) -> Option<usize> {
        self.debts.iter().position(|d| !d.is_paid_off)
    }
}
