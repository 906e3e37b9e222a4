//! Reduce a raw portfolio to the debts the engine simulates

use super::Debt;

/// Active debts with a positive balance, in input order
pub fn filter_active_debts(debts: &[Debt]) -> Vec<Debt> {
    debts
        .iter()
        .filter(|debt| debt.is_active() && debt.current_balance > 0.0)
        .cloned()
        .collect()
}
