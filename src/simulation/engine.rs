//! Month-by-month portfolio payoff simulation
//!
//! Each month every open debt accrues interest and receives its minimum
//! payment. The shared extra payment then goes to the first open debt in
//! priority order, which is the only place the chosen strategy matters.

use crate::config::{PayoffConfig, MAX_SIMULATION_MONTHS, PAYOFF_EPSILON};
use crate::debt::Debt;
use super::results::{MonthlySnapshot, PayoffEvent, SimulationResult};
use super::state::{DebtState, SimulationState};

/// Payoff simulator
#[derive(Debug, Clone, Copy)]
pub struct PayoffSimulator {
    max_months: u32,
    payoff_epsilon: f64,
}

impl Default for PayoffSimulator {
    fn default() -> Self {
        Self {
            max_months: MAX_SIMULATION_MONTHS,
            payoff_epsilon: PAYOFF_EPSILON,
        }
    }
}

impl PayoffSimulator {
    pub fn new(max_months: u32, payoff_epsilon: f64) -> Self {
        Self { max_months, payoff_epsilon }
    }

    pub fn from_config(config: &PayoffConfig) -> Self {
        Self::new(config.max_months, config.payoff_epsilon)
    }

    /// Simulate paying off `ordered` debts (already in strategy priority
    /// order) with `extra_payment` on top of the minimums each month.
    pub fn simulate(&self, ordered: &[Debt], extra_payment: f64) -> SimulationResult {
        if ordered.is_empty() {
            return SimulationResult::empty();
        }

        log::debug!(
            "Simulating {} debts with extra payment {:.2}",
            ordered.len(),
            extra_payment
        );

        let mut state = SimulationState::from_debts(ordered);
        let mut payoff_order = Vec::with_capacity(ordered.len());
        let mut monthly_breakdown = Vec::new();

        while !state.all_paid_off() && state.month < self.max_months {
            let (next, snapshot, events) = self.step(state, extra_payment);
            state = next;
            payoff_order.extend(events);
            monthly_breakdown.push(snapshot);
        }

        let reached_month_ceiling = !state.all_paid_off();
        if reached_month_ceiling {
            log::warn!(
                "Simulation stopped at the {}-month ceiling with {} debts outstanding ({:.2} remaining)",
                self.max_months,
                state.debts_remaining(),
                state.remaining_debt()
            );
        }

        log::debug!(
            "Simulation finished after {} months, total interest {:.2}",
            state.month,
            state.total_interest
        );

        SimulationResult {
            total_months: state.month,
            total_interest: state.total_interest,
            payoff_order,
            monthly_breakdown,
            reached_month_ceiling,
        }
    }

    /// Advance one month, returning the new state, its snapshot and any
    /// debts paid off during the month
    fn step(
        &self,
        mut state: SimulationState,
        extra_payment: f64,
    ) -> (SimulationState, MonthlySnapshot, Vec<PayoffEvent>) {
        state.month += 1;
        let month = state.month;

        let mut month_interest = 0.0;
        let mut month_principal = 0.0;
        let mut events = Vec::new();

        // Interest and minimum payments
        for debt in state.debts.iter_mut().filter(|d| !d.is_paid_off) {
            let interest = debt.remaining_balance * debt.monthly_rate;
            let payment = debt
                .minimum_payment
                .min(debt.remaining_balance + interest);
            let principal = (payment - interest).max(0.0);

            debt.remaining_balance = (debt.remaining_balance - principal).max(0.0);
            month_interest += interest;
            month_principal += principal;

            if let Some(event) = self.check_payoff(debt, month) {
                events.push(event);
            }
        }

        // Extra payment to the highest-priority open debt
        if extra_payment > 0.0 {
            if let Some(index) = state.first_unpaid() {
                let target = &mut state.debts[index];
                let extra = extra_payment.min(target.remaining_balance);
                target.remaining_balance -= extra;
                month_principal += extra;

                if let Some(event) = self.check_payoff(target, month) {
                    events.push(event);
                }
            }
        }

        state.total_interest += month_interest;

        let snapshot = MonthlySnapshot {
            month,
            total_interest: month_interest,
            total_principal: month_principal,
            remaining_debt: state.remaining_debt(),
            debts_remaining: state.debts_remaining(),
        };

        (state, snapshot, events)
    }

    /// Mark a debt paid off once its balance is within epsilon of zero.
    /// Returns an event only on the transition, never twice per debt.
    fn check_payoff(&self, debt: &mut DebtState, month: u32) -> Option<PayoffEvent> {
        if debt.is_paid_off || debt.remaining_balance > self.payoff_epsilon {
            return None;
        }

        debt.is_paid_off = true;
        log::trace!("{} paid off in month {}", debt.debt_id, month);

        Some(PayoffEvent {
            debt_id: debt.debt_id.clone(),
            debt_name: debt.debt_name.clone(),
            month_paid_off: month,
            original_balance: debt.original_balance,
        })
    }
}
