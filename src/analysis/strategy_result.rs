//! Per-strategy payoff plan assembled from a simulation run

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::amortization::{months_to_payoff, total_interest_cost, Payoff};
use crate::baseline::estimate_baseline;
use crate::config::PayoffConfig;
use crate::debt::Debt;
use crate::simulation::{MonthlySnapshot, PayoffEvent, PayoffSimulator};
use crate::strategy::Strategy;

/// A debt annotated with its place in the strategy's payoff order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedDebt {
    pub debt: Debt,
    /// 1-based position in the strategy order
    pub priority: u32,
    /// Payoff time on the minimum payment alone
    pub months_to_payoff: Payoff,
    /// Lifetime interest on the minimum payment alone
    pub total_interest_cost: f64,
    /// Month the debt was paid off in the strategy simulation
    pub simulated_payoff_month: Option<u32>,
}

/// Headline numbers for a strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    pub total_debt: f64,
    pub total_minimum_payment: f64,
    pub recommended_extra_payment: f64,
    /// Principal plus simulated interest
    pub total_payment: f64,
    pub estimated_payoff_date: Option<NaiveDate>,
    pub time_to_payoff_label: String,
}

/// Complete result of running one strategy over a portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    pub strategy: Strategy,
    pub strategy_name: String,
    pub strategy_description: String,
    pub debts: Vec<PrioritizedDebt>,
    pub total_interest: f64,
    pub total_months: u32,
    /// Interest avoided compared to paying only minimums
    pub interest_saved_vs_minimums: f64,
    pub payoff_order: Vec<PayoffEvent>,
    /// Leading months of the simulation
    pub monthly_breakdown: Vec<MonthlySnapshot>,
    pub reached_month_ceiling: bool,
    pub summary: StrategySummary,
}

/// Render a month count as "N years M months"
pub fn time_to_payoff_label(total_months: u32) -> String {
    format!("{} years {} months", total_months / 12, total_months % 12)
}

/// Run `strategy` over `active` debts (already filtered) and assemble the
/// full result
pub fn build_strategy_result(
    active: &[Debt],
    strategy: Strategy,
    extra_payment: f64,
    config: &PayoffConfig,
) -> StrategyResult {
    let ordered = strategy.order(active);
    let simulation = PayoffSimulator::from_config(config).simulate(&ordered, extra_payment);
    let baseline = estimate_baseline(&ordered);

    let debts: Vec<PrioritizedDebt> = ordered
        .iter()
        .enumerate()
        .map(|(index, debt)| PrioritizedDebt {
            debt: debt.clone(),
            priority: index as u32 + 1,
            months_to_payoff: months_to_payoff(debt),
            total_interest_cost: total_interest_cost(debt),
            simulated_payoff_month: simulation.payoff_month(&debt.id),
        })
        .collect();

    let total_debt: f64 = ordered.iter().map(|d| d.current_balance).sum();
    let total_minimum_payment: f64 = ordered.iter().map(|d| d.minimum_payment).sum();

    let estimated_payoff_date = match (config.as_of, simulation.total_months) {
        (Some(as_of), months) if months > 0 => as_of.checked_add_months(Months::new(months)),
        _ => None,
    };

    StrategyResult {
        strategy,
        strategy_name: strategy.display_name().to_string(),
        strategy_description: strategy.description().to_string(),
        debts,
        total_interest: simulation.total_interest,
        total_months: simulation.total_months,
        interest_saved_vs_minimums: baseline.total_interest - simulation.total_interest,
        payoff_order: simulation.payoff_order.clone(),
        monthly_breakdown: simulation.breakdown_head(config.breakdown_months),
        reached_month_ceiling: simulation.reached_month_ceiling,
        summary: StrategySummary {
            total_debt,
            total_minimum_payment,
            recommended_extra_payment: extra_payment,
            total_payment: total_debt + simulation.total_interest,
            estimated_payoff_date,
            time_to_payoff_label: time_to_payoff_label(simulation.total_months),
        },
    }
}
