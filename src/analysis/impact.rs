//! Sensitivity of payoff time and interest to the extra payment amount

use serde::{Deserialize, Serialize};

use crate::debt::Debt;
use crate::simulation::{PayoffSimulator, SimulationResult};
use crate::strategy::Strategy;

/// Outcome of one strategy at one extra payment amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactDetail {
    pub months_to_payoff: u32,
    pub total_interest: f64,
    /// Months saved relative to paying no extra (negative would be a regression)
    pub time_savings: i64,
    /// Interest saved relative to paying no extra
    pub interest_savings: f64,
}

/// Both strategies, plus the requested one, at a single extra payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentImpactScenario {
    pub extra_payment: f64,
    pub avalanche: ImpactDetail,
    pub snowball: ImpactDetail,
    /// Strategy the caller asked about
    pub selected_strategy: Strategy,
    pub selected: ImpactDetail,
}

/// Re-runs the simulator over a set of extra payment amounts
#[derive(Debug, Clone, Copy)]
pub struct PaymentImpactAnalyzer {
    simulator: PayoffSimulator,
}

/// Zero-extra run of one strategy, kept as the savings reference
struct Baseline {
    ordered: Vec<Debt>,
    result: SimulationResult,
}

impl PaymentImpactAnalyzer {
    pub fn new(simulator: PayoffSimulator) -> Self {
        Self { simulator }
    }

    fn baseline(&self, active: &[Debt], strategy: Strategy) -> Baseline {
        let ordered = strategy.order(active);
        let result = self.simulator.simulate(&ordered, 0.0);
        Baseline { ordered, result }
    }

    fn detail(&self, baseline: &Baseline, extra_payment: f64) -> ImpactDetail {
        let result = self.simulator.simulate(&baseline.ordered, extra_payment);

        ImpactDetail {
            months_to_payoff: result.total_months,
            total_interest: result.total_interest,
            time_savings: baseline.result.total_months as i64 - result.total_months as i64,
            interest_savings: baseline.result.total_interest - result.total_interest,
        }
    }

    /// Scenarios for each amount over `active` debts (already filtered).
    /// An empty portfolio yields no scenarios.
    pub fn analyze(
        &self,
        active: &[Debt],
        selected_strategy: Strategy,
        amounts: &[f64],
    ) -> Vec<PaymentImpactScenario> {
        if active.is_empty() {
            return Vec::new();
        }

        let avalanche = self.baseline(active, Strategy::Avalanche);
        let snowball = self.baseline(active, Strategy::Snowball);
        let custom = match selected_strategy {
            Strategy::Custom => Some(self.baseline(active, Strategy::Custom)),
            _ => None,
        };

        amounts
            .iter()
            .map(|&extra_payment| {
                let avalanche_detail = self.detail(&avalanche, extra_payment);
                let snowball_detail = self.detail(&snowball, extra_payment);
                let selected = match (&custom, selected_strategy) {
                    (Some(custom), _) => self.detail(custom, extra_payment),
                    (None, Strategy::Snowball) => snowball_detail.clone(),
                    (None, _) => avalanche_detail.clone(),
                };

                PaymentImpactScenario {
                    extra_payment,
                    avalanche: avalanche_detail,
                    snowball: snowball_detail,
                    selected_strategy,
                    selected,
                }
            })
            .collect()
    }
}

impl Default for PaymentImpactAnalyzer {
    fn default() -> Self {
        Self::new(PayoffSimulator::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_IMPACT_AMOUNTS;
    use crate::debt::DebtType;

    fn household() -> Vec<Debt> {
        vec![
            Debt::new("debt1", "Credit Card A", DebtType::CreditCard, 5000.0, 150.0, 18.99),
            Debt::new("debt2", "Credit Card B", DebtType::CreditCard, 2000.0, 60.0, 15.5),
            Debt::new("debt3", "Personal Loan", DebtType::PersonalLoan, 8000.0, 200.0, 10.0),
        ]
    }

    #[test]
    fn test_one_scenario_per_amount() {
        let scenarios = PaymentImpactAnalyzer::default().analyze(
            &household(),
            Strategy::Avalanche,
            &DEFAULT_IMPACT_AMOUNTS,
        );

        assert_eq!(scenarios.len(), 4);
        let amounts: Vec<f64> = scenarios.iter().map(|s| s.extra_payment).collect();
        assert_eq!(amounts, vec![50.0, 100.0, 200.0, 500.0]);
    }

    #[test]
    fn test_positive_extra_never_regresses() {
        let scenarios = PaymentImpactAnalyzer::default().analyze(
            &household(),
            Strategy::Snowball,
            &DEFAULT_IMPACT_AMOUNTS,
        );

        for scenario in &scenarios {
            for detail in [&scenario.avalanche, &scenario.snowball, &scenario.selected] {
                assert!(detail.time_savings >= 0, "time regressed at {}", scenario.extra_payment);
                assert!(
                    detail.interest_savings > 0.0,
                    "interest regressed at {}: {}",
                    scenario.extra_payment,
                    detail.interest_savings
                );
            }
            assert_eq!(scenario.selected, scenario.snowball);
        }
    }

    #[test]
    fn test_savings_grow_with_amount() {
        let scenarios = PaymentImpactAnalyzer::default().analyze(
            &household(),
            Strategy::Avalanche,
            &DEFAULT_IMPACT_AMOUNTS,
        );

        for pair in scenarios.windows(2) {
            assert!(pair[1].avalanche.time_savings >= pair[0].avalanche.time_savings);
            assert!(pair[1].avalanche.interest_savings >= pair[0].avalanche.interest_savings);
        }
    }

    #[test]
    fn test_zero_extra_saves_nothing() {
        let scenarios = PaymentImpactAnalyzer::default().analyze(&household(), Strategy::Avalanche, &[0.0]);
        assert_eq!(scenarios[0].avalanche.time_savings, 0);
        assert_eq!(scenarios[0].avalanche.interest_savings, 0.0);
    }

    #[test]
    fn test_custom_strategy_selected() {
        let debts = vec![
            Debt::new("a", "A", DebtType::Other, 3000.0, 90.0, 9.0),
            Debt::new("b", "B", DebtType::Other, 1000.0, 40.0, 22.0).with_priority(1),
            Debt::new("c", "C", DebtType::Other, 2000.0, 50.0, 12.0).with_priority(10),
        ];
        let scenarios = PaymentImpactAnalyzer::default().analyze(&debts, Strategy::Custom, &[100.0]);

        assert_eq!(scenarios[0].selected_strategy, Strategy::Custom);
        assert!(scenarios[0].selected.interest_savings > 0.0);
    }

    #[test]
    fn test_empty_portfolio() {
        let scenarios = PaymentImpactAnalyzer::default().analyze(&[], Strategy::Avalanche, &DEFAULT_IMPACT_AMOUNTS);
        assert!(scenarios.is_empty());
    }
}
