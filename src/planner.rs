//! Public entry points for payoff planning
//!
//! Holds one configuration and runs any number of independent analyses
//! against it. Every call validates its inputs, filters to active debts,
//! and returns freshly built values; nothing is cached between calls.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::{
    build_strategy_result, compare, generate_insights, recommend, recommendation_text, Insight,
    PaymentImpactAnalyzer, PaymentImpactScenario, Recommendation, StrategyComparison,
    StrategyResult,
};
use crate::config::PayoffConfig;
use crate::debt::{filter_active_debts, validate_debts, validate_extra_payment, Debt};
use crate::error::ValidationError;
use crate::simulation::PayoffSimulator;
use crate::strategy::Strategy;

/// Avalanche and snowball side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyComparisonReport {
    pub extra_payment: f64,
    pub avalanche: StrategyResult,
    pub snowball: StrategyResult,
    pub recommendation: Option<Recommendation>,
    pub comparison: StrategyComparison,
}

/// Everything the planner knows about one portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtAnalysis {
    pub has_debts: bool,
    pub avalanche: StrategyResult,
    pub snowball: StrategyResult,
    pub recommendation: Option<Recommendation>,
    pub recommendation_text: String,
    pub comparison: StrategyComparison,
    pub payment_impact: Vec<PaymentImpactScenario>,
    pub insights: Vec<Insight>,
}

/// A household's debts and chosen extra payment, for batch runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: String,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub extra_payment: f64,
}

/// Outcome of one portfolio in a batch
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioOutcome {
    pub portfolio_id: String,
    pub analysis: Result<DebtAnalysis, ValidationError>,
}

/// Payoff planner
///
/// # Example
/// ```ignore
/// let planner = PayoffPlanner::default();
/// let report = planner.compare_strategies(&debts, 100.0)?;
/// println!("{:?}", report.recommendation);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayoffPlanner {
    config: PayoffConfig,
}

impl PayoffPlanner {
    pub fn new(config: PayoffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PayoffConfig {
        &self.config
    }

    fn prepare(&self, debts: &[Debt], extra_payment: f64) -> Result<Vec<Debt>, ValidationError> {
        validate_debts(debts)?;
        validate_extra_payment(extra_payment)?;
        Ok(filter_active_debts(debts))
    }

    /// Run a single strategy
    pub fn compute_strategy(
        &self,
        debts: &[Debt],
        extra_payment: f64,
        strategy: Strategy,
    ) -> Result<StrategyResult, ValidationError> {
        let active = self.prepare(debts, extra_payment)?;
        Ok(build_strategy_result(&active, strategy, extra_payment, &self.config))
    }

    fn compare_active(&self, active: &[Debt], extra_payment: f64) -> StrategyComparisonReport {
        let avalanche = build_strategy_result(active, Strategy::Avalanche, extra_payment, &self.config);
        let snowball = build_strategy_result(active, Strategy::Snowball, extra_payment, &self.config);
        let recommendation = recommend(&avalanche, &snowball, &self.config.recommendation);
        let comparison = compare(&avalanche, &snowball);

        StrategyComparisonReport {
            extra_payment,
            avalanche,
            snowball,
            recommendation,
            comparison,
        }
    }

    /// Run avalanche and snowball and recommend one
    pub fn compare_strategies(
        &self,
        debts: &[Debt],
        extra_payment: f64,
    ) -> Result<StrategyComparisonReport, ValidationError> {
        let active = self.prepare(debts, extra_payment)?;
        Ok(self.compare_active(&active, extra_payment))
    }

    /// Sensitivity of payoff to each extra payment amount
    pub fn analyze_payment_impact(
        &self,
        debts: &[Debt],
        strategy: Strategy,
        amounts: &[f64],
    ) -> Result<Vec<PaymentImpactScenario>, ValidationError> {
        amounts.iter().try_for_each(|&amount| validate_extra_payment(amount))?;
        let active = self.prepare(debts, 0.0)?;
        Ok(self.impact_analyzer().analyze(&active, strategy, amounts))
    }

    /// Warnings and tips about the active debts
    pub fn generate_insights(&self, debts: &[Debt]) -> Result<Vec<Insight>, ValidationError> {
        let active = self.prepare(debts, 0.0)?;
        Ok(generate_insights(&active, &self.config.insights))
    }

    /// Full analysis: both strategies, recommendation, payment impact over
    /// the configured amounts, and insights
    pub fn analyze(&self, debts: &[Debt], extra_payment: f64) -> Result<DebtAnalysis, ValidationError> {
        self.config
            .impact_amounts
            .iter()
            .try_for_each(|&amount| validate_extra_payment(amount))?;
        let active = self.prepare(debts, extra_payment)?;

        let report = self.compare_active(&active, extra_payment);
        let payment_impact =
            self.impact_analyzer()
                .analyze(&active, Strategy::Avalanche, &self.config.impact_amounts);
        let insights = generate_insights(&active, &self.config.insights);

        Ok(DebtAnalysis {
            has_debts: !active.is_empty(),
            recommendation_text: recommendation_text(report.recommendation.as_ref()),
            avalanche: report.avalanche,
            snowball: report.snowball,
            recommendation: report.recommendation,
            comparison: report.comparison,
            payment_impact,
            insights,
        })
    }

    /// Analyze many independent portfolios in parallel. Results keep input
    /// order and each portfolio validates on its own.
    pub fn analyze_batch(&self, portfolios: &[Portfolio]) -> Vec<PortfolioOutcome> {
        log::info!("Analyzing {} portfolios", portfolios.len());

        portfolios
            .par_iter()
            .map(|portfolio| PortfolioOutcome {
                portfolio_id: portfolio.id.clone(),
                analysis: self.analyze(&portfolio.debts, portfolio.extra_payment),
            })
            .collect()
    }

    fn impact_analyzer(&self) -> PaymentImpactAnalyzer {
        PaymentImpactAnalyzer::new(PayoffSimulator::from_config(&self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::Payoff;
    use crate::analysis::{InsightKind, RecommendedStrategy};
    use crate::debt::{DebtStatus, DebtType};

    fn household() -> Vec<Debt> {
        vec![
            Debt::new("debt1", "Credit Card A", DebtType::CreditCard, 5000.0, 150.0, 18.99),
            Debt::new("debt2", "Credit Card B", DebtType::CreditCard, 2000.0, 60.0, 15.5),
            Debt::new("debt3", "Personal Loan", DebtType::PersonalLoan, 8000.0, 200.0, 10.0),
        ]
    }

    fn ids(result: &StrategyResult) -> Vec<&str> {
        result.debts.iter().map(|d| d.debt.id.as_str()).collect()
    }

    #[test]
    fn test_scenario_a_zero_interest() {
        let debts = vec![Debt::new("1", "Zero Interest Loan", DebtType::PersonalLoan, 1000.0, 100.0, 0.0)];
        let result = PayoffPlanner::default()
            .compute_strategy(&debts, 0.0, Strategy::Avalanche)
            .unwrap();

        assert_eq!(result.debts[0].months_to_payoff, Payoff::Months(10));
        assert_eq!(result.debts[0].total_interest_cost, 0.0);
        assert_eq!(result.total_months, 10);
    }

    #[test]
    fn test_scenario_b_impossible_payoff() {
        let debts = vec![Debt::new("1", "Impossible Debt", DebtType::CreditCard, 10_000.0, 10.0, 25.0)];
        let result = PayoffPlanner::default()
            .compute_strategy(&debts, 0.0, Strategy::Avalanche)
            .unwrap();

        assert_eq!(result.debts[0].months_to_payoff, Payoff::Never);
        assert_eq!(result.debts[0].months_to_payoff.sentinel_months(), 999);
        assert_eq!(result.total_months, 600);
        assert!(result.reached_month_ceiling);
        assert!(result.payoff_order.is_empty());
    }

    #[test]
    fn test_scenario_c_orderings() {
        let report = PayoffPlanner::default().compare_strategies(&household(), 100.0).unwrap();
        assert_eq!(ids(&report.avalanche), vec!["debt1", "debt2", "debt3"]);
        assert_eq!(ids(&report.snowball), vec!["debt2", "debt1", "debt3"]);
    }

    #[test]
    fn test_scenario_d_empty_portfolio() {
        let analysis = PayoffPlanner::default().analyze(&[], 100.0).unwrap();

        assert!(!analysis.has_debts);
        assert!(analysis.avalanche.debts.is_empty());
        assert!(analysis.snowball.debts.is_empty());
        assert_eq!(analysis.avalanche.total_months, 0);
        assert_eq!(analysis.recommendation, None);
        assert_eq!(analysis.recommendation_text, "");
        assert!(analysis.insights.is_empty());
        assert!(analysis.payment_impact.is_empty());
    }

    #[test]
    fn test_scenario_e_insights() {
        let debts = vec![
            Debt::new("1", "Card 1", DebtType::CreditCard, 4000.0, 80.0, 24.0),
            Debt::new("2", "Card 2", DebtType::CreditCard, 2500.0, 50.0, 12.0),
            Debt::new("3", "Loan", DebtType::PersonalLoan, 6000.0, 120.0, 9.0),
        ];
        let insights = PayoffPlanner::default().generate_insights(&debts).unwrap();

        assert_eq!(insights.iter().filter(|i| i.kind == InsightKind::Warning).count(), 1);
        assert_eq!(insights.iter().filter(|i| i.kind == InsightKind::Tip).count(), 0);

        let mut with_third_card = debts.clone();
        with_third_card.push(Debt::new("4", "Card 3", DebtType::CreditCard, 900.0, 30.0, 14.0));
        let insights = PayoffPlanner::default().generate_insights(&with_third_card).unwrap();
        assert_eq!(insights.iter().filter(|i| i.kind == InsightKind::Tip).count(), 1);
    }

    #[test]
    fn test_inactive_and_zero_balance_excluded() {
        let mut debts = household();
        debts.push(
            Debt::new("debt4", "Paid Off Loan", DebtType::PersonalLoan, 0.0, 0.0, 0.0)
                .with_status(DebtStatus::PaidOff),
        );
        debts.push(Debt::new("debt5", "Zero Balance Card", DebtType::CreditCard, 0.0, 0.0, 12.0));

        let analysis = PayoffPlanner::default().analyze(&debts, 100.0).unwrap();
        assert_eq!(analysis.avalanche.debts.len(), 3);
        assert_eq!(analysis.snowball.debts.len(), 3);
        assert!(analysis.has_debts);
    }

    #[test]
    fn test_inactive_debts_never_in_insights() {
        let debts = vec![
            Debt::new("a", "Loan", DebtType::PersonalLoan, 5000.0, 100.0, 8.0),
            Debt::new("b", "Old Card", DebtType::CreditCard, 3000.0, 90.0, 29.0)
                .with_status(DebtStatus::Closed),
        ];
        let insights = PayoffPlanner::default().generate_insights(&debts).unwrap();
        assert!(insights.iter().all(|i| i.kind != InsightKind::Warning));
    }

    #[test]
    fn test_full_analysis() {
        let analysis = PayoffPlanner::default().analyze(&household(), 100.0).unwrap();

        assert!(analysis.has_debts);
        assert!(analysis.avalanche.total_interest > 0.0);
        assert_eq!(analysis.payment_impact.len(), 4);

        let rec = analysis.recommendation.as_ref().unwrap();
        assert!(!rec.reason.is_empty());
        assert!(rec.savings >= 0.0);
        assert!(!analysis.recommendation_text.is_empty());
        assert_eq!(
            analysis.comparison.savings_with_avalanche,
            analysis.snowball.total_interest - analysis.avalanche.total_interest
        );
    }

    #[test]
    fn test_similar_debts_recommendation() {
        let debts = vec![
            Debt::new("1", "Card A", DebtType::CreditCard, 1000.0, 100.0, 10.0),
            Debt::new("2", "Card B", DebtType::CreditCard, 1100.0, 105.0, 10.5),
        ];
        let report = PayoffPlanner::default().compare_strategies(&debts, 100.0).unwrap();
        let rec = report.recommendation.unwrap();
        assert!(matches!(rec.strategy, RecommendedStrategy::Either | RecommendedStrategy::Snowball));
    }

    #[test]
    fn test_idempotent() {
        let planner = PayoffPlanner::default();
        let first = planner.compute_strategy(&household(), 125.0, Strategy::Snowball).unwrap();
        let second = planner.compute_strategy(&household(), 125.0, Strategy::Snowball).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_strategy() {
        let debts = vec![
            Debt::new("a", "A", DebtType::Other, 3000.0, 90.0, 9.0).with_priority(2),
            Debt::new("b", "B", DebtType::Other, 1000.0, 40.0, 22.0),
            Debt::new("c", "C", DebtType::Other, 2000.0, 50.0, 12.0).with_priority(10),
        ];
        let result = PayoffPlanner::default()
            .compute_strategy(&debts, 50.0, Strategy::Custom)
            .unwrap();

        assert_eq!(ids(&result), vec!["c", "a", "b"]);
        assert_eq!(result.strategy_name, "Custom Priority");
    }

    #[test]
    fn test_missing_interest_rate() {
        let debts = vec![
            Debt::new("1", "No Rate Debt", DebtType::PersonalLoan, 1000.0, 100.0, 0.0).without_interest_rate(),
        ];
        let result = PayoffPlanner::default()
            .compute_strategy(&debts, 0.0, Strategy::Avalanche)
            .unwrap();
        assert_eq!(result.debts[0].months_to_payoff, Payoff::Months(10));
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_validation_rejects_before_simulating() {
        let planner = PayoffPlanner::default();
        let mut debts = household();
        debts.push(Debt::new("bad", "Bad", DebtType::Other, -10.0, 5.0, 5.0).with_status(DebtStatus::Closed));

        assert!(matches!(
            planner.compare_strategies(&debts, 100.0),
            Err(ValidationError::NegativeBalance { ref debt_id, .. }) if debt_id == "bad"
        ));
        assert!(matches!(
            planner.compute_strategy(&household(), -5.0, Strategy::Avalanche),
            Err(ValidationError::NegativeExtraPayment(_))
        ));
        assert!(planner
            .analyze_payment_impact(&household(), Strategy::Avalanche, &[50.0, -1.0])
            .is_err());
    }

    #[test]
    fn test_payment_impact_for_strategy() {
        let scenarios = PayoffPlanner::default()
            .analyze_payment_impact(&household(), Strategy::Snowball, &[50.0, 100.0, 200.0, 500.0])
            .unwrap();

        assert_eq!(scenarios.len(), 4);
        for scenario in &scenarios {
            assert!(scenario.extra_payment > 0.0);
            assert_eq!(scenario.selected_strategy, Strategy::Snowball);
            assert!(scenario.avalanche.time_savings >= 0);
            assert!(scenario.snowball.interest_savings >= 0.0);
        }
    }

    #[test]
    fn test_batch_keeps_order_and_isolates_errors() {
        let portfolios = vec![
            Portfolio { id: "h1".into(), debts: household(), extra_payment: 100.0 },
            Portfolio {
                id: "h2".into(),
                debts: vec![Debt::new("x", "X", DebtType::Other, 500.0, 50.0, 101.0)],
                extra_payment: 0.0,
            },
            Portfolio { id: "h3".into(), debts: Vec::new(), extra_payment: 0.0 },
        ];

        let planner = PayoffPlanner::default();
        let outcomes = planner.analyze_batch(&portfolios);

        let ids: Vec<&str> = outcomes.iter().map(|o| o.portfolio_id.as_str()).collect();
        assert_eq!(ids, vec!["h1", "h2", "h3"]);
        assert_eq!(
            outcomes[0].analysis.as_ref().unwrap(),
            &planner.analyze(&household(), 100.0).unwrap()
        );
        assert!(matches!(
            outcomes[1].analysis,
            Err(ValidationError::InterestRateOutOfRange { .. })
        ));
        assert!(!outcomes[2].analysis.as_ref().unwrap().has_debts);
    }
}
