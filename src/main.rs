//! Debt Payoff CLI
//!
//! Command-line interface for running payoff strategies over a debt portfolio

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use debt_payoff::analysis::{ImpactDetail, StrategyComparison};
use debt_payoff::{
    load_debts, Debt, DebtAnalysis, Insight, PaymentImpactScenario, PayoffConfig, PayoffPlanner,
    Portfolio, Recommendation, Strategy, StrategyComparisonReport, StrategyResult,
};

/// Debt payoff planning with avalanche, snowball and custom strategies
#[derive(Parser)]
#[command(name = "debt-payoff", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Planner configuration (JSON, missing fields take defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Project calendar payoff dates from this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    as_of: Option<NaiveDate>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run avalanche and snowball and recommend one
    Compare(ExtraArgs),
    /// Run a single strategy
    Strategy(StrategyArgs),
    /// Show how extra payment amounts change payoff time and interest
    Impact(ImpactArgs),
    /// Warnings and tips about the portfolio
    Insights(DebtsArgs),
    /// Full analysis: strategies, recommendation, impact and insights
    Analyze(ExtraArgs),
    /// Analyze many portfolios in parallel and write a CSV summary
    Batch(BatchArgs),
}

#[derive(Args)]
struct DebtsArgs {
    /// Debt portfolio file (.csv or .json)
    #[arg(long)]
    debts: PathBuf,
}

#[derive(Args)]
struct ExtraArgs {
    #[command(flatten)]
    input: DebtsArgs,

    /// Extra amount paid each month on top of the minimums
    #[arg(long, default_value_t = 0.0)]
    extra: f64,
}

#[derive(Args)]
struct StrategyArgs {
    #[command(flatten)]
    input: DebtsArgs,

    /// avalanche, snowball or custom
    #[arg(long, default_value = "avalanche")]
    name: Strategy,

    #[arg(long, default_value_t = 0.0)]
    extra: f64,
}

#[derive(Args)]
struct ImpactArgs {
    #[command(flatten)]
    input: DebtsArgs,

    #[arg(long, default_value = "avalanche")]
    name: Strategy,

    /// Comma-separated extra payment amounts (defaults to the configured set)
    #[arg(long, value_delimiter = ',')]
    amounts: Option<Vec<f64>>,
}

#[derive(Args)]
struct BatchArgs {
    /// JSON array of { id, debts, extra_payment } portfolios
    #[arg(long)]
    portfolios: PathBuf,

    #[arg(long, default_value = "batch_output.csv")]
    output: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => PayoffConfig::from_json_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PayoffConfig::default(),
    };
    if let Some(as_of) = cli.as_of {
        config = config.with_as_of(as_of);
    }
    let planner = PayoffPlanner::new(config);

    match &cli.command {
        Commands::Compare(args) => {
            let debts = read_debts(&args.input.debts)?;
            let report = planner
                .compare_strategies(&debts, args.extra)
                .context("Invalid debt portfolio")?;
            emit(cli.format, &report, print_comparison_report)
        }
        Commands::Strategy(args) => {
            let debts = read_debts(&args.input.debts)?;
            let result = planner
                .compute_strategy(&debts, args.extra, args.name)
                .context("Invalid debt portfolio")?;
            emit(cli.format, &result, print_strategy)
        }
        Commands::Impact(args) => {
            let debts = read_debts(&args.input.debts)?;
            let amounts = args
                .amounts
                .clone()
                .unwrap_or_else(|| planner.config().impact_amounts.clone());
            let scenarios = planner
                .analyze_payment_impact(&debts, args.name, &amounts)
                .context("Invalid debt portfolio")?;
            emit(cli.format, &scenarios, |s| print_impact(s))
        }
        Commands::Insights(args) => {
            let debts = read_debts(&args.debts)?;
            let insights = planner.generate_insights(&debts).context("Invalid debt portfolio")?;
            emit(cli.format, &insights, |i| print_insights(i))
        }
        Commands::Analyze(args) => {
            let debts = read_debts(&args.input.debts)?;
            let analysis = planner.analyze(&debts, args.extra).context("Invalid debt portfolio")?;
            emit(cli.format, &analysis, print_analysis)
        }
        Commands::Batch(args) => run_batch(&planner, args),
    }
}

fn read_debts(path: &Path) -> Result<Vec<Debt>> {
    load_debts(path).with_context(|| format!("Failed to load debts from {}", path.display()))
}

fn emit<T: Serialize + ?Sized>(format: OutputFormat, value: &T, table: impl Fn(&T)) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value).context("Failed to serialize output")?);
        }
        OutputFormat::Table => table(value),
    }
    Ok(())
}

fn print_strategy(result: &StrategyResult) {
    println!("{}", result.strategy_name);
    println!("{}", "=".repeat(result.strategy_name.len()));
    println!("{}\n", result.strategy_description);

    println!("{:>3} {:<24} {:>12} {:>10} {:>8} {:>8} {:>12} {:>9}",
        "#", "Debt", "Balance", "Minimum", "Rate%", "MinMos", "MinInterest", "PaidOff");
    println!("{}", "-".repeat(94));
    for entry in &result.debts {
        let paid_off = entry
            .simulated_payoff_month
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:>3} {:<24} {:>12.2} {:>10.2} {:>8.2} {:>8} {:>12.2} {:>9}",
            entry.priority,
            entry.debt.name,
            entry.debt.current_balance,
            entry.debt.minimum_payment,
            entry.debt.annual_rate(),
            entry.months_to_payoff.to_string(),
            entry.total_interest_cost,
            paid_off,
        );
    }

    let summary = &result.summary;
    println!("\nSummary:");
    println!("  Total Debt: ${:.2}", summary.total_debt);
    println!("  Total Minimum Payment: ${:.2}", summary.total_minimum_payment);
    println!("  Extra Payment: ${:.2}", summary.recommended_extra_payment);
    println!("  Total Interest: ${:.2}", result.total_interest);
    println!("  Total Payment: ${:.2}", summary.total_payment);
    println!("  Interest Saved vs Minimums: ${:.2}", result.interest_saved_vs_minimums);
    println!("  Time to Payoff: {} ({} months)", summary.time_to_payoff_label, result.total_months);
    if let Some(date) = summary.estimated_payoff_date {
        println!("  Estimated Payoff Date: {}", date);
    }
    if result.reached_month_ceiling {
        println!("  Stopped at the month limit with debt remaining");
    }

    if !result.payoff_order.is_empty() {
        println!("\nPayoff Order:");
        for event in &result.payoff_order {
            println!("  Month {:>3}: {} (${:.2})", event.month_paid_off, event.debt_name, event.original_balance);
        }
    }

    if !result.monthly_breakdown.is_empty() {
        println!("\n{:>5} {:>12} {:>12} {:>14} {:>6}", "Month", "Interest", "Principal", "Remaining", "Debts");
        println!("{}", "-".repeat(53));
        for row in result.monthly_breakdown.iter().take(12) {
            println!("{:>5} {:>12.2} {:>12.2} {:>14.2} {:>6}",
                row.month, row.total_interest, row.total_principal, row.remaining_debt, row.debts_remaining);
        }
        if result.monthly_breakdown.len() > 12 {
            println!("... ({} more months)", result.monthly_breakdown.len() - 12);
        }
    }
}

fn print_comparison(comparison: &StrategyComparison, recommendation: Option<&Recommendation>) {
    println!("\nComparison:");
    println!("  Interest Difference: ${:.2}", comparison.interest_difference);
    println!("  Time Difference: {} months", comparison.time_difference);
    println!("  Best for Interest: {}", comparison.best_for_interest.as_str());
    println!("  Best for Time: {}", comparison.best_for_time.as_str());

    if let Some(rec) = recommendation {
        println!("\nRecommendation: {}", rec.strategy.as_str());
        println!("  {}", rec.reason);
        println!("  Savings: ${:.2}", rec.savings);
    }
}

fn print_comparison_report(report: &StrategyComparisonReport) {
    print_strategy(&report.avalanche);
    println!();
    print_strategy(&report.snowball);
    print_comparison(&report.comparison, report.recommendation.as_ref());
}

fn print_detail(label: &str, detail: &ImpactDetail) {
    print!(" {:>10} {:>8} {:>12.2} {:>8} {:>12.2}",
        label, detail.months_to_payoff, detail.total_interest, detail.time_savings, detail.interest_savings);
}

fn print_impact(scenarios: &[PaymentImpactScenario]) {
    println!("{:>10} {:>10} {:>8} {:>12} {:>8} {:>12}",
        "Extra", "Strategy", "Months", "Interest", "MosSaved", "IntSaved");
    println!("{}", "-".repeat(65));
    for scenario in scenarios {
        for (label, detail) in [
            ("avalanche", &scenario.avalanche),
            ("snowball", &scenario.snowball),
            (scenario.selected_strategy.as_str(), &scenario.selected),
        ] {
            print!("{:>10.2}", scenario.extra_payment);
            print_detail(label, detail);
            println!();
        }
    }
}

fn print_insights(insights: &[Insight]) {
    if insights.is_empty() {
        println!("No insights for this portfolio");
    }
    for insight in insights {
        println!("[{:?}] {}", insight.kind, insight.title);
        println!("  {}", insight.message);
    }
}

fn print_analysis(analysis: &DebtAnalysis) {
    if !analysis.has_debts {
        println!("No active debts");
        return;
    }
    print_strategy(&analysis.avalanche);
    println!();
    print_strategy(&analysis.snowball);
    print_comparison(&analysis.comparison, analysis.recommendation.as_ref());
    println!("\n{}", analysis.recommendation_text);

    println!("\nPayment Impact:");
    print_impact(&analysis.payment_impact);

    println!("\nInsights:");
    print_insights(&analysis.insights);
}

/// One CSV line per analyzed portfolio
#[derive(Serialize)]
struct BatchRow {
    portfolio_id: String,
    status: String,
    avalanche_months: Option<u32>,
    avalanche_interest: Option<f64>,
    snowball_months: Option<u32>,
    snowball_interest: Option<f64>,
    recommended: Option<String>,
    savings: Option<f64>,
}

fn run_batch(planner: &PayoffPlanner, args: &BatchArgs) -> Result<()> {
    let start = Instant::now();
    println!("Loading portfolios from {}...", args.portfolios.display());

    let file = File::open(&args.portfolios)
        .with_context(|| format!("Failed to open {}", args.portfolios.display()))?;
    let portfolios: Vec<Portfolio> =
        serde_json::from_reader(BufReader::new(file)).context("Failed to parse portfolios")?;
    println!("Loaded {} portfolios in {:?}", portfolios.len(), start.elapsed());

    let run_start = Instant::now();
    let outcomes = planner.analyze_batch(&portfolios);
    println!("Analysis complete in {:?}", run_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let mut failures = 0;
    for outcome in outcomes {
        let row = match outcome.analysis {
            Ok(analysis) => BatchRow {
                portfolio_id: outcome.portfolio_id,
                status: "ok".to_string(),
                avalanche_months: Some(analysis.avalanche.total_months),
                avalanche_interest: Some(analysis.avalanche.total_interest),
                snowball_months: Some(analysis.snowball.total_months),
                snowball_interest: Some(analysis.snowball.total_interest),
                recommended: analysis.recommendation.as_ref().map(|r| r.strategy.as_str().to_string()),
                savings: analysis.recommendation.as_ref().map(|r| r.savings),
            },
            Err(err) => {
                failures += 1;
                log::warn!("Portfolio {} rejected: {}", outcome.portfolio_id, err);
                BatchRow {
                    portfolio_id: outcome.portfolio_id,
                    status: err.to_string(),
                    avalanche_months: None,
                    avalanche_interest: None,
                    snowball_months: None,
                    snowball_interest: None,
                    recommended: None,
                    savings: None,
                }
            }
        };
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());
    println!("  Portfolios: {}", portfolios.len());
    println!("  Rejected: {}", failures);
    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
