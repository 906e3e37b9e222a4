//! Closed-form payoff math for a single debt in isolation
//!
//! Months to payoff under a fixed payment `P` on balance `B` at monthly
//! rate `r` follow the standard amortization identity
//!
//! ```text
//! n = ceil( ln(1 + B*r / (P - B*r)) / ln(1 + r) )
//! ```
//!
//! which only has a solution when the payment exceeds the interest that
//! accrues in the first month. Otherwise the balance grows without bound
//! and the debt is reported as [`Payoff::Never`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::IMPOSSIBLE_PAYOFF_MONTHS;
use crate::debt::Debt;

/// Time needed to retire a debt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Payoff {
    /// Paid off after this many whole months
    Months(u32),
    /// Payment never exceeds accruing interest
    Never,
}

impl Payoff {
    /// Month count, or `None` when the debt never pays off
    pub fn months(&self) -> Option<u32> {
        match self {
            Payoff::Months(months) => Some(*months),
            Payoff::Never => None,
        }
    }

    /// Month count with `Never` rendered as the legacy 999 sentinel
    pub fn sentinel_months(&self) -> u32 {
        match self {
            Payoff::Months(months) => *months,
            Payoff::Never => IMPOSSIBLE_PAYOFF_MONTHS,
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Payoff::Never)
    }

    /// True for `Never` and for month counts at or past the sentinel
    pub fn is_unbounded(&self) -> bool {
        self.sentinel_months() >= IMPOSSIBLE_PAYOFF_MONTHS
    }
}

impl fmt::Display for Payoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payoff::Months(months) => write!(f, "{} months", months),
            Payoff::Never => write!(f, "never"),
        }
    }
}

impl Serialize for Payoff {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payoff::Months(months) => serializer.serialize_u32(*months),
            Payoff::Never => serializer.serialize_str("never"),
        }
    }
}

impl<'de> Deserialize<'de> for Payoff {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Months(u32),
            Label(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Months(months) => Ok(Payoff::Months(months)),
            Raw::Label(label) if label == "never" => Ok(Payoff::Never),
            Raw::Label(label) => Err(serde::de::Error::custom(format!(
                "expected month count or \"never\", got {:?}",
                label
            ))),
        }
    }
}

/// Months needed to pay `balance` down with a fixed monthly `payment`
/// at `annual_rate` percent per annum.
///
/// Zero balance or zero payment yields `Months(0)`.
pub fn payoff_months(balance: f64, payment: f64, annual_rate: f64) -> Payoff {
    if balance <= 0.0 || payment <= 0.0 {
        return Payoff::Months(0);
    }

    if annual_rate == 0.0 {
        return Payoff::Months((balance / payment).ceil() as u32);
    }

    let monthly_rate = annual_rate / 100.0 / 12.0;
    let monthly_interest = balance * monthly_rate;
    if payment <= monthly_interest {
        return Payoff::Never;
    }

    let exact = (monthly_interest / (payment - monthly_interest)).ln_1p() / monthly_rate.ln_1p();
    if exact.is_nan() {
        // Rate underflowed to zero
        return Payoff::Months((balance / payment).ceil() as u32);
    }
    if exact.is_infinite() {
        return Payoff::Never;
    }

    // Rounding residue below this must not add a month
    const MONTH_ROUNDING_TOLERANCE: f64 = 1e-9;
    let months = (exact - MONTH_ROUNDING_TOLERANCE).ceil().max(0.0);
    Payoff::Months(months.min(u32::MAX as f64) as u32)
}

/// Interest paid over the life of a debt at its minimum payment.
///
/// Unbounded payoffs report twice the balance as a worst-case estimate.
pub fn interest_cost(balance: f64, payment: f64, annual_rate: f64) -> f64 {
    let payoff = payoff_months(balance, payment, annual_rate);
    if payoff.is_unbounded() {
        return balance * 2.0;
    }

    let months = payoff.sentinel_months() as f64;
    (payment * months - balance).max(0.0)
}

/// Months to pay off a debt on its minimum payment alone
pub fn months_to_payoff(debt: &Debt) -> Payoff {
    payoff_months(debt.current_balance, debt.minimum_payment, debt.annual_rate())
}

/// Lifetime interest of a debt on its minimum payment alone
pub fn total_interest_cost(debt: &Debt) -> f64 {
    interest_cost(debt.current_balance, debt.minimum_payment, debt.annual_rate())
}
