//! Debt records as supplied by the external store

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, ValidationError};

/// Kind of debt account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtType {
    CreditCard,
    PersonalLoan,
    Mortgage,
    Other,
}

impl DebtType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtType::CreditCard => "credit_card",
            DebtType::PersonalLoan => "personal_loan",
            DebtType::Mortgage => "mortgage",
            DebtType::Other => "other",
        }
    }
}

impl FromStr for DebtType {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "credit_card" => Ok(DebtType::CreditCard),
            "personal_loan" | "personal" => Ok(DebtType::PersonalLoan),
            "mortgage" => Ok(DebtType::Mortgage),
            "other" => Ok(DebtType::Other),
            other => Err(LoadError::UnknownDebtType(other.to_string())),
        }
    }
}

/// Lifecycle status of a debt account. Statuses this engine does not know
/// load as `Unknown` and are never simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtStatus {
    Active,
    PaidOff,
    Deferred,
    Closed,
    #[serde(other)]
    Unknown,
}

impl From<&str> for DebtStatus {
    fn from(s: &str) -> Self {
        match s.trim() {
            "active" => DebtStatus::Active,
            "paid_off" => DebtStatus::PaidOff,
            "deferred" => DebtStatus::Deferred,
            "closed" => DebtStatus::Closed,
            _ => DebtStatus::Unknown,
        }
    }
}

fn default_status() -> DebtStatus {
    DebtStatus::Active
}

/// A single debt account. Treated as immutable input by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    #[serde(rename = "type", default = "default_debt_type")]
    pub debt_type: DebtType,

    #[serde(default = "default_status")]
    pub status: DebtStatus,

    /// Outstanding balance
    #[serde(alias = "currentBalance", default)]
    pub current_balance: f64,

    /// Required monthly payment
    #[serde(alias = "minimumPayment", default)]
    pub minimum_payment: f64,

    /// Annual percentage rate (0-100); absent means 0
    #[serde(alias = "interestRate", default)]
    pub interest_rate: Option<f64>,

    /// User-assigned priority for the custom strategy (higher pays first)
    #[serde(default)]
    pub priority: Option<i32>,
}

fn default_debt_type() -> DebtType {
    DebtType::Other
}

impl Debt {
    /// Create an active debt
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        debt_type: DebtType,
        current_balance: f64,
        minimum_payment: f64,
        interest_rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            debt_type,
            status: DebtStatus::Active,
            current_balance,
            minimum_payment,
            interest_rate: Some(interest_rate),
            priority: None,
        }
    }

    pub fn with_status(mut self, status: DebtStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn without_interest_rate(mut self) -> Self {
        self.interest_rate = None;
        self
    }

    /// Annual rate in percent, treating an absent rate as 0
    pub fn annual_rate(&self) -> f64 {
        self.interest_rate.unwrap_or(0.0)
    }

    /// Monthly periodic rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate() / 100.0 / 12.0
    }

    pub fn is_active(&self) -> bool {
        self.status == DebtStatus::Active
    }

    /// Reject negative amounts, out-of-range rates and non-finite values
    pub fn validate(&self) -> Result<(), ValidationError> {
        let finite = |field: &'static str, value: f64| {
            if value.is_finite() {
                Ok(())
            } else {
                Err(ValidationError::NonFiniteValue {
                    debt_id: self.id.clone(),
                    field,
                })
            }
        };
        finite("current_balance", self.current_balance)?;
        finite("minimum_payment", self.minimum_payment)?;
        if let Some(rate) = self.interest_rate {
            finite("interest_rate", rate)?;
        }

        if self.current_balance < 0.0 {
            return Err(ValidationError::NegativeBalance {
                debt_id: self.id.clone(),
                value: self.current_balance,
            });
        }
        if self.minimum_payment < 0.0 {
            return Err(ValidationError::NegativeMinimumPayment {
                debt_id: self.id.clone(),
                value: self.minimum_payment,
            });
        }
        let rate = self.annual_rate();
        if !(0.0..=100.0).contains(&rate) {
            return Err(ValidationError::InterestRateOutOfRange {
                debt_id: self.id.clone(),
                value: rate,
            });
        }

        Ok(())
    }
}

/// Validate every debt in a portfolio, stopping at the first failure
pub fn validate_debts(debts: &[Debt]) -> Result<(), ValidationError> {
    debts.iter().try_for_each(Debt::validate)
}

/// Validate an extra monthly payment amount
pub fn validate_extra_payment(extra_payment: f64) -> Result<(), ValidationError> {
    if extra_payment.is_finite() && extra_payment >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NegativeExtraPayment(extra_payment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(balance: f64, min: f64, rate: f64) -> Debt {
        Debt::new("c1", "Card", DebtType::CreditCard, balance, min, rate)
    }

    #[test]
    fn test_monthly_rate() {
        let debt = card(1000.0, 50.0, 12.0);
        assert!((debt.monthly_rate() - 0.01).abs() < 1e-12);
        assert_eq!(debt.clone().without_interest_rate().monthly_rate(), 0.0);
    }

    #[test]
    fn test_validate_accepts_zero_values() {
        assert!(card(0.0, 0.0, 0.0).validate().is_ok());
        assert!(card(100.0, 10.0, 100.0).validate().is_ok());
        assert!(card(100.0, 10.0, 0.0).without_interest_rate().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_inputs() {
        assert!(matches!(
            card(-1.0, 10.0, 5.0).validate(),
            Err(ValidationError::NegativeBalance { .. })
        ));
        assert!(matches!(
            card(100.0, -10.0, 5.0).validate(),
            Err(ValidationError::NegativeMinimumPayment { .. })
        ));
        assert!(matches!(
            card(100.0, 10.0, 100.5).validate(),
            Err(ValidationError::InterestRateOutOfRange { .. })
        ));
        assert!(matches!(
            card(100.0, 10.0, -0.1).validate(),
            Err(ValidationError::InterestRateOutOfRange { .. })
        ));
        assert!(matches!(
            card(f64::NAN, 10.0, 5.0).validate(),
            Err(ValidationError::NonFiniteValue { field: "current_balance", .. })
        ));
    }

    #[test]
    fn test_validate_extra_payment() {
        assert!(validate_extra_payment(0.0).is_ok());
        assert!(validate_extra_payment(250.0).is_ok());
        assert!(validate_extra_payment(-1.0).is_err());
        assert!(validate_extra_payment(f64::INFINITY).is_err());
    }

    #[test]
    fn test_deserialize_store_record() {
        let json = r#"{
            "id": "debt1",
            "name": "Credit Card A",
            "type": "credit_card",
            "status": "active",
            "currentBalance": 5000,
            "minimumPayment": 150,
            "interestRate": 18.99
        }"#;
        let debt: Debt = serde_json::from_str(json).unwrap();
        assert_eq!(debt.debt_type, DebtType::CreditCard);
        assert_eq!(debt.current_balance, 5000.0);
        assert_eq!(debt.interest_rate, Some(18.99));
        assert_eq!(debt.priority, None);
    }

    #[test]
    fn test_parse_type_and_status() {
        assert_eq!("personal".parse::<DebtType>().unwrap(), DebtType::PersonalLoan);
        assert_eq!(DebtStatus::from("paid_off"), DebtStatus::PaidOff);
        assert_eq!(DebtStatus::from("in_collections"), DebtStatus::Unknown);
        assert!("boat".parse::<DebtType>().is_err());
    }

    #[test]
    fn test_unrecognized_status_loads_as_inactive() {
        let json = r#"{
            "id": "debt9",
            "name": "Store Card",
            "type": "credit_card",
            "status": "in_collections",
            "currentBalance": 800,
            "minimumPayment": 40,
            "interestRate": 24.0
        }"#;
        let debt: Debt = serde_json::from_str(json).unwrap();
        assert_eq!(debt.status, DebtStatus::Unknown);
        assert!(!debt.is_active());
        assert!(crate::debt::filter_active_debts(&[debt]).is_empty());
    }
}
