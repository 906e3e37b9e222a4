//! Error types for input validation and debt loading

use thiserror::Error;

/// Rejection of caller-supplied input before any simulation runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("debt {debt_id}: current balance must be non-negative, got {value}")]
    NegativeBalance { debt_id: String, value: f64 },

    #[error("debt {debt_id}: minimum payment must be non-negative, got {value}")]
    NegativeMinimumPayment { debt_id: String, value: f64 },

    #[error("debt {debt_id}: interest rate must be between 0 and 100 percent, got {value}")]
    InterestRateOutOfRange { debt_id: String, value: f64 },

    #[error("debt {debt_id}: {field} is not a finite number")]
    NonFiniteValue { debt_id: String, field: &'static str },

    #[error("extra payment must be a non-negative finite amount, got {0}")]
    NegativeExtraPayment(f64),
}

/// Failure while reading a debt portfolio or config file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown debt type: {0}")]
    UnknownDebtType(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unsupported file extension for {0} (expected .csv or .json)")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
