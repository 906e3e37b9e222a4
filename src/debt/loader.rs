//! Load debt portfolios from CSV or JSON exports

use std::io::Read;
use std::path::Path;

use csv::Reader;
use serde::Deserialize;

use super::{validate_debts, Debt, DebtStatus, DebtType};
use crate::error::LoadError;

/// Raw CSV row matching the store's debt export columns
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "id")]
    id: String,
    #[serde(rename = "name")]
    name: String,
    #[serde(rename = "type")]
    debt_type: String,
    #[serde(rename = "status")]
    status: String,
    #[serde(rename = "currentBalance")]
    current_balance: f64,
    #[serde(rename = "minimumPayment")]
    minimum_payment: f64,
    #[serde(rename = "interestRate", default)]
    interest_rate: Option<f64>,
    #[serde(rename = "priority", default)]
    priority: Option<i32>,
}

impl CsvRow {
    fn into_debt(self) -> Result<Debt, LoadError> {
        let debt_type: DebtType = self.debt_type.parse()?;
        let status = if self.status.trim().is_empty() {
            DebtStatus::Active
        } else {
            DebtStatus::from(self.status.as_str())
        };

        Ok(Debt {
            id: self.id,
            name: self.name,
            debt_type,
            status,
            current_balance: self.current_balance,
            minimum_payment: self.minimum_payment,
            interest_rate: self.interest_rate,
            priority: self.priority,
        })
    }
}

/// JSON exports are either a bare array or wrapped in a `debts` field
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonPortfolio {
    Bare(Vec<Debt>),
    Wrapped {
        #[serde(default)]
        debts: Vec<Debt>,
    },
}

/// Load debts from any CSV reader
pub fn load_debts_from_csv_reader<R: Read>(reader: R) -> Result<Vec<Debt>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut debts = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        debts.push(row.into_debt()?);
    }

    validate_debts(&debts)?;
    Ok(debts)
}

/// Load debts from any JSON reader
pub fn load_debts_from_json_reader<R: Read>(reader: R) -> Result<Vec<Debt>, LoadError> {
    let debts = match serde_json::from_reader(reader)? {
        JsonPortfolio::Bare(debts) => debts,
        JsonPortfolio::Wrapped { debts } => debts,
    };

    validate_debts(&debts)?;
    Ok(debts)
}

/// Load debts from a `.csv` or `.json` file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>, LoadError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let debts = match extension.as_deref() {
        Some("csv") => load_debts_from_csv_reader(std::fs::File::open(path)?)?,
        Some("json") => {
            load_debts_from_json_reader(std::io::BufReader::new(std::fs::File::open(path)?))?
        }
        _ => return Err(LoadError::UnsupportedFormat(path.display().to_string())),
    };

    log::debug!("Loaded {} debts from {}", debts.len(), path.display());
    Ok(debts)
}
