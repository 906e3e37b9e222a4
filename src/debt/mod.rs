//! Debt data structures, filtering and portfolio loading

mod data;
mod filter;
pub mod loader;

pub use data::{validate_debts, validate_extra_payment, Debt, DebtStatus, DebtType};
pub use filter::filter_active_debts;
pub use loader::{load_debts, load_debts_from_csv_reader, load_debts_from_json_reader};
