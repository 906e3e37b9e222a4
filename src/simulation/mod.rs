//! Portfolio payoff simulation

mod state;
mod engine;
mod results;

pub use state::{DebtState, SimulationState};
pub use engine::PayoffSimulator;
pub use results::{MonthlySnapshot, PayoffEvent, SimulationResult};
