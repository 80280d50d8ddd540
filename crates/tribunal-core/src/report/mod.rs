//! Run output: append-only CSV files and a console table.

pub mod console;
pub mod csv;

pub use csv::{ResultsWriter, RunSummary, StrategyScore};
