//! Dataset loading and the sequential evaluation driver.

pub mod dataset;
pub mod driver;

pub use dataset::{DatasetFormat, DatasetRow};
pub use driver::{EvalCase, FailurePolicy, Prediction, RowOutcome};
