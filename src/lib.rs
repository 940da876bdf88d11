//! Observable in-memory expense ledger.
//!
//! [`ExpenseTrackerModel`] owns the transactions and the indices of those that
//! matched the last applied filter, and notifies registered
//! [`ModelListener`]s after every change.

pub mod config;
pub mod domain;
pub mod model;
pub mod telemetry;

pub use config::Config;
pub use domain::*;
pub use model::{ExpenseTrackerModel, ModelError, ModelListener};
