// Model layer - observable ledger state shared with any presentation layer.

pub mod error;
mod listener;
mod tracker;

pub use error::*;
pub use listener::ModelListener;
pub use tracker::*;
