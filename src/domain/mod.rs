mod money;
mod transaction;

pub use money::*;
pub use transaction::*;
