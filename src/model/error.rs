use thiserror::Error;

/// Argument validation failures raised by the model.
/// Every variant is reported before any state changes or listeners run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("The new transaction must be present")]
    MissingTransaction,

    #[error("The matched filter indices must be present")]
    MissingIndices,

    #[error(
        "Matched filter index {index} is out of range: expected 0 <= index < {len} (number of transactions)"
    )]
    IndexOutOfRange { index: usize, len: usize },
}
