use thiserror::Error;

/// Contract violations in the shape of a matching call. Business outcomes ("no good match",
/// "too close to call") are data values on the report, never errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchInputError {
    #[error("Transaction at index {0} has a blank identifier")]
    BlankTransactionId(usize),
    #[error("Rent call at index {0} has a blank identifier")]
    BlankRentCallId(usize),
    #[error("Duplicate transaction id in batch: {0}")]
    DuplicateTransactionId(String),
    #[error("Duplicate rent call id in batch: {0}")]
    DuplicateRentCallId(String),
    #[error("Invalid matching tunable: {0}")]
    InvalidConfig(String),
}
