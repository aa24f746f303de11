use thiserror::Error;

/// Errors that can occur while validating a search request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Target sum cannot be negative: {0}")]
    NegativeTarget(i64),
    #[error("Combination length cannot be negative: {0}")]
    NegativeLength(i64),
    #[error("Target sum is too large: {0}")]
    TargetTooLarge(i64),
}
