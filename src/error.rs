//! Error type shared by the colony components.

/// Errors raised while setting up an optimization run.
///
/// All variants are produced before the first iteration; a run that
/// starts always completes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AcoError {
    /// The problem instance is malformed (length mismatch, non-positive
    /// weight, negative value or capacity, non-finite numbers).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A tuning parameter is outside its admissible range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
