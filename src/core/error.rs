//! Error types for rolling and rendering.

/// Errors raised by the dice core.
#[derive(Debug, thiserror::Error)]
pub enum FateError {
    /// The secure random source could not produce a draw.
    #[error("random source failure: {0}")]
    RandomSource(String),

    /// A roll set was built from the wrong number of dice.
    #[error("expected {expected} dice, got {actual}")]
    InvalidRollCount { expected: usize, actual: usize },
}

/// Convenience result type for core operations.
pub type FateResult<T> = Result<T, FateError>;
