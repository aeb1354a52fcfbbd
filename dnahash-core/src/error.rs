//! Structured error types for the dnahash workspace.

use thiserror::Error;

/// Unified error type for all dnahash operations.
#[derive(Debug, Error)]
pub enum DnaHashError {
    /// A byte that is not one of the uppercase nucleotides `A`, `C`, `G`, `T`
    #[error("invalid nucleotide: {0}")]
    InvalidSymbol(String),

    /// An output width that is not a multiple of two
    #[error("output width must be even, got {0}")]
    OddWidth(u32),

    /// An output width too large for the 64-bit accumulator
    #[error("output width {0} exceeds the supported maximum of {1}")]
    WidthTooLarge(u32, u32),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the dnahash workspace.
pub type Result<T> = std::result::Result<T, DnaHashError>;
