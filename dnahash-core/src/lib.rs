//! Shared primitives for the dnahash workspace.
//!
//! `dnahash-core` provides the foundation that the sequence-hashing crate
//! builds on:
//!
//! - **Error types** — [`DnaHashError`] and [`Result`] for structured error handling
//! - **Bit folding** — [`xor_fold`] for mixing a 64-bit value down to a fixed width

pub mod error;
pub mod fold;

pub use error::{DnaHashError, Result};
pub use fold::{mask, xor_fold, MAX_FOLD_WIDTH};
