//! Numeric list validators.
//!
//! These sit beside the image pipeline rather than inside it. Each one checks
//! every precondition up front and fails with a [`ValidationError`] before
//! computing anything.

mod bmi;
mod slice;

use thiserror::Error;

pub use bmi::{compute_ratios, exceeds_threshold};
pub use slice::slice_rows;

/// Reasons a validator rejects its input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{what} must not be empty")]
    Empty { what: &'static str },

    #[error("{left} and {right} must have the same length ({left_len} != {right_len})")]
    LengthMismatch {
        left: &'static str,
        right: &'static str,
        left_len: usize,
        right_len: usize,
    },

    #[error("{what}[{index}] must be positive, got {value}")]
    NonPositive {
        what: &'static str,
        index: usize,
        value: f64,
    },

    #[error("{what}[{index}] is not finite")]
    NotFinite { what: &'static str, index: usize },

    #[error("{what}[{index}] overflows")]
    Overflow { what: &'static str, index: usize },

    #[error("limit must be positive, got {0}")]
    NonPositiveLimit(i64),

    #[error("row {index} must have exactly 2 entries, got {len}")]
    InvalidRow { index: usize, len: usize },
}

/// Check that every value is finite and strictly positive.
fn check_positive(values: &[f64], what: &'static str) -> Result<(), ValidationError> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { what, index });
        }
        if value <= 0.0 {
            return Err(ValidationError::NonPositive { what, index, value });
        }
    }
    Ok(())
}
