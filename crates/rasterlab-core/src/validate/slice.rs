//! Row slicing with signed bounds.

use log::debug;

use super::{check_positive, ValidationError};

/// Rows `start..end` of a table of `[a, b]` pairs.
///
/// Bounds follow the usual signed-slice rules: negative values count back
/// from the end, out-of-range values clamp, and `start >= end` after
/// normalization yields an empty result.
///
/// # Errors
///
/// `rows` must be non-empty, and every row must hold exactly two positive
/// finite values.
pub fn slice_rows(
    rows: &[Vec<f64>],
    start: isize,
    end: isize,
) -> Result<Vec<[f64; 2]>, ValidationError> {
    if rows.is_empty() {
        return Err(ValidationError::Empty { what: "rows" });
    }
    for (index, row) in rows.iter().enumerate() {
        if row.len() != 2 {
            return Err(ValidationError::InvalidRow {
                index,
                len: row.len(),
            });
        }
        check_positive(row, "rows")?;
    }

    let len = rows.len();
    let from = normalize(start, len);
    let to = normalize(end, len);
    debug!("slice_rows {start}..{end} over {len} rows -> {from}..{to}");

    if from >= to {
        return Ok(Vec::new());
    }
    Ok(rows[from..to].iter().map(|r| [r[0], r[1]]).collect())
}

/// Resolve a signed bound against `len`, clamping into `0..=len`.
fn normalize(bound: isize, len: usize) -> usize {
    if bound < 0 {
        len.saturating_sub(bound.unsigned_abs())
    } else {
        (bound as usize).min(len)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
