//! Body-mass ratios and threshold checks.

use super::{check_positive, ValidationError};

/// `weight / height²` for each pair.
///
/// # Errors
///
/// Both inputs must be non-empty, of equal length, and hold only positive
/// finite values. A height whose square overflows is rejected as well.
pub fn compute_ratios(heights: &[f64], weights: &[f64]) -> Result<Vec<f64>, ValidationError> {
    if heights.is_empty() {
        return Err(ValidationError::Empty { what: "heights" });
    }
    if weights.is_empty() {
        return Err(ValidationError::Empty { what: "weights" });
    }
    if heights.len() != weights.len() {
        return Err(ValidationError::LengthMismatch {
            left: "heights",
            right: "weights",
            left_len: heights.len(),
            right_len: weights.len(),
        });
    }
    check_positive(heights, "heights")?;
    check_positive(weights, "weights")?;

    for (index, &h) in heights.iter().enumerate() {
        if !(h * h).is_finite() {
            return Err(ValidationError::Overflow {
                what: "heights",
                index,
            });
        }
    }

    let ratios: Vec<f64> = heights
        .iter()
        .zip(weights)
        .map(|(&h, &w)| w / (h * h))
        .collect();

    // Tiny heights can still push the quotient past f64::MAX
    if let Some(index) = ratios.iter().position(|r| !r.is_finite()) {
        return Err(ValidationError::Overflow {
            what: "ratios",
            index,
        });
    }
    Ok(ratios)
}

/// `value > limit` for each value.
///
/// # Errors
///
/// `values` must be non-empty and positive; `limit` must be positive.
pub fn exceeds_threshold(values: &[f64], limit: i64) -> Result<Vec<bool>, ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::Empty { what: "values" });
    }
    check_positive(values, "values")?;
    if limit <= 0 {
        return Err(ValidationError::NonPositiveLimit(limit));
    }

    let limit = limit as f64;
    Ok(values.iter().map(|&v| v > limit).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios() {
        let ratios = compute_ratios(&[2.71, 1.15], &[165.3, 38.4]).unwrap();
        assert_eq!(ratios.len(), 2);
        assert!((ratios[0] - 22.507863455018317).abs() < 1e-9);
        assert!((ratios[1] - 29.0359168241966).abs() < 1e-9);
    }

    #[test]
    fn test_ratios_reject_bad_input() {
        assert_eq!(
            compute_ratios(&[], &[1.0]),
            Err(ValidationError::Empty { what: "heights" })
        );
        assert_eq!(
            compute_ratios(&[1.0], &[]),
            Err(ValidationError::Empty { what: "weights" })
        );
        assert!(matches!(
            compute_ratios(&[1.0, 2.0], &[1.0]),
            Err(ValidationError::LengthMismatch { left_len: 2, right_len: 1, .. })
        ));
        assert!(matches!(
            compute_ratios(&[1.0, -2.0], &[1.0, 1.0]),
            Err(ValidationError::NonPositive { what: "heights", index: 1, .. })
        ));
        assert!(matches!(
            compute_ratios(&[1.0], &[f64::INFINITY]),
            Err(ValidationError::NotFinite { what: "weights", index: 0 })
        ));
    }

    #[test]
    fn test_ratios_overflow() {
        assert_eq!(
            compute_ratios(&[1e200], &[1.0]),
            Err(ValidationError::Overflow {
                what: "heights",
                index: 0
            })
        );
        assert_eq!(
            compute_ratios(&[1e-200], &[1e10]),
            Err(ValidationError::Overflow {
                what: "ratios",
                index: 0
            })
        );
    }

    #[test]
    fn test_threshold() {
        let flags = exceeds_threshold(&[22.5, 29.0, 26.0], 26).unwrap();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn test_threshold_rejects_bad_input() {
        assert_eq!(
            exceeds_threshold(&[], 26),
            Err(ValidationError::Empty { what: "values" })
        );
        assert_eq!(
            exceeds_threshold(&[1.0], 0),
            Err(ValidationError::NonPositiveLimit(0))
        );
        assert!(matches!(
            exceeds_threshold(&[-1.0], 5),
            Err(ValidationError::NonPositive { what: "values", .. })
        ));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
