// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-size limits on hole counts and cross counts.
//!
//! The common wheel sizes carry practical maxima that differ from the generic
//! formula (a 20H wheel is limited to 1x even though the formula allows 4x),
//! so both the table and the fallback formula are kept.

use crate::error::LacingError;

/// Smallest hole count the Schraner method accepts.
pub const MIN_HOLES: i64 = 20;

/// Largest hole count either method lays out. Hole counts are stored as
/// `u32` once validated, so this must stay well inside that range.
pub const MAX_HOLES: i64 = 1000;

/// Holes per flange.
pub fn derive_h(holes: i64) -> i64 {
    holes / 2
}

/// Largest usable cross count for a wheel.
///
/// # Examples
///
/// ```
/// use spoke_lacing::params::max_crosses;
///
/// assert_eq!(max_crosses(20), 1);
/// assert_eq!(max_crosses(32), 4);
/// assert_eq!(max_crosses(48), 11);
/// ```
pub fn max_crosses(holes: i64) -> i64 {
    match holes {
        20 => 1,
        24 | 28 => 3,
        32 | 36 => 4,
        _ => (derive_h(holes) - 2).div_euclid(2),
    }
}

/// Frequently used cross counts for a wheel size, for ordering choices in a UI.
///
/// Informational only: the 20H list offers 2x although [`max_crosses`] rejects it.
pub fn common_crosses(holes: i64) -> Vec<i64> {
    match holes {
        20 => vec![0, 1, 2],
        24 | 28 => vec![0, 1, 2, 3],
        32 | 36 => vec![0, 1, 2, 3, 4],
        _ => (0..=(derive_h(holes) - 2).div_euclid(2)).collect(),
    }
}

/// Hole count must be even, at least `minimum` and at most [`MAX_HOLES`].
pub fn validate_holes(holes: i64, minimum: i64) -> Result<(), LacingError> {
    if holes < minimum || holes % 2 != 0 {
        return Err(LacingError::InvalidHoleCount { holes, minimum });
    }
    if holes > MAX_HOLES {
        return Err(LacingError::HoleCountTooLarge {
            holes,
            maximum: MAX_HOLES,
        });
    }
    Ok(())
}

/// Cross count must lie in `[0, max_crosses(holes)]`.
pub fn validate_crosses(holes: i64, crosses: i64) -> Result<(), LacingError> {
    let max = max_crosses(holes);
    if crosses < 0 || crosses > max {
        return Err(LacingError::CrossesExceedMaximum {
            holes,
            crosses,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_h() {
        assert_eq!(derive_h(32), 16);
        assert_eq!(derive_h(20), 10);
    }

    #[test]
    fn test_max_crosses_table() {
        assert_eq!(max_crosses(20), 1);
        assert_eq!(max_crosses(24), 3);
        assert_eq!(max_crosses(28), 3);
        assert_eq!(max_crosses(32), 4);
        assert_eq!(max_crosses(36), 4);
    }

    #[test]
    fn test_max_crosses_formula() {
        assert_eq!(max_crosses(22), 4);
        assert_eq!(max_crosses(40), 9);
        assert_eq!(max_crosses(48), 11);
    }

    #[test]
    fn test_validate_crosses_boundaries() {
        for (holes, max) in [(20, 1), (24, 3), (28, 3), (32, 4), (36, 4)] {
            assert!(validate_crosses(holes, max).is_ok(), "{}H {}x", holes, max);
            assert_eq!(
                validate_crosses(holes, max + 1),
                Err(LacingError::CrossesExceedMaximum {
                    holes,
                    crosses: max + 1,
                    max
                })
            );
        }
    }

    #[test]
    fn test_validate_crosses_negative() {
        assert!(validate_crosses(32, -1).is_err());
        assert!(validate_crosses(32, 0).is_ok());
    }

    #[test]
    fn test_validate_holes() {
        assert!(validate_holes(20, MIN_HOLES).is_ok());
        assert!(validate_holes(32, MIN_HOLES).is_ok());
        assert!(validate_holes(21, MIN_HOLES).is_err());
        assert!(validate_holes(18, MIN_HOLES).is_err());
        assert!(validate_holes(-32, MIN_HOLES).is_err());
    }

    #[test]
    fn test_validate_holes_upper_bound() {
        assert!(validate_holes(MAX_HOLES, MIN_HOLES).is_ok());
        assert_eq!(
            validate_holes(MAX_HOLES + 2, MIN_HOLES),
            Err(LacingError::HoleCountTooLarge {
                holes: MAX_HOLES + 2,
                maximum: MAX_HOLES
            })
        );
        // Would truncate to 40 as a u32
        let wrapped = (1i64 << 32) + 40;
        assert!(matches!(
            validate_holes(wrapped, MIN_HOLES),
            Err(LacingError::HoleCountTooLarge { .. })
        ));
    }

    #[test]
    fn test_common_crosses() {
        assert_eq!(common_crosses(32), vec![0, 1, 2, 3, 4]);
        assert_eq!(common_crosses(20), vec![0, 1, 2]);
        assert_eq!(common_crosses(24), vec![0, 1, 2, 3]);
        assert_eq!(common_crosses(40), (0..=9).collect::<Vec<_>>());
    }
}
