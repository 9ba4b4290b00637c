// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Wraparound arithmetic on a ring of holes.
//!
//! Rim holes and flange holes are both numbered around a circle, so every
//! index computation in the engines is done modulo the ring size. Rust's `%`
//! keeps the sign of the dividend, which is wrong for negative offsets; these
//! helpers always land inside the ring.
//!
//! # Examples
//!
//! ```
//! use spoke_lacing::geometry::ring::{modulo, wrap_hole};
//!
//! assert_eq!(modulo(-1, 32), 31);
//! assert_eq!(wrap_hole(32, 0), 32);
//! assert_eq!(wrap_hole(32, 33), 1);
//! ```

/// Reduce `value` into `[0, base)`, including for negative values.
///
/// # Panics
///
/// Panics if `base` is zero.
pub fn modulo(value: i64, base: i64) -> i64 {
    ((value % base) + base) % base
}

/// Map any integer hole number onto the 1-based ring `[1, holes]`.
///
/// Hole `0` is the hole just before hole `1`, i.e. hole `holes`.
pub fn wrap_hole(holes: i64, hole: i64) -> i64 {
    modulo(hole - 1, holes) + 1
}
