// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric vocabulary shared by the lacing methods.
//!
//! This module contains:
//! - ring: wraparound arithmetic on rim and flange holes
//! - Side: the two hub flanges, with per-method labels
//! - Heads: head orientation (IN/OUT)
//! - SpokeSet: odd/even interleaved hub-hole sets

pub mod heads;
pub mod ring;
pub mod side;

// Re-export for convenience
pub use heads::{Heads, SpokeSet};
pub use ring::{modulo, wrap_hole};
pub use side::{Side, SideConvention};
