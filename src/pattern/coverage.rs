// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rim coverage check.
//!
//! In a well-formed pattern the two flanges interleave around the rim and
//! every rim hole receives exactly one spoke. Some hole counts (an odd number
//! of holes per flange) cannot satisfy that; the engines run this check after
//! placing spokes and log any shortfall.

use super::SpokePlacement;

/// Rim holes left empty or used more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    /// Holes with no spoke, ascending.
    pub missing: Vec<u32>,
    /// `(hole, count)` for holes with more than one spoke, ascending.
    pub duplicated: Vec<(u32, usize)>,
}

impl Coverage {
    /// Every rim hole is used exactly once.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.duplicated.is_empty()
    }
}

/// Count placements per rim hole over `1..=holes`.
pub fn rim_coverage(placements: &[SpokePlacement], holes: u32) -> Coverage {
    let mut counts = vec![0usize; holes as usize + 1];
    for placement in placements {
        if let Some(count) = counts.get_mut(placement.rim_hole as usize) {
            *count += 1;
        }
    }

    let mut coverage = Coverage::default();
    for (hole, &count) in counts.iter().enumerate().skip(1) {
        match count {
            0 => coverage.missing.push(hole as u32),
            1 => {}
            n => coverage.duplicated.push((hole as u32, n)),
        }
    }
    coverage
}
