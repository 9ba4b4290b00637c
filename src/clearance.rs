// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Valve clearance advisory.
//!
//! A coarse check of how busy the rim is around the valve: count the spokes
//! that terminate within a few holes either side of it. This is a heuristic
//! for display, not part of placement, and it never rejects a pattern.
//!
//! Rim holes are numbered clockwise from the DS viewpoint, so the valve sits
//! between a hole and its clockwise neighbour.

use crate::geometry::wrap_hole;
use crate::methods::ResolvedParams;
use crate::params::ValveReference;
use crate::pattern::{PatternResult, SpokePlacement};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum_macros::{AsRefStr, Display};

/// Tuning of the advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClearanceConfig {
    /// Rim holes inspected on each side of the valve.
    pub window: u32,
    /// Terminations in the window above which the valve is crowded.
    pub max_terminations: u32,
}

impl Default for ClearanceConfig {
    fn default() -> Self {
        Self {
            window: 2,
            max_terminations: 4,
        }
    }
}

/// Advisory classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Clearance {
    Clear,
    Crowded,
}

/// The two rim holes either side of the valve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValvePosition {
    /// First hole counter-clockwise of the valve (valve-left).
    pub left: u32,
    /// First hole clockwise of the valve (valve-right).
    pub right: u32,
}

impl ValvePosition {
    /// Locate the valve from a start rim hole and the side it was chosen on.
    pub fn from_reference(holes: u32, start_rim_hole: u32, reference: ValveReference) -> Self {
        let holes = holes as i64;
        let start = start_rim_hole as i64;
        let (left, right) = match reference {
            ValveReference::RightOfValve => (wrap_hole(holes, start - 1), start),
            ValveReference::LeftOfValve => (start, wrap_hole(holes, start + 1)),
        };
        Self {
            left: left as u32,
            right: right as u32,
        }
    }

    /// Valve position used by a computed pattern.
    ///
    /// Methods without a valve reference number hole 1 as the first hole
    /// clockwise of the valve.
    pub fn for_result(result: &PatternResult) -> Self {
        match result.params {
            ResolvedParams::Schraner(params) => {
                Self::from_reference(params.holes, params.start_rim_hole, params.valve_reference)
            }
            ResolvedParams::Standard(params) => {
                Self::from_reference(params.holes, 1, ValveReference::RightOfValve)
            }
        }
    }
}

/// Outcome of the advisory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearanceReport {
    pub valve: ValvePosition,
    /// Rim holes inspected, ascending.
    pub window: Vec<u32>,
    /// Spokes terminating inside the window.
    pub terminations: usize,
    /// Window holes carrying more than one spoke.
    pub shared_holes: Vec<u32>,
    pub status: Clearance,
}

/// Classify the valve area of a list of placements.
///
/// Crowded when more than `config.max_terminations` spokes end in the
/// window, or when any window hole carries more than one spoke.
pub fn assess(
    placements: &[SpokePlacement],
    holes: u32,
    valve: ValvePosition,
    config: &ClearanceConfig,
) -> ClearanceReport {
    let ring = holes as i64;
    let mut window = BTreeSet::new();
    for step in 0..config.window as i64 {
        window.insert(wrap_hole(ring, valve.left as i64 - step) as u32);
        window.insert(wrap_hole(ring, valve.right as i64 + step) as u32);
    }

    let mut terminations = 0;
    let mut shared_holes = Vec::new();
    for &hole in &window {
        let count = placements.iter().filter(|p| p.rim_hole == hole).count();
        terminations += count;
        if count > 1 {
            shared_holes.push(hole);
        }
    }

    let status = if terminations > config.max_terminations as usize || !shared_holes.is_empty() {
        Clearance::Crowded
    } else {
        Clearance::Clear
    };

    ClearanceReport {
        valve,
        window: window.into_iter().collect(),
        terminations,
        shared_holes,
        status,
    }
}

/// Run the advisory on a computed pattern.
pub fn assess_result(result: &PatternResult, config: &ClearanceConfig) -> ClearanceReport {
    assess(
        &result.placements,
        result.holes,
        ValvePosition::for_result(result),
        config,
    )
}
