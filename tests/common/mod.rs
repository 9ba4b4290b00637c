// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use serde_json::Value;
use spoke_lacing::geometry::Side;
use spoke_lacing::{MethodId, MethodRegistry, ParamBag, PatternResult, SpokePlacement};

/// The bench request used throughout the docs: rear wheel, symmetrical,
/// heads not inverted, start rim hole 1 right of the valve, hub holes 1/1.
pub fn bench_request(crosses: i64) -> ParamBag {
    ParamBag::new()
        .with("wheelType", "rear")
        .with("crosses", crosses)
        .with("symmetry", "symmetrical")
        .with("invertHeads", false)
        .with("startRimHole", 1)
        .with("valveReference", "right_of_valve")
        .with("startHubHoleDS", 1)
        .with("startHubHoleNDS", 1)
}

/// Bench request with one field replaced.
pub fn bench_request_with(crosses: i64, key: &str, value: impl Into<Value>) -> ParamBag {
    bench_request(crosses).with(key, value)
}

pub fn schraner(holes: i64, bag: &ParamBag) -> PatternResult {
    MethodRegistry::new()
        .compute(MethodId::Schraner, holes, bag)
        .expect("valid Schraner request")
}

pub fn standard(holes: i64, bag: &ParamBag) -> PatternResult {
    MethodRegistry::new()
        .compute(MethodId::Standard, holes, bag)
        .expect("valid Standard request")
}

/// Sorted hub holes used on one flange.
pub fn hub_holes(result: &PatternResult, side: Side) -> Vec<u32> {
    let mut holes: Vec<u32> = result.side(side).map(|p| p.hub_hole).collect();
    holes.sort_unstable();
    holes
}

/// Sorted rim holes used on one flange.
pub fn rim_holes(result: &PatternResult, side: Side) -> Vec<u32> {
    let mut holes: Vec<u32> = result.side(side).map(|p| p.rim_hole).collect();
    holes.sort_unstable();
    holes
}

/// Sorted rim holes across both flanges.
pub fn all_rim_holes(result: &PatternResult) -> Vec<u32> {
    let mut holes: Vec<u32> = result.placements.iter().map(|p| p.rim_hole).collect();
    holes.sort_unstable();
    holes
}

/// The placement whose notes contain `text` on a flange. Panics unless exactly one matches.
pub fn noted<'a>(result: &'a PatternResult, side: Side, text: &str) -> &'a SpokePlacement {
    let matches: Vec<&SpokePlacement> = result
        .side(side)
        .filter(|p| p.notes.contains(text))
        .collect();
    assert_eq!(matches.len(), 1, "expected one {:?} spoke noted {:?}", side, text);
    matches[0]
}
