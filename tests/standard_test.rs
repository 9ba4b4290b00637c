// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the Standard four-group method.

mod common;

use common::*;
use spoke_lacing::geometry::{Heads, Side};
use spoke_lacing::params::MAX_HOLES;
use spoke_lacing::{LacingError, MethodId, MethodRegistry, ParamBag, PatternResult};

fn rim_of(result: &PatternResult, step: &str, hub: u32) -> u32 {
    result
        .step(step)
        .find(|p| p.hub_hole == hub)
        .map(|p| p.rim_hole)
        .unwrap_or_else(|| panic!("no hub hole {} in {}", hub, step))
}

fn groups(result: &PatternResult) -> Vec<(String, Side, Heads, usize)> {
    let mut out: Vec<(String, Side, Heads, usize)> = Vec::new();
    for p in &result.placements {
        match out.last_mut() {
            Some(last) if last.0 == p.step => last.3 += 1,
            _ => out.push((p.step.clone(), p.side, p.heads, 1)),
        }
    }
    out
}

#[test]
fn test_32h_3x_defaults() {
    let result = standard(32, &ParamBag::new());
    assert_eq!(result.method, MethodId::Standard);
    assert_eq!(result.placements.len(), 32);

    assert_eq!(rim_of(&result, "G1", 1), 7);
    assert_eq!(rim_of(&result, "G1", 15), 3);
    assert_eq!(rim_of(&result, "G2", 1), 28);
    assert_eq!(rim_of(&result, "G3", 2), 29);
    assert_eq!(rim_of(&result, "G4", 2), 10);
}

#[test]
fn test_group_order() {
    let result = standard(32, &ParamBag::new());
    assert_eq!(
        groups(&result),
        vec![
            ("G1".to_string(), Side::Drive, Heads::Out, 8),
            ("G2".to_string(), Side::NonDrive, Heads::Out, 8),
            ("G3".to_string(), Side::Drive, Heads::In, 8),
            ("G4".to_string(), Side::NonDrive, Heads::In, 8),
        ]
    );

    let g1: Vec<u32> = result.step("G1").map(|p| p.hub_hole).collect();
    assert_eq!(g1, vec![1, 3, 5, 7, 9, 11, 13, 15]);
    let g4: Vec<u32> = result.step("G4").map(|p| p.hub_hole).collect();
    assert_eq!(g4, vec![2, 4, 6, 8, 10, 12, 14, 16]);

    let orders: Vec<u32> = result.placements.iter().map(|p| p.order).collect();
    assert_eq!(orders, (1..=32).collect::<Vec<_>>());
}

#[test]
fn test_start_left_heads_in_first() {
    let bag = ParamBag::new()
        .with("startSide", "left")
        .with("laceOrder", "headsInFirst");
    let result = standard(32, &bag);
    let order: Vec<(Side, Heads)> = groups(&result).iter().map(|g| (g.1, g.2)).collect();
    assert_eq!(
        order,
        vec![
            (Side::NonDrive, Heads::In),
            (Side::Drive, Heads::In),
            (Side::NonDrive, Heads::Out),
            (Side::Drive, Heads::Out),
        ]
    );
    // Placement of a given spoke does not depend on when it is laced
    let defaults = standard(32, &ParamBag::new());
    for p in &result.placements {
        let same = defaults
            .placements
            .iter()
            .find(|d| d.side == p.side && d.hub_hole == p.hub_hole)
            .unwrap();
        assert_eq!(same.rim_hole, p.rim_hole);
        assert_eq!(same.heads, p.heads);
    }
}

#[test]
fn test_odd_hubs_out_even_hubs_in() {
    let result = standard(36, &ParamBag::new());
    for p in &result.placements {
        let expected = if p.hub_hole % 2 == 1 {
            Heads::Out
        } else {
            Heads::In
        };
        assert_eq!(p.heads, expected, "{}", p.spoke);
        assert!(p.odd_even_set.is_none());
        assert!(p.k.is_none());
    }
}

#[test]
fn test_right_flange_odd_rim_holes() {
    let result = standard(32, &ParamBag::new());
    assert_eq!(
        rim_holes(&result, Side::Drive),
        (0..16).map(|n| 2 * n + 1).collect::<Vec<_>>()
    );
    assert_eq!(
        rim_holes(&result, Side::NonDrive),
        (1..=16).map(|n| 2 * n).collect::<Vec<_>>()
    );
}

#[test]
fn test_completeness() {
    for holes in [20i64, 24, 28, 32, 36, 40] {
        for crosses in 0..=5 {
            let result = standard(holes, &ParamBag::new().with("crosses", crosses));
            let h = (holes / 2) as u32;
            assert_eq!(result.placements.len(), holes as usize);
            assert_eq!(hub_holes(&result, Side::Drive), (1..=h).collect::<Vec<_>>());
            assert_eq!(hub_holes(&result, Side::NonDrive), (1..=h).collect::<Vec<_>>());
            assert_eq!(
                all_rim_holes(&result),
                (1..=holes as u32).collect::<Vec<_>>(),
                "{}H {}x",
                holes,
                crosses
            );
        }
    }
}

#[test]
fn test_align_key_spoke_shifts_two_holes() {
    let plain = standard(32, &ParamBag::new());
    let aligned = standard(
        32,
        &ParamBag::new().with("valveRule", "alignKeySpokeRightOfValve"),
    );
    assert_eq!(rim_of(&aligned, "G1", 1), 9);
    for (a, b) in plain.placements.iter().zip(&aligned.placements) {
        assert_eq!(b.rim_hole, (a.rim_hole + 1) % 32 + 1);
    }
}

#[test]
fn test_valve_rule_on_radial_key_spoke() {
    // The key spoke is G1's first: right flange, hub hole 1, heads OUT
    let plain = standard(32, &ParamBag::new().with("crosses", 0));
    assert_eq!(rim_of(&plain, "G1", 1), 1);
    let aligned = standard(
        32,
        &ParamBag::new()
            .with("crosses", 0)
            .with("valveRule", "alignKeySpokeRightOfValve"),
    );
    assert_eq!(rim_of(&aligned, "G1", 1), 3);
}

#[test]
fn test_crosses_not_bounded() {
    // 6x is beyond what Schraner accepts on 32 holes
    let result = standard(32, &ParamBag::new().with("crosses", 6));
    assert_eq!(result.placements.len(), 32);
    assert_eq!(result.placements[0].crosses_described, "6x (over 5, under 1)");
    assert_eq!(
        MethodRegistry::new()
            .compute(MethodId::Schraner, 32, &bench_request(6))
            .unwrap_err(),
        LacingError::CrossesExceedMaximum {
            holes: 32,
            crosses: 6,
            max: 4
        }
    );
}

#[test]
fn test_spoke_ids_and_notes() {
    let result = standard(32, &ParamBag::new());
    let first = &result.placements[0];
    assert_eq!(first.spoke, "R-01");
    assert_eq!(first.notes, "right flange, heads OUT");
    let last = result.placements.last().unwrap();
    assert_eq!(last.spoke, "L-16");
    assert_eq!(last.notes, "left flange, heads IN");
}

#[test]
fn test_rejects_odd_ring() {
    let err = MethodRegistry::new()
        .compute(MethodId::Standard, 33, &ParamBag::new())
        .unwrap_err();
    assert_eq!(
        err,
        LacingError::InvalidHoleCount {
            holes: 33,
            minimum: 4
        }
    );
}

#[test]
fn test_rejects_hole_counts_beyond_u32() {
    let registry = MethodRegistry::new();
    for holes in [(1i64 << 32) + 40, 1i64 << 32, MAX_HOLES + 2] {
        let err = registry
            .compute(MethodId::Standard, holes, &ParamBag::new())
            .unwrap_err();
        assert_eq!(
            err,
            LacingError::HoleCountTooLarge {
                holes,
                maximum: MAX_HOLES
            }
        );
    }
}

#[test]
fn test_json_side_is_flange_enum() {
    // Hand labels are for display; the wire field keeps one spelling for both methods
    let result = standard(32, &ParamBag::new());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["placements"][0]["side"], "DS");
    assert_eq!(json["placements"][0]["spoke"], "R-01");
    assert_eq!(json["placements"][8]["side"], "NDS");
    assert_eq!(json["table"]["rows"][0][3], "right");
}

#[test]
fn test_table_omits_schraner_columns() {
    let result = standard(32, &ParamBag::new());
    let table = result.table.as_ref().unwrap();
    assert_eq!(table.column_index("k"), None);
    assert_eq!(table.column_index("Odd/Even set"), None);
    let side = table.column_index("Side").unwrap();
    assert_eq!(table.rows[0][side], "right");
    assert_eq!(table.rows[8][side], "left");
}
