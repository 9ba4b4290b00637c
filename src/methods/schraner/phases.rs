// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Phase tables for the Schraner method.
//!
//! The order in which spokes go in is the part of the method a mechanic relies
//! on, so it is written down as data. Each [`Phase`] names a flange, which hub
//! holes it covers, and the step label and note printed for them. A different
//! workshop sequence is a different table; the placement math is unaffected.

use crate::geometry::Side;

/// Which hub holes of a flange a phase covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Hub hole 1.
    Reference,
    /// The hole `2 * crosses + 1` places after hole 1 (hole 2 when radial).
    SecondReference,
    /// Odd hub holes that are not references, ascending.
    RemainingOdd,
    /// Even hub holes that are not references, ascending.
    RemainingEven,
}

impl Selection {
    /// 1-based hub-hole indices covered, given the flange size and the second reference.
    pub fn hub_indices(self, h: i64, second_reference: i64) -> Vec<i64> {
        let is_reference = |i: &i64| *i == 1 || *i == second_reference;
        match self {
            Selection::Reference => vec![1],
            Selection::SecondReference => vec![second_reference],
            Selection::RemainingOdd => (1..=h)
                .step_by(2)
                .filter(|i| !is_reference(i))
                .collect(),
            Selection::RemainingEven => (2..=h)
                .step_by(2)
                .filter(|i| !is_reference(i))
                .collect(),
        }
    }
}

/// One block of the lacing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub side: Side,
    pub selection: Selection,
    pub step: &'static str,
    pub note: &'static str,
}

const fn phase(side: Side, selection: Selection, step: &'static str, note: &'static str) -> Phase {
    Phase {
        side,
        selection,
        step,
        note,
    }
}

/// The workshop sequence R1 → R2 → R3 → L1 → L3 → L4.
///
/// The drive side goes in first, anchored by two reference spokes that
/// straddle the valve; the wheel is then flipped and the non-drive side
/// follows the same shape.
pub const WORKSHOP: &[Phase] = &[
    phase(
        Side::Drive,
        Selection::Reference,
        "R1",
        "Reference at valve (valve-left)",
    ),
    phase(
        Side::Drive,
        Selection::SecondReference,
        "R1",
        "Second reference at valve (valve-right)",
    ),
    phase(Side::Drive, Selection::RemainingOdd, "R2", "Odd set fill"),
    phase(Side::Drive, Selection::RemainingEven, "R3", "Even set weave"),
    phase(
        Side::NonDrive,
        Selection::Reference,
        "L1",
        "NDS start reference (valve-right)",
    ),
    phase(
        Side::NonDrive,
        Selection::SecondReference,
        "L1",
        "Second reference (valve-left)",
    ),
    phase(Side::NonDrive, Selection::RemainingOdd, "L3", "Odd set fill"),
    phase(Side::NonDrive, Selection::RemainingEven, "L4", "Even set weave"),
];
