// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Schraner workshop method.
//!
//! Spokes are anchored at the valve and placed in the workshop sequence
//! R1 → R2 → R3 → L1 → L3 → L4 (see [`phases::WORKSHOP`]).
//!
//! # Placement of one spoke
//!
//! With `H = holes / 2` and a 1-based hub-hole index `i` on a flange:
//!
//! 1. `i` is in the Odd or Even set by parity.
//! 2. `k = i` for odd `i`. For even `i`, `k` sits `crosses` spokes away from
//!    its odd partner: `mod(i - 1 - 2c, H) + 1` on DS, `mod(i - 1 + 2c, H) + 1`
//!    on NDS, so the two flanges twist in mirror image.
//! 3. Rim hole `mod(start - 1 + offset, holes) + 1` with offset `2(k - 1)` on
//!    DS and `1 + 2(k - 1)` on NDS. DS takes one parity of rim holes, NDS the
//!    other.
//! 4. The physical hub hole rotates `i` by the flange's chosen start hole.
//! 5. Odd set heads OUT, Even set heads IN, swapped by `invertHeads`.
//!
//! Here `start` is the effective valve-right rim hole, see
//! [`SchranerParams::effective_start_rim_hole`].

pub mod params;
pub mod phases;

pub use params::SchranerParams;
pub use phases::{Phase, Selection, WORKSHOP};

use super::{LacingMethod, MethodId, ResolvedParams};
use crate::error::LacingError;
use crate::geometry::{modulo, Heads, Side, SideConvention, SpokeSet};
use crate::params::{ParamBag, ParamSpec, Symmetry};
use crate::pattern::{
    describe_crosses, rim_coverage, Column, Derived, PatternResult, SpokePlacement, Table,
};

const SUPPORTED_HOLES: &[u32] = &[20, 24, 28, 32, 36];

const COLUMNS: &[Column] = &[
    Column::Spoke,
    Column::Order,
    Column::Step,
    Column::Side,
    Column::OddEvenSet,
    Column::K,
    Column::HubHole,
    Column::Heads,
    Column::RimHole,
    Column::CrossesDescribed,
    Column::Notes,
];

/// Appended to every note of an asymmetrical build; geometry is unchanged.
pub const ASYMMETRY_NOTE: &str = "Asymmetrical build selected (geometry unchanged)";

/// The Schraner method, driven by a phase table.
#[derive(Debug, Clone, Copy)]
pub struct SchranerMethod {
    phases: &'static [Phase],
}

impl SchranerMethod {
    /// The method with the standard workshop sequence.
    pub fn new() -> Self {
        Self::with_phases(WORKSHOP)
    }

    /// The method with an alternative phase table.
    ///
    /// The table should cover every hub hole of both flanges exactly once.
    pub fn with_phases(phases: &'static [Phase]) -> Self {
        Self { phases }
    }

    pub fn phases(&self) -> &'static [Phase] {
        self.phases
    }

    /// Place every spoke for already-validated parameters, in phase order.
    pub fn place(&self, params: &SchranerParams) -> Vec<SpokePlacement> {
        let h = params.h();
        let crosses = params.crosses as i64;
        let second_reference = second_reference_index(crosses, h);
        let crosses_described = describe_crosses(crosses);

        let mut placements = Vec::with_capacity(params.holes as usize);
        for phase in self.phases {
            for index in phase.selection.hub_indices(h, second_reference) {
                let order = placements.len() as u32 + 1;
                placements.push(place_spoke(
                    params,
                    phase,
                    index,
                    order,
                    crosses_described.clone(),
                ));
            }
        }
        placements
    }
}

impl Default for SchranerMethod {
    fn default() -> Self {
        Self::new()
    }
}

impl LacingMethod for SchranerMethod {
    fn id(&self) -> MethodId {
        MethodId::Schraner
    }

    fn supported_holes(&self) -> &'static [u32] {
        SUPPORTED_HOLES
    }

    fn schema(&self) -> &'static [ParamSpec] {
        params::SCHEMA
    }

    fn side_convention(&self) -> SideConvention {
        SideConvention::Flange
    }

    fn compute(&self, holes: i64, bag: &ParamBag) -> Result<PatternResult, LacingError> {
        let params = SchranerParams::resolve(holes, bag)?;
        let placements = self.place(&params);

        let coverage = rim_coverage(&placements, params.holes);
        if !coverage.is_complete() {
            tracing::warn!(
                holes = params.holes,
                crosses = params.crosses,
                missing = ?coverage.missing,
                duplicated = ?coverage.duplicated,
                "pattern does not use every rim hole exactly once"
            );
        }
        tracing::debug!(
            holes = params.holes,
            crosses = params.crosses,
            spokes = placements.len(),
            "computed Schraner pattern"
        );

        Ok(PatternResult {
            method: MethodId::Schraner,
            holes: params.holes,
            params: ResolvedParams::Schraner(params),
            derived: Derived::for_holes(params.holes),
            placements,
            table: None,
        })
    }

    fn table(&self, result: &PatternResult) -> Table {
        Table::project(&result.placements, COLUMNS, SideConvention::Flange)
    }
}

fn place_spoke(
    params: &SchranerParams,
    phase: &Phase,
    index: i64,
    order: u32,
    crosses_described: String,
) -> SpokePlacement {
    let h = params.h();
    let side = phase.side;
    let set = SpokeSet::of(index);
    let k = k_for_hub_hole(index, params.crosses as i64, side, h);
    let rim_hole = rim_hole_for_k(
        params.holes as i64,
        params.effective_start_rim_hole(),
        side,
        k,
    );
    let hub_hole = physical_hub_hole(index, params.start_hub_hole(side), h) as u32;

    let notes = match params.symmetry {
        Symmetry::Symmetrical => phase.note.to_string(),
        Symmetry::Asymmetrical => format!("{}. {}", phase.note, ASYMMETRY_NOTE),
    };

    SpokePlacement {
        spoke: SpokePlacement::spoke_id(side, SideConvention::Flange, hub_hole),
        order,
        step: phase.step.to_string(),
        side,
        odd_even_set: Some(set),
        k: Some(k as u32),
        hub_hole,
        heads: heads_for_set(set, params.invert_heads),
        rim_hole: rim_hole as u32,
        crosses_described,
        notes,
    }
}

/// Hub-hole index of the second reference spoke: `2c + 2` wrapped onto the
/// flange, or hole 2 for a radial pattern.
pub fn second_reference_index(crosses: i64, h: i64) -> i64 {
    if crosses == 0 {
        2
    } else {
        modulo(2 * crosses + 2 - 1, h) + 1
    }
}

/// Rim position index of hub-hole index `index` on `side`.
pub fn k_for_hub_hole(index: i64, crosses: i64, side: Side, h: i64) -> i64 {
    if SpokeSet::of(index) == SpokeSet::Odd {
        return index;
    }
    match side {
        Side::Drive => modulo(index - 1 - 2 * crosses, h) + 1,
        Side::NonDrive => modulo(index - 1 + 2 * crosses, h) + 1,
    }
}

/// Rim hole for position `k` on `side`, counted from the effective start hole.
pub fn rim_hole_for_k(holes: i64, effective_start: i64, side: Side, k: i64) -> i64 {
    let offset = match side {
        Side::Drive => 2 * (k - 1),
        Side::NonDrive => 1 + 2 * (k - 1),
    };
    modulo(effective_start - 1 + offset, holes) + 1
}

/// Physical flange hole after rotating by the chosen start hole.
pub fn physical_hub_hole(index: i64, start_hub_hole: i64, h: i64) -> i64 {
    modulo(index - 1 + (start_hub_hole - 1), h) + 1
}

/// Head orientation of a set.
pub fn heads_for_set(set: SpokeSet, invert_heads: bool) -> Heads {
    let heads = match set {
        SpokeSet::Odd => Heads::Out,
        SpokeSet::Even => Heads::In,
    };
    if invert_heads {
        heads.flipped()
    } else {
        heads
    }
}
