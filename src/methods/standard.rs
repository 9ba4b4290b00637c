// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Standard four-group method.
//!
//! Each flange's hub holes split into every-other-hole lists: odd holes take
//! heads OUT, even holes heads IN. The four groups are the combinations of
//! {start side, other side} × {first orientation, second orientation}, laced
//! as `(start, first)`, `(other, first)`, `(start, second)`, `(other, second)`.
//!
//! Rim placement, 0-based internally:
//!
//! ```text
//! base   = (hub - 1) * 2 + parity + rim_offset
//! signed = direction * side_flip * 2 * crosses
//! rim    = mod(base + signed, holes) + 1
//! ```
//!
//! `parity` is 0 on the right flange and 1 on the left, `direction` is +1 for
//! heads OUT and -1 for heads IN, and `side_flip` is -1 on the left so both
//! flanges twist the same way round the wheel.
//!
//! Unlike Schraner, this method does not bound the cross count.

use super::{LacingMethod, MethodId, ResolvedParams};
use crate::error::LacingError;
use crate::geometry::{modulo, Heads, Side, SideConvention};
use crate::params::{
    derive_h, validate_holes, LaceOrder, ParamBag, ParamSpec, StartSide, ValveRule, WheelType,
};
use crate::pattern::{
    describe_crosses, rim_coverage, Column, Derived, PatternResult, SpokePlacement, Table,
};
use serde::Serialize;
use strum::VariantNames;

/// Smallest ring the four-group math works on.
pub const MIN_HOLES: i64 = 4;

pub const DEFAULT_CROSSES: i64 = 3;

const SUPPORTED_HOLES: &[u32] = &[20, 24, 28, 32, 36, 40];

const SCHEMA: &[ParamSpec] = &[
    ParamSpec::choice("wheelType", "Wheel type", WheelType::VARIANTS, "rear"),
    ParamSpec::integer("crosses", "Crosses", None, DEFAULT_CROSSES),
    ParamSpec::choice("startSide", "Start side", StartSide::VARIANTS, "right"),
    ParamSpec::choice("laceOrder", "Lace order", LaceOrder::VARIANTS, "headsOutFirst"),
    ParamSpec::choice("valveRule", "Valve rule", ValveRule::VARIANTS, "clearValve"),
];

const COLUMNS: &[Column] = &[
    Column::Spoke,
    Column::Order,
    Column::Step,
    Column::Side,
    Column::HubHole,
    Column::Heads,
    Column::RimHole,
    Column::CrossesDescribed,
    Column::Notes,
];

const STEPS: [&str; 4] = ["G1", "G2", "G3", "G4"];

/// Strict parameters of one Standard computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardParams {
    pub holes: u32,
    pub wheel_type: WheelType,
    /// Free integer; not bounded by hole count.
    pub crosses: i64,
    pub start_side: StartSide,
    pub lace_order: LaceOrder,
    pub valve_rule: ValveRule,
}

impl StandardParams {
    /// Resolve a parameter bag. Only the ring precondition is checked.
    ///
    /// # Errors
    ///
    /// - [`LacingError::InvalidHoleCount`] unless `holes` is even and >= 4
    /// - [`LacingError::HoleCountTooLarge`] above [`MAX_HOLES`](crate::params::MAX_HOLES)
    pub fn resolve(holes: i64, bag: &ParamBag) -> Result<Self, LacingError> {
        validate_holes(holes, MIN_HOLES)?;
        Ok(Self {
            holes: holes as u32,
            wheel_type: bag.choice_or("wheelType", WheelType::default()),
            crosses: bag.integer_or("crosses", DEFAULT_CROSSES),
            start_side: bag.choice_or("startSide", StartSide::default()),
            lace_order: bag.choice_or("laceOrder", LaceOrder::default()),
            valve_rule: bag.choice_or("valveRule", ValveRule::default()),
        })
    }

    /// Rim shift applied to every spoke by the valve rule.
    pub fn rim_offset(&self) -> i64 {
        match self.valve_rule {
            ValveRule::ClearValve => 0,
            ValveRule::AlignKeySpokeRightOfValve => 2,
        }
    }

    /// The four `(side, heads)` groups in lacing order.
    pub fn groups(&self) -> [(Side, Heads); 4] {
        let start = self.start_side.side();
        let other = start.other();
        let (first, second) = match self.lace_order {
            LaceOrder::HeadsOutFirst => (Heads::Out, Heads::In),
            LaceOrder::HeadsInFirst => (Heads::In, Heads::Out),
        };
        [
            (start, first),
            (other, first),
            (start, second),
            (other, second),
        ]
    }
}

/// The Standard four-group method.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMethod;

impl StandardMethod {
    pub fn new() -> Self {
        Self
    }

    /// Place every spoke, group by group, hub holes ascending within a group.
    pub fn place(&self, params: &StandardParams) -> Vec<SpokePlacement> {
        let holes = params.holes as i64;
        let h = derive_h(holes);
        let crosses_described = describe_crosses(params.crosses);

        let mut placements = Vec::with_capacity(params.holes as usize);
        for (step, (side, heads)) in STEPS.iter().zip(params.groups()) {
            let notes = format!(
                "{} flange, heads {}",
                side.label(SideConvention::Hand),
                heads
            );
            for hub in hub_holes(h, heads) {
                let rim = rim_hole(holes, hub, side, heads, params.crosses, params.rim_offset());
                placements.push(SpokePlacement {
                    spoke: SpokePlacement::spoke_id(side, SideConvention::Hand, hub as u32),
                    order: placements.len() as u32 + 1,
                    step: step.to_string(),
                    side,
                    odd_even_set: None,
                    k: None,
                    hub_hole: hub as u32,
                    heads,
                    rim_hole: rim as u32,
                    crosses_described: crosses_described.clone(),
                    notes: notes.clone(),
                });
            }
        }
        placements
    }
}

impl LacingMethod for StandardMethod {
    fn id(&self) -> MethodId {
        MethodId::Standard
    }

    fn supported_holes(&self) -> &'static [u32] {
        SUPPORTED_HOLES
    }

    fn schema(&self) -> &'static [ParamSpec] {
        SCHEMA
    }

    fn side_convention(&self) -> SideConvention {
        SideConvention::Hand
    }

    fn compute(&self, holes: i64, bag: &ParamBag) -> Result<PatternResult, LacingError> {
        let params = StandardParams::resolve(holes, bag)?;
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
            "computed Standard pattern"
        );

        Ok(PatternResult {
            method: MethodId::Standard,
            holes: params.holes,
            params: ResolvedParams::Standard(params),
            derived: Derived::for_holes(params.holes),
            placements,
            table: None,
        })
    }

    fn table(&self, result: &PatternResult) -> Table {
        Table::project(&result.placements, COLUMNS, SideConvention::Hand)
    }
}

/// Hub holes laced with the given head orientation: odd holes OUT, even holes IN.
pub fn hub_holes(h: i64, heads: Heads) -> Vec<i64> {
    let first = match heads {
        Heads::Out => 1,
        Heads::In => 2,
    };
    (first..=h).step_by(2).collect()
}

/// 1-based rim hole of a spoke.
pub fn rim_hole(
    holes: i64,
    hub_hole: i64,
    side: Side,
    heads: Heads,
    crosses: i64,
    rim_offset: i64,
) -> i64 {
    let (parity, side_flip) = match side {
        Side::Drive => (0, 1),
        Side::NonDrive => (1, -1),
    };
    let base = (hub_hole - 1) * 2 + parity + rim_offset;
    let signed = heads.direction() * side_flip * (2 * crosses);
    modulo(base + signed, holes) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_defaults() {
        let params = StandardParams::resolve(32, &ParamBag::new()).unwrap();
        assert_eq!(params.crosses, 3);
        assert_eq!(params.start_side, StartSide::Right);
        assert_eq!(params.lace_order, LaceOrder::HeadsOutFirst);
        assert_eq!(params.valve_rule, ValveRule::ClearValve);
        assert_eq!(params.rim_offset(), 0);
    }

    #[test]
    fn test_resolve_rejects_odd_ring() {
        assert_eq!(
            StandardParams::resolve(31, &ParamBag::new()),
            Err(LacingError::InvalidHoleCount {
                holes: 31,
                minimum: 4
            })
        );
        assert!(StandardParams::resolve(2, &ParamBag::new()).is_err());
    }

    #[test]
    fn test_groups_heads_in_first_from_left() {
        let bag = ParamBag::from_value(json!({
            "startSide": "left",
            "laceOrder": "headsInFirst",
        }));
        let params = StandardParams::resolve(32, &bag).unwrap();
        assert_eq!(
            params.groups(),
            [
                (Side::NonDrive, Heads::In),
                (Side::Drive, Heads::In),
                (Side::NonDrive, Heads::Out),
                (Side::Drive, Heads::Out),
            ]
        );
    }

    #[test]
    fn test_hub_holes() {
        assert_eq!(hub_holes(8, Heads::Out), vec![1, 3, 5, 7]);
        assert_eq!(hub_holes(8, Heads::In), vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_rim_hole() {
        // 32H 3x, no valve shift
        assert_eq!(rim_hole(32, 1, Side::Drive, Heads::Out, 3, 0), 7);
        assert_eq!(rim_hole(32, 15, Side::Drive, Heads::Out, 3, 0), 3);
        assert_eq!(rim_hole(32, 2, Side::Drive, Heads::In, 3, 0), 29);
        assert_eq!(rim_hole(32, 1, Side::NonDrive, Heads::Out, 3, 0), 28);
        assert_eq!(rim_hole(32, 2, Side::NonDrive, Heads::In, 3, 0), 10);
        // Valve shift moves everything two holes
        assert_eq!(rim_hole(32, 1, Side::Drive, Heads::Out, 3, 2), 9);
    }

    #[test]
    fn test_radial_lands_on_base_hole() {
        assert_eq!(rim_hole(32, 1, Side::Drive, Heads::Out, 0, 0), 1);
        assert_eq!(rim_hole(32, 1, Side::NonDrive, Heads::Out, 0, 0), 2);
        assert_eq!(rim_hole(32, 16, Side::NonDrive, Heads::In, 0, 0), 32);
    }
}
