// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Resolved parameters of the Schraner method.

use crate::error::LacingError;
use crate::geometry::{modulo, wrap_hole, Side};
use crate::params::{
    derive_h, max_crosses, validate_crosses, validate_holes, ParamBag, ParamSpec, Symmetry,
    ValveReference, WheelType, MIN_HOLES,
};
use serde::Serialize;
use strum::VariantNames;

/// Preferred cross count when the bag does not name one.
pub const DEFAULT_CROSSES: i64 = 3;

pub(crate) const SCHEMA: &[ParamSpec] = &[
    ParamSpec::choice("wheelType", "Wheel type", WheelType::VARIANTS, "rear"),
    ParamSpec::integer("crosses", "Crosses", Some(0), DEFAULT_CROSSES),
    ParamSpec::choice("symmetry", "Symmetry", Symmetry::VARIANTS, "symmetrical"),
    ParamSpec::flag("invertHeads", "Invert heads", false),
    ParamSpec::integer("startRimHole", "Start rim hole", Some(1), 1),
    ParamSpec::choice(
        "valveReference",
        "Valve reference",
        ValveReference::VARIANTS,
        "right_of_valve",
    ),
    ParamSpec::integer("startHubHoleDS", "Start hub hole (DS)", Some(1), 1),
    ParamSpec::integer("startHubHoleNDS", "Start hub hole (NDS)", Some(1), 1),
];

/// Strict, validated parameters of one Schraner computation.
///
/// Hole indices are stored already wrapped onto their rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchranerParams {
    pub holes: u32,
    pub wheel_type: WheelType,
    pub crosses: u32,
    pub symmetry: Symmetry,
    pub invert_heads: bool,
    /// 1..=holes
    pub start_rim_hole: u32,
    pub valve_reference: ValveReference,
    /// 1..=H
    #[serde(rename = "startHubHoleDS")]
    pub start_hub_hole_ds: u32,
    /// 1..=H
    #[serde(rename = "startHubHoleNDS")]
    pub start_hub_hole_nds: u32,
}

impl SchranerParams {
    /// Resolve a parameter bag for a wheel of `holes` holes, then validate.
    ///
    /// Missing or malformed fields take their defaults. The default cross
    /// count is [`DEFAULT_CROSSES`], lowered to the wheel's maximum on small
    /// wheels. An explicit cross count is never adjusted.
    ///
    /// # Errors
    ///
    /// - [`LacingError::InvalidHoleCount`] unless `holes` is even and >= 20
    /// - [`LacingError::HoleCountTooLarge`] above [`MAX_HOLES`](crate::params::MAX_HOLES)
    /// - [`LacingError::CrossesExceedMaximum`] unless crosses is in `[0, max_crosses(holes)]`
    pub fn resolve(holes: i64, bag: &ParamBag) -> Result<Self, LacingError> {
        validate_holes(holes, MIN_HOLES)?;
        let crosses = bag.integer_or("crosses", DEFAULT_CROSSES.min(max_crosses(holes)));
        validate_crosses(holes, crosses)?;

        let h = derive_h(holes);
        Ok(Self {
            holes: holes as u32,
            wheel_type: bag.choice_or("wheelType", WheelType::default()),
            crosses: crosses as u32,
            symmetry: bag.choice_or("symmetry", Symmetry::default()),
            invert_heads: bag.flag_or("invertHeads", false),
            start_rim_hole: wrap_hole(holes, bag.integer_or("startRimHole", 1)) as u32,
            valve_reference: bag.choice_or("valveReference", ValveReference::default()),
            start_hub_hole_ds: wrap_hole(h, bag.integer_or("startHubHoleDS", 1)) as u32,
            start_hub_hole_nds: wrap_hole(h, bag.integer_or("startHubHoleNDS", 1)) as u32,
        })
    }

    /// Holes per flange.
    pub fn h(&self) -> i64 {
        derive_h(self.holes as i64)
    }

    /// Chosen starting hub hole of a flange.
    pub fn start_hub_hole(&self, side: Side) -> i64 {
        match side {
            Side::Drive => self.start_hub_hole_ds as i64,
            Side::NonDrive => self.start_hub_hole_nds as i64,
        }
    }

    /// The valve-right rim hole that anchors rim placement.
    ///
    /// With `right_of_valve` the chosen hole is the valve-right spoke's
    /// neighbour, so the anchor moves one hole back; with `left_of_valve` the
    /// chosen hole is used unchanged.
    pub fn effective_start_rim_hole(&self) -> i64 {
        let holes = self.holes as i64;
        let start = self.start_rim_hole as i64;
        match self.valve_reference {
            ValveReference::RightOfValve => modulo(start - 2, holes) + 1,
            ValveReference::LeftOfValve => start,
        }
    }
}
