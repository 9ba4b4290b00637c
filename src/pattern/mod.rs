// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Output model of a pattern computation.
//!
//! A computation yields a [`PatternResult`]: the resolved parameters and an
//! ordered list of [`SpokePlacement`]s. The `order` field is the sequence a
//! mechanic follows at the bench; consumers must not re-sort it.
//!
//! - `coverage`: diagnostic check that every rim hole is used once
//! - `table`: column-labelled projection for tabular display

pub mod coverage;
pub mod table;

pub use coverage::{rim_coverage, Coverage};
pub use table::{Column, Table};

use crate::geometry::{Heads, Side, SideConvention, SpokeSet};
use crate::methods::{MethodId, ResolvedParams};
use serde::{Deserialize, Serialize};

/// Placement of a single spoke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpokePlacement {
    /// Identifier such as `DS-01` or `L-08`, from the side and physical hub hole.
    pub spoke: String,
    /// 1-based install order.
    pub order: u32,
    /// Block of work this spoke belongs to (`R1`, `G3`, ...).
    pub step: String,
    /// Always `DS`/`NDS` on the wire; method-specific labels live in
    /// `spoke` and the table.
    pub side: Side,
    /// Odd/even set of the hub-hole index (Schraner only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odd_even_set: Option<SpokeSet>,
    /// Position index used for rim placement (Schraner only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<u32>,
    /// Physical flange hole, 1..=H.
    pub hub_hole: u32,
    pub heads: Heads,
    /// Rim hole, 1..=holes.
    pub rim_hole: u32,
    pub crosses_described: String,
    pub notes: String,
}

impl SpokePlacement {
    /// Build the `{prefix}-{hub:02}` identifier for a spoke.
    pub fn spoke_id(side: Side, convention: SideConvention, hub_hole: u32) -> String {
        format!("{}-{:02}", side.prefix(convention), hub_hole)
    }
}

/// Counts derived from the hole count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derived {
    /// Holes per flange.
    #[serde(rename = "H")]
    pub h: u32,
    #[serde(rename = "spokesPerSide")]
    pub spokes_per_side: u32,
    #[serde(rename = "spokesPerSet")]
    pub spokes_per_set: u32,
}

impl Derived {
    pub fn for_holes(holes: u32) -> Self {
        let h = holes / 2;
        Self {
            h,
            spokes_per_side: h,
            spokes_per_set: h / 2,
        }
    }
}

/// Complete output of one computation. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternResult {
    pub method: MethodId,
    pub holes: u32,
    pub params: ResolvedParams,
    pub derived: Derived,
    /// Placements in install order.
    pub placements: Vec<SpokePlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<Table>,
}

impl PatternResult {
    /// Placements on one flange, in install order.
    pub fn side(&self, side: Side) -> impl Iterator<Item = &SpokePlacement> {
        self.placements.iter().filter(move |p| p.side == side)
    }

    /// Placements belonging to one step, in install order.
    pub fn step<'a>(&'a self, step: &'a str) -> impl Iterator<Item = &'a SpokePlacement> {
        self.placements.iter().filter(move |p| p.step == step)
    }
}

/// Human readable crossing description shared by all methods.
///
/// # Examples
///
/// ```
/// use spoke_lacing::pattern::describe_crosses;
///
/// assert_eq!(describe_crosses(0), "0x radial");
/// assert_eq!(describe_crosses(3), "3x (over 2, under 1)");
/// ```
pub fn describe_crosses(crosses: i64) -> String {
    if crosses == 0 {
        "0x radial".to_string()
    } else {
        format!("{}x (over {}, under 1)", crosses, crosses - 1)
    }
}
