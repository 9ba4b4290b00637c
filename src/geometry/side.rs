// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hub flange sides.
//!
//! Both lacing methods talk about the same two flanges but name them
//! differently: the Schraner tables say `DS`/`NDS` (drive side, non-drive
//! side), the Standard tables say `right`/`left`. Internally there is one
//! [`Side`] type; [`SideConvention`] chooses the labels at display time.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// A hub flange.
///
/// Serialized as `"DS"` / `"NDS"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Serialize, Deserialize,
)]
pub enum Side {
    /// Drive side (cassette side of a rear wheel). The right flange.
    #[serde(rename = "DS")]
    Drive,
    /// Non-drive side. The left flange; rotor side of a front wheel.
    #[serde(rename = "NDS")]
    NonDrive,
}

impl Side {
    /// The opposite flange.
    pub fn other(self) -> Self {
        match self {
            Side::Drive => Side::NonDrive,
            Side::NonDrive => Side::Drive,
        }
    }

    /// Display label under the given naming convention.
    pub fn label(self, convention: SideConvention) -> &'static str {
        match (convention, self) {
            (SideConvention::Flange, Side::Drive) => "DS",
            (SideConvention::Flange, Side::NonDrive) => "NDS",
            (SideConvention::Hand, Side::Drive) => "right",
            (SideConvention::Hand, Side::NonDrive) => "left",
        }
    }

    /// Prefix used when building spoke identifiers such as `DS-01` or `R-01`.
    pub fn prefix(self, convention: SideConvention) -> &'static str {
        match (convention, self) {
            (SideConvention::Flange, side) => side.label(SideConvention::Flange),
            (SideConvention::Hand, Side::Drive) => "R",
            (SideConvention::Hand, Side::NonDrive) => "L",
        }
    }
}

/// How a method names the two flanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SideConvention {
    /// `DS` / `NDS`
    Flange,
    /// `right` / `left`
    Hand,
}
