// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumerated parameter values and their wire spellings.
//!
//! The spellings are the ones callers send (`right_of_valve`,
//! `headsOutFirst`, ...). Parsing is exact: any other spelling is treated as
//! absent by the resolvers.

use crate::geometry::Side;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString, VariantNames};

/// Rear or front wheel. Carried through to the result; does not change geometry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WheelType {
    #[default]
    Rear,
    Front,
}

/// Whether both flanges use the same pattern.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Symmetry {
    #[default]
    Symmetrical,
    /// Accepted, but only annotates the output for now.
    Asymmetrical,
}

/// Which side of the valve the start rim hole sits on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ValveReference {
    /// Start hole is the first hole clockwise from the valve (DS viewpoint).
    #[default]
    RightOfValve,
    /// Start hole is the first hole counter-clockwise from the valve.
    LeftOfValve,
}

/// Flange laced first in the Standard method.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StartSide {
    #[default]
    Right,
    Left,
}

impl StartSide {
    pub fn side(self) -> Side {
        match self {
            StartSide::Right => Side::Drive,
            StartSide::Left => Side::NonDrive,
        }
    }
}

/// Head orientation laced first in the Standard method.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum LaceOrder {
    #[default]
    HeadsOutFirst,
    HeadsInFirst,
}

/// How the Standard method positions spokes relative to the valve.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum ValveRule {
    /// No rim shift.
    #[default]
    ClearValve,
    /// Shift every rim hole two places clockwise.
    AlignKeySpokeRightOfValve,
}
