// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Spoke head orientation and odd/even hub-hole sets.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Which face of the flange the spoke head sits against.
///
/// `OUT`: head on the outside of the flange, spoke runs outside to inside.
/// `IN`: head on the inside of the flange.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Heads {
    #[strum(serialize = "IN")]
    #[serde(rename = "IN")]
    In,
    #[strum(serialize = "OUT")]
    #[serde(rename = "OUT")]
    Out,
}

impl Heads {
    /// The opposite orientation.
    pub fn flipped(self) -> Self {
        match self {
            Heads::In => Heads::Out,
            Heads::Out => Heads::In,
        }
    }

    /// Tangential direction used by the Standard method: `+1` for OUT, `-1` for IN.
    pub fn direction(self) -> i64 {
        match self {
            Heads::Out => 1,
            Heads::In => -1,
        }
    }
}

/// Interleaved set a hub hole belongs to, by the parity of its 1-based index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize, Deserialize,
)]
pub enum SpokeSet {
    Odd,
    Even,
}

impl SpokeSet {
    /// Set of the 1-based hub-hole index `index`.
    pub fn of(index: i64) -> Self {
        if index % 2 == 1 {
            SpokeSet::Odd
        } else {
            SpokeSet::Even
        }
    }
}
