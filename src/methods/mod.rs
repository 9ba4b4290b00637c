// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lacing methods.
//!
//! A method turns a hole count and a [`ParamBag`] into an ordered list of
//! spoke placements. Methods are stateless: every call is independent and
//! deterministic, and validation failures abort before any spoke is placed.
//!
//! # Organization
//!
//! - `schraner`: valve-anchored workshop sequence (R1 → R2 → R3 → L1 → L3 → L4)
//! - `standard`: four-group sequence
//!
//! # Example
//!
//! ```
//! use spoke_lacing::methods::{LacingMethod, SchranerMethod};
//! use spoke_lacing::params::ParamBag;
//!
//! let method = SchranerMethod::new();
//! let result = method.compute(32, &ParamBag::new().with("crosses", 3)).unwrap();
//! assert_eq!(result.placements.len(), 32);
//! assert_eq!(result.placements[0].spoke, "DS-01");
//! ```

pub mod schraner;
pub mod standard;

pub use schraner::{SchranerMethod, SchranerParams};
pub use standard::{StandardMethod, StandardParams};

use crate::error::LacingError;
use crate::geometry::SideConvention;
use crate::params::{ParamBag, ParamSpec};
use crate::pattern::{PatternResult, Table};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Identifier of a lacing method.
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
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MethodId {
    Schraner,
    Standard,
}

/// Resolved parameters of a computation, per method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResolvedParams {
    Schraner(SchranerParams),
    Standard(StandardParams),
}

/// A lacing method.
///
/// Implementations hold no per-call state, so a single instance can serve
/// concurrent callers.
pub trait LacingMethod: Debug + Send + Sync {
    fn id(&self) -> MethodId;

    /// Hole counts the method offers, ascending.
    fn supported_holes(&self) -> &'static [u32];

    /// Fields the method reads from the parameter bag.
    fn schema(&self) -> &'static [ParamSpec];

    /// How the method labels the two flanges.
    fn side_convention(&self) -> SideConvention;

    /// Resolve, validate and place every spoke.
    ///
    /// The returned result carries no table; see [`LacingMethod::table`].
    fn compute(&self, holes: i64, params: &ParamBag) -> Result<PatternResult, LacingError>;

    /// Tabular projection of a result produced by this method.
    fn table(&self, result: &PatternResult) -> Table;
}
