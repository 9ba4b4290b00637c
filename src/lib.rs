// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Spoke lacing patterns for bicycle wheels.
//!
//! Given a rim hole count, a cross count and a few starting references, the
//! engine assigns every spoke a hub hole, a rim hole, a head orientation and
//! a description of its crossing path, in the order a mechanic laces them at
//! the bench.
//!
//! # Architecture
//!
//! Every computation is a pure function of its inputs:
//!
//! 1. A caller picks a [`MethodId`] and passes a hole count and a loosely
//!    typed [`ParamBag`] to the [`MethodRegistry`].
//! 2. The method resolves the bag into a strict parameter record, filling
//!    defaults, and validates it. Validation failures abort before any spoke
//!    is placed.
//! 3. The method places spokes and returns a [`PatternResult`] with an
//!    ordered list of [`SpokePlacement`]s.
//! 4. The registry attaches a tabular projection if configured to.
//!
//! Nothing is cached between calls.
//!
//! # Methods
//!
//! - **Schraner**: valve-anchored workshop sequence R1 → R2 → R3 → L1 → L3 → L4.
//!   Hole counts must be even and at least 20; cross counts are bounded per
//!   wheel size.
//! - **Standard**: four groups, {start side, other side} × {heads OUT, heads IN}.
//!   Cross counts are not bounded.
//!
//! # Conventions
//!
//! Everything is described from the drive-side viewpoint with the valve at
//! 12 o'clock. Rim holes are numbered clockwise: hole 1 is the first hole
//! clockwise of the valve, hole N the first counter-clockwise. Flange holes
//! are numbered 1..=H (H = holes / 2) on each flange.
//!
//! # Example
//!
//! ```
//! use spoke_lacing::{MethodId, MethodRegistry, ParamBag};
//! use spoke_lacing::geometry::Heads;
//!
//! let registry = MethodRegistry::new();
//! let bag = ParamBag::new().with("crosses", 3).with("valveReference", "right_of_valve");
//! let result = registry.compute(MethodId::Schraner, 32, &bag).unwrap();
//!
//! let first = &result.placements[0];
//! assert_eq!(first.spoke, "DS-01");
//! assert_eq!(first.rim_hole, 32);
//! assert_eq!(first.heads, Heads::Out);
//! ```

pub mod clearance;
pub mod config;
pub mod error;
pub mod geometry;
pub mod methods;
pub mod params;
pub mod pattern;
pub mod registry;

// Re-export commonly used types
pub use config::EngineConfig;
pub use error::{ConfigError, LacingError};
pub use methods::{LacingMethod, MethodId};
pub use params::ParamBag;
pub use pattern::{PatternResult, SpokePlacement};
pub use registry::MethodRegistry;
