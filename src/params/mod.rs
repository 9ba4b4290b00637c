// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parameter resolution and validation.
//!
//! Callers send a loosely typed [`ParamBag`]; each method resolves it into a
//! strict record (see `methods::schraner::SchranerParams` and
//! `methods::standard::StandardParams`). Resolution never fails: missing or
//! malformed fields take their defaults. Validation happens afterwards and
//! rejects the whole request.
//!
//! - `bag`: the tolerant reader
//! - `choices`: enumerated parameter values
//! - `limits`: hole-count and cross-count limits
//! - `schema`: declared parameter schemas

pub mod bag;
pub mod choices;
pub mod limits;
pub mod schema;

pub use bag::ParamBag;
pub use choices::{LaceOrder, StartSide, Symmetry, ValveReference, ValveRule, WheelType};
pub use limits::{
    common_crosses, derive_h, max_crosses, validate_crosses, validate_holes, MAX_HOLES,
    MIN_HOLES,
};
pub use schema::{ParamDefault, ParamKind, ParamSpec};
