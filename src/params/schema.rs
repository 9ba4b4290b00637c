// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Declared parameter schemas.
//!
//! Each method publishes the fields it reads, their kind and default, so a
//! caller can build a form or validate input without knowing which method is
//! active.

use serde::Serialize;

/// Kind of value a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ParamKind {
    /// Whole number. `max: None` means unbounded or hole-count dependent.
    Integer { min: Option<i64>, max: Option<i64> },
    /// One of a fixed set of spellings.
    Choice { values: &'static [&'static str] },
    /// JSON boolean.
    Flag,
}

/// Default value of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamDefault {
    Integer(i64),
    Choice(&'static str),
    Flag(bool),
}

/// One field of a method's parameter bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    /// Key in the parameter bag.
    pub key: &'static str,
    /// Human readable label.
    pub label: &'static str,
    pub kind: ParamKind,
    pub default: ParamDefault,
}

impl ParamSpec {
    pub const fn integer(
        key: &'static str,
        label: &'static str,
        min: Option<i64>,
        default: i64,
    ) -> Self {
        Self {
            key,
            label,
            kind: ParamKind::Integer { min, max: None },
            default: ParamDefault::Integer(default),
        }
    }

    pub const fn choice(
        key: &'static str,
        label: &'static str,
        values: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            kind: ParamKind::Choice { values },
            default: ParamDefault::Choice(default),
        }
    }

    pub const fn flag(key: &'static str, label: &'static str, default: bool) -> Self {
        Self {
            key,
            label,
            kind: ParamKind::Flag,
            default: ParamDefault::Flag(default),
        }
    }
}

/// Look up a field of a schema by key.
pub fn find<'a>(schema: &'a [ParamSpec], key: &str) -> Option<&'a ParamSpec> {
    schema.iter().find(|spec| spec.key == key)
}
