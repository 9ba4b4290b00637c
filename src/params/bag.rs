// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Loosely typed parameter bag.
//!
//! Callers (forms, command lines, JSON bodies) hand the engine whatever they
//! have. Each method's resolver reads the fields it knows through the typed
//! accessors here; anything missing or malformed silently takes the field's
//! default. Unknown keys are ignored by resolution; [`ParamBag::unknown_keys`]
//! lists them against a method's schema.
//!
//! # Examples
//!
//! ```
//! use spoke_lacing::params::ParamBag;
//! use serde_json::json;
//!
//! let bag = ParamBag::from_value(json!({ "crosses": "2", "invertHeads": "yes" }));
//! assert_eq!(bag.integer_or("crosses", 3), 2);
//! // Only real booleans are accepted
//! assert!(!bag.flag_or("invertHeads", false));
//! ```

use super::schema::{self, ParamSpec};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// Largest magnitude accepted for integer fields (2^53 - 1, exact in an `f64`).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A key-value mapping of loosely typed method parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamBag(Map<String, Value>);

impl ParamBag {
    /// Create an empty bag. Every field resolves to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bag from a JSON value. Anything other than an object yields an empty bag.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Raw value of a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric coercion of a field.
    ///
    /// JSON numbers and numeric strings (surrounding whitespace allowed) are
    /// accepted. Returns `None` for anything else, and for non-finite results.
    pub fn number(&self, key: &str) -> Option<f64> {
        let parsed = match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
            _ => None,
        };
        parsed.filter(|n| n.is_finite())
    }

    /// Integer field, or `default` when absent, non-numeric, or not a whole number.
    pub fn integer_or(&self, key: &str, default: i64) -> i64 {
        match self.number(key) {
            Some(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => n as i64,
            _ => {
                self.note_fallback(key);
                default
            }
        }
    }

    /// Enumerated field, or `default` unless the value is a string naming an allowed variant.
    pub fn choice_or<T: FromStr>(&self, key: &str, default: T) -> T {
        match self.get(key) {
            Some(Value::String(s)) => match s.parse::<T>() {
                Ok(value) => value,
                Err(_) => {
                    self.note_fallback(key);
                    default
                }
            },
            _ => {
                self.note_fallback(key);
                default
            }
        }
    }

    /// Boolean field, or `default` unless the value is already a JSON boolean.
    pub fn flag_or(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            _ => {
                self.note_fallback(key);
                default
            }
        }
    }

    /// Keys the schema does not declare, in key order.
    pub fn unknown_keys<'a>(&'a self, declared: &[ParamSpec]) -> Vec<&'a str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|key| schema::find(declared, key).is_none())
            .collect()
    }

    fn note_fallback(&self, key: &str) {
        if let Some(value) = self.get(key) {
            tracing::debug!(key, %value, "parameter value not accepted, using default");
        }
    }
}

impl From<Map<String, Value>> for ParamBag {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ParamBag {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
