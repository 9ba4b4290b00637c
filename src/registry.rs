// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Method registry.
//!
//! The registry maps a [`MethodId`] to its [`LacingMethod`], so a caller can
//! compute, list supported hole counts, or read a parameter schema without
//! branching on which method is active.
//!
//! # Example
//!
//! ```
//! use spoke_lacing::{MethodId, MethodRegistry, ParamBag};
//!
//! let registry = MethodRegistry::new();
//! let holes = registry.normalize_hole_count(MethodId::Schraner, 30).unwrap();
//! assert_eq!(holes, 28);
//!
//! let result = registry
//!     .compute(MethodId::Schraner, holes as i64, &ParamBag::new())
//!     .unwrap();
//! assert_eq!(result.placements.len(), 28);
//! assert!(result.table.is_some());
//! ```

use crate::config::EngineConfig;
use crate::error::LacingError;
use crate::methods::{LacingMethod, MethodId, SchranerMethod, StandardMethod};
use crate::params::ParamBag;
use crate::pattern::PatternResult;
use std::str::FromStr;

/// Registered lacing methods plus the configuration applied to their output.
#[derive(Debug)]
pub struct MethodRegistry {
    methods: Vec<Box<dyn LacingMethod>>,
    config: EngineConfig,
}

impl MethodRegistry {
    /// Registry with the built-in methods and default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Registry with the built-in methods.
    pub fn with_config(config: EngineConfig) -> Self {
        let mut registry = Self::empty(config);
        registry.register(Box::new(SchranerMethod::new()));
        registry.register(Box::new(StandardMethod::new()));
        registry
    }

    /// Registry with no methods.
    pub fn empty(config: EngineConfig) -> Self {
        Self {
            methods: Vec::new(),
            config,
        }
    }

    /// Add a method, replacing any method with the same id.
    pub fn register(&mut self, method: Box<dyn LacingMethod>) {
        let id = method.id();
        self.methods.retain(|m| m.id() != id);
        self.methods.push(method);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registered methods, in registration order.
    pub fn methods(&self) -> impl Iterator<Item = &dyn LacingMethod> {
        self.methods.iter().map(|m| m.as_ref())
    }

    pub fn get(&self, id: MethodId) -> Result<&dyn LacingMethod, LacingError> {
        self.methods()
            .find(|m| m.id() == id)
            .ok_or_else(|| LacingError::UnknownMethod(id.to_string()))
    }

    /// Look a method up by its wire name (`"schraner"`, `"standard"`).
    pub fn lookup(&self, name: &str) -> Result<&dyn LacingMethod, LacingError> {
        let id =
            MethodId::from_str(name).map_err(|_| LacingError::UnknownMethod(name.to_string()))?;
        self.get(id)
    }

    /// Compute a pattern with the given method.
    ///
    /// The table projection is attached when the configuration asks for it.
    pub fn compute(
        &self,
        id: MethodId,
        holes: i64,
        params: &ParamBag,
    ) -> Result<PatternResult, LacingError> {
        let method = self.get(id)?;
        let unknown = params.unknown_keys(method.schema());
        if !unknown.is_empty() {
            tracing::debug!(method = %id, ?unknown, "ignoring parameters the method does not read");
        }
        let mut result = method.compute(holes, params)?;
        if self.config.include_table {
            result.table = Some(method.table(&result));
        }
        Ok(result)
    }

    /// Snap a requested hole count to one the method supports.
    pub fn normalize_hole_count(&self, id: MethodId, requested: i64) -> Result<u32, LacingError> {
        let method = self.get(id)?;
        nearest_supported(requested, method.supported_holes())
            .ok_or_else(|| LacingError::UnknownMethod(id.to_string()))
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The supported value closest to `requested`; ties go to the earlier entry.
///
/// Returns `None` only for an empty list.
pub fn nearest_supported(requested: i64, supported: &[u32]) -> Option<u32> {
    let mut best: Option<u32> = None;
    for &candidate in supported {
        let closer = match best {
            None => true,
            Some(current) => {
                (candidate as i64 - requested).abs() < (current as i64 - requested).abs()
            }
        };
        if closer {
            best = Some(candidate);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_supported() {
        let supported = [20, 24, 28, 32, 36];
        assert_eq!(nearest_supported(32, &supported), Some(32));
        assert_eq!(nearest_supported(33, &supported), Some(32));
        assert_eq!(nearest_supported(10, &supported), Some(20));
        assert_eq!(nearest_supported(100, &supported), Some(36));
        assert_eq!(nearest_supported(-5, &supported), Some(20));
    }

    #[test]
    fn test_nearest_supported_ties_go_first() {
        let supported = [20, 24, 28, 32, 36];
        assert_eq!(nearest_supported(30, &supported), Some(28));
        assert_eq!(nearest_supported(34, &supported), Some(32));
        assert_eq!(nearest_supported(22, &supported), Some(20));
    }

    #[test]
    fn test_nearest_supported_empty() {
        assert_eq!(nearest_supported(32, &[]), None);
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut registry = MethodRegistry::new();
        registry.register(Box::new(SchranerMethod::new()));
        assert_eq!(registry.methods().count(), 2);
    }

    #[test]
    fn test_empty_registry_reports_unknown_method() {
        let registry = MethodRegistry::empty(EngineConfig::default());
        assert_eq!(
            registry.get(MethodId::Standard).unwrap_err(),
            LacingError::UnknownMethod("standard".to_string())
        );
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = MethodRegistry::new();
        assert_eq!(registry.lookup("standard").unwrap().id(), MethodId::Standard);
        assert_eq!(
            registry.lookup("radial").unwrap_err(),
            LacingError::UnknownMethod("radial".to_string())
        );
    }
}
