// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Engine configuration.
//!
//! Preferences are passed in explicitly rather than read from ambient state.
//! Every field has a default, so a config file only names what it changes.
//!
//! ```json
//! { "includeTable": false, "clearance": { "window": 3 } }
//! ```

use crate::clearance::ClearanceConfig;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options that shape a registry's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Attach the tabular projection to every result.
    pub include_table: bool,
    pub clearance: ClearanceConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            include_table: true,
            clearance: ClearanceConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded engine config");
        Ok(config)
    }
}
