// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types.
//!
//! Every failure is reported before any spoke is placed; no computation ever
//! returns a partial pattern.

use std::path::PathBuf;

/// Errors returned by pattern computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LacingError {
    /// Hole count is odd or below the method's minimum.
    #[error("invalid hole count {holes}: holes must be even and >= {minimum}")]
    InvalidHoleCount { holes: i64, minimum: i64 },

    /// Hole count is above [`MAX_HOLES`](crate::params::MAX_HOLES).
    #[error("hole count {holes} exceeds the maximum of {maximum}")]
    HoleCountTooLarge { holes: i64, maximum: i64 },

    /// Cross count is negative or above `max_crosses(holes)`.
    #[error("{crosses} crosses is out of range for {holes} holes (maximum {max})")]
    CrossesExceedMaximum { holes: i64, crosses: i64, max: i64 },

    /// No lacing method with this identifier.
    #[error("unknown lacing method: {0}")]
    UnknownMethod(String),
}

/// Errors loading an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
