//! Error types for the cellgrid engine.
//!
//! A layout pass never fails: out-of-range parameters are clamped and
//! degenerate geometry collapses to an empty grid. Errors only arise when a
//! host hands us configuration that cannot be read at all.

use thiserror::Error;

/// Errors raised while reading host configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown anchor: {name}")]
    UnknownAnchor { name: String },

    #[error("Unknown direction: {name}")]
    UnknownDirection { name: String },

    #[cfg(feature = "serde")]
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
