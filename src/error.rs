//! Error types for the crate's fallible edges.
//!
//! Geometry and model updates never fail; errors only come from settings
//! I/O, parsing user-supplied strings and file watching.

use thiserror::Error;

/// Errors that can occur while loading configuration or parsing input
#[derive(Error, Debug)]
pub enum InkboardError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Colour string that is not `#rrggbb` or `#rrggbbaa`
    #[error("Invalid colour: {0:?}")]
    InvalidColour(String),

    /// Key combination with an unknown modifier or no key name
    #[error("Invalid key combination: {0:?}")]
    InvalidKeyCombination(String),

    /// Pointer mapping table that binds one gesture twice
    #[error("Invalid pointer mapping: {0}")]
    InvalidPointerMapping(String),

    /// File watcher failure from notify
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    /// No platform config directory
    #[error("No config directory available")]
    NoConfigDir,
}

/// Result type alias for fallible crate operations
pub type InkboardResult<T> = Result<T, InkboardError>;
