//! Error types for the starfield engine.
//!
//! The simulation itself never fails; only configuration parsing and surface
//! acquisition by a host bridge produce errors.

use thiserror::Error;

/// Result type for fallible starfield operations.
pub type StarfieldResult<T> = Result<T, StarfieldError>;

#[derive(Error, Debug)]
pub enum StarfieldError {
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("drawing surface not found: {0}")]
    MissingSurface(String),

    #[error("2D context unavailable: {0}")]
    Context(String),
}
