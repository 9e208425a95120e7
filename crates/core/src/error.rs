//! Error types for the skyfx core.

use thiserror::Error;

/// Errors produced while configuring or exporting the sky engine.
///
/// Ticking never fails; every variant here is raised at construction time
/// or by an outer surface (CLI, snapshot export).
#[derive(Debug, Error)]
pub enum EngineError {
    /// A palette table could not be constructed (e.g. it was empty).
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette name did not match any built-in palette.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// A parameter override was present but unusable.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// An I/O failure while writing output.
    #[error("i/o error: {0}")]
    Io(String),
}
