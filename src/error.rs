//! Crate-level error type
//!
//! Engine failures never show up here: a full stack or a missing value is a
//! narrated step, not an error. These cover everything around the engine.

use crate::config::ConfigError;
use crate::playback::PlaybackError;
use crate::structures::StructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SorttyError {
    /// IO errors (terminal, log file, stdout)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors from `--dump`
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),

    #[error(transparent)]
    Structure(#[from] StructureError),
}

pub type Result<T> = std::result::Result<T, SorttyError>;
