//! Playback error types
//!
//! Nothing here is fatal. The front-end turns these into status-bar
//! messages and keeps running.

use crate::structures::StructureError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlaybackError {
    /// Stepping backward from the first frame
    #[error("Already at the beginning of the run")]
    AtStart,

    /// Stepping forward after the run has been fully replayed
    #[error("No more steps available (run finished)")]
    AtEnd,

    /// Recorded frames would exceed the configured memory budget
    #[error("History memory limit exceeded: {current} bytes used, limit is {limit}")]
    HistoryLimitExceeded { current: usize, limit: usize },

    /// Navigation requested before any run was started
    #[error("Nothing to play: no run has been started")]
    NoRun,

    #[error(transparent)]
    Structure(#[from] StructureError),
}
