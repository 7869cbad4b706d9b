//! Recorded frames for stepping backward and forward through a run

use super::errors::PlaybackError;
use crate::step::{Cell, Marks, OpStep, SortStep, Value};
use serde::Serialize;

/// What a frame shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FrameKind {
    /// State before the first step
    Initial,
    Compare,
    Swap,
    /// A structure operation step
    Operation,
    /// State after the run is exhausted, highlights cleared
    Complete,
}

/// Running totals, shown in the statistics pane
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub steps: usize,
    pub comparisons: usize,
    pub swaps: usize,
}

/// A step as the renderer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub cells: Vec<Cell>,
    pub marks: Marks,
    pub caption: String,
    pub kind: FrameKind,
    pub stats: Stats,
}

impl Frame {
    pub fn initial(cells: Vec<Cell>, caption: impl Into<String>) -> Self {
        Frame {
            cells,
            marks: Marks::NONE,
            caption: caption.into(),
            kind: FrameKind::Initial,
            stats: Stats::default(),
        }
    }

    pub fn from_sort_step(step: SortStep<Value>, prev: Stats) -> Self {
        let caption = step.describe();
        let mut stats = Stats {
            steps: prev.steps + 1,
            ..prev
        };
        let kind = if step.is_swap {
            stats.swaps += 1;
            FrameKind::Swap
        } else {
            stats.comparisons += 1;
            FrameKind::Compare
        };
        Frame {
            cells: step.array.into_iter().map(Some).collect(),
            marks: step.marks,
            caption,
            kind,
            stats,
        }
    }

    pub fn from_op_step(step: OpStep, prev: Stats) -> Self {
        Frame {
            cells: step.cells,
            marks: step.marks,
            caption: step.message,
            kind: FrameKind::Operation,
            stats: Stats {
                steps: prev.steps + 1,
                ..prev
            },
        }
    }

    pub fn complete(cells: Vec<Cell>, caption: impl Into<String>, stats: Stats) -> Self {
        Frame {
            cells,
            marks: Marks::NONE,
            caption: caption.into(),
            kind: FrameKind::Complete,
            stats,
        }
    }

    /// Estimate the memory usage of this frame in bytes
    pub fn estimated_size(&self) -> usize {
        std::mem::size_of::<Frame>()
            + self.cells.len() * std::mem::size_of::<Cell>()
            + self.caption.len()
    }
}

/// Frames recorded so far, bounded by an approximate byte budget
#[derive(Debug)]
pub struct FrameHistory {
    frames: Vec<Frame>,
    max_memory: usize,
    current_memory: usize,
}

impl FrameHistory {
    pub fn new(max_memory: usize) -> Self {
        FrameHistory {
            frames: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    pub fn push(&mut self, frame: Frame) -> Result<(), PlaybackError> {
        let frame_size = frame.estimated_size();

        if self.current_memory + frame_size > self.max_memory {
            return Err(PlaybackError::HistoryLimitExceeded {
                current: self.current_memory,
                limit: self.max_memory,
            });
        }

        self.current_memory += frame_size;
        self.frames.push(frame);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
        self.current_memory = 0;
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}
