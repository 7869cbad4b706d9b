//! Playback session with time travel
//!
//! A [`Session`] owns the active run and every [`Frame`] pulled from it so
//! far. Stepping forward replays recorded frames while there are any ahead of
//! the cursor and only then pulls a new step from the live run. Stepping
//! backward never touches the run.
//!
//! ```text
//! history: [initial] [step 1] [step 2] ... [complete]
//!                        ^ position
//! ```
//!
//! Once the run is exhausted a final `Complete` frame with highlights cleared
//! is recorded and the run is dropped. For sorts its contents are the run's
//! final buffer, which differs from the last step when merge sort finishes
//! with silent copy-outs.

pub mod errors;
pub mod history;

pub use errors::PlaybackError;
pub use history::{Frame, FrameHistory, FrameKind, Stats};

use crate::sorting::{Algorithm, SortRun};
use crate::step::{cells_of, OpRun, Value};
use crate::structures::{Action, Container, StructureKind};
use std::fmt;

/// What the active run is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Sort(Algorithm),
    Operation {
        structure: StructureKind,
        action: Action,
    },
    Demo(StructureKind),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Sort(algorithm) => write!(f, "{}", algorithm),
            Subject::Operation { structure, action } => write!(f, "{}: {}", structure, action),
            Subject::Demo(structure) => write!(f, "{}: demo", structure),
        }
    }
}

enum Source {
    Sort(SortRun<Value>),
    Operation(OpRun),
}

/// Drives one run at a time and records its frames
pub struct Session {
    history: FrameHistory,
    position: usize,
    source: Option<Source>,
    subject: Option<Subject>,
}

impl Session {
    pub fn new(history_limit: usize) -> Self {
        Session {
            history: FrameHistory::new(history_limit),
            position: 0,
            source: None,
            subject: None,
        }
    }

    /// Start sorting a copy of `input`, dropping any previous run
    pub fn start_sort(&mut self, algorithm: Algorithm, input: &[Value]) -> Result<(), PlaybackError> {
        let initial = Frame::initial(
            cells_of(input),
            format!("{} on {} elements", algorithm, input.len()),
        );
        self.begin(
            Subject::Sort(algorithm),
            Source::Sort(algorithm.run(input)),
            initial,
        )
    }

    /// Apply `action` to `structure` and play back its narration
    ///
    /// The structure is mutated before this returns. An unsupported action
    /// leaves both the structure and the current run untouched.
    pub fn start_operation(
        &mut self,
        structure: &mut dyn Container,
        action: Action,
    ) -> Result<(), PlaybackError> {
        let before = structure.to_array();
        let run = structure.perform(action)?;
        let subject = Subject::Operation {
            structure: structure.kind(),
            action,
        };
        let initial = Frame::initial(before, subject.to_string());
        self.begin(subject, Source::Operation(run), initial)
    }

    /// Play the structure's traversal, a search for its first element, or a
    /// peek, whichever it supports
    pub fn start_demo(&mut self, structure: &mut dyn Container) -> Result<(), PlaybackError> {
        let kind = structure.kind();
        let cells = structure.to_array();
        let caption = if cells.is_empty() {
            format!("{} is empty", kind)
        } else {
            format!("{}: demo", kind)
        };
        let run = structure.demo().unwrap_or_default();
        self.begin(Subject::Demo(kind), Source::Operation(run), Frame::initial(cells, caption))
    }

    fn begin(&mut self, subject: Subject, source: Source, initial: Frame) -> Result<(), PlaybackError> {
        tracing::info!(%subject, "starting playback");
        self.history.clear();
        self.position = 0;
        self.source = None;
        self.subject = None;

        if let Err(err) = self.history.push(initial) {
            tracing::warn!(%err, "initial frame rejected");
            return Err(err);
        }
        self.source = Some(source);
        self.subject = Some(subject);
        Ok(())
    }

    /// Move to the next frame, pulling a new step from the run if needed
    pub fn step_forward(&mut self) -> Result<&Frame, PlaybackError> {
        if self.history.is_empty() {
            return Err(PlaybackError::NoRun);
        }
        if self.position + 1 >= self.history.len() {
            self.pull()?;
        }
        self.position += 1;
        self.frame_at(self.position)
    }

    pub fn step_backward(&mut self) -> Result<&Frame, PlaybackError> {
        if self.history.is_empty() {
            return Err(PlaybackError::NoRun);
        }
        if self.position == 0 {
            return Err(PlaybackError::AtStart);
        }
        self.position -= 1;
        self.frame_at(self.position)
    }

    /// Return to the initial frame
    pub fn rewind_to_start(&mut self) -> Result<&Frame, PlaybackError> {
        if self.history.is_empty() {
            return Err(PlaybackError::NoRun);
        }
        self.position = 0;
        self.frame_at(0)
    }

    /// Drain the run and move to its final frame
    pub fn jump_to_end(&mut self) -> Result<&Frame, PlaybackError> {
        if self.history.is_empty() {
            return Err(PlaybackError::NoRun);
        }
        loop {
            match self.step_forward() {
                Ok(_) => continue,
                Err(PlaybackError::AtEnd) => break,
                Err(err) => return Err(err),
            }
        }
        self.frame_at(self.position)
    }

    fn pull(&mut self) -> Result<(), PlaybackError> {
        let Some(last) = self.history.last() else {
            return Err(PlaybackError::NoRun);
        };
        let stats = last.stats;

        let mut exhausted = false;
        let frame = match self.source.as_mut() {
            None => return Err(PlaybackError::AtEnd),
            Some(Source::Sort(run)) => match run.next() {
                Some(step) => Frame::from_sort_step(step, stats),
                None => {
                    exhausted = true;
                    Frame::complete(cells_of(run.array()), "Sorting complete", stats)
                }
            },
            Some(Source::Operation(run)) => match run.next() {
                Some(step) => Frame::from_op_step(step, stats),
                None => {
                    exhausted = true;
                    Frame::complete(last.cells.clone(), "Animation complete", stats)
                }
            },
        };

        if let Err(err) = self.history.push(frame) {
            tracing::warn!(%err, frames = self.history.len(), "history full, stopping run");
            return Err(err);
        }

        if exhausted {
            self.source = None;
            tracing::debug!(frames = self.history.len(), "run exhausted");
        }
        Ok(())
    }

    fn frame_at(&self, index: usize) -> Result<&Frame, PlaybackError> {
        self.history.get(index).ok_or(PlaybackError::NoRun)
    }

    /// Frame under the cursor, if a run has been started
    pub fn current(&self) -> Option<&Frame> {
        self.history.get(self.position)
    }

    /// Frames from the start of the run up to and including the cursor
    pub fn visited(&self) -> impl Iterator<Item = &Frame> + '_ {
        self.history.iter().take(self.position + 1)
    }

    pub fn subject(&self) -> Option<Subject> {
        self.subject
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of frames recorded so far
    pub fn total_frames(&self) -> usize {
        self.history.len()
    }

    /// Whether the run still has steps that have not been pulled
    pub fn is_live(&self) -> bool {
        self.source.is_some()
    }

    /// Whether the cursor sits on the final frame of an exhausted run
    pub fn is_finished(&self) -> bool {
        !self.is_live() && !self.history.is_empty() && self.position + 1 == self.history.len()
    }

    pub fn memory_usage(&self) -> usize {
        self.history.memory_usage()
    }

    pub fn memory_limit(&self) -> usize {
        self.history.memory_limit()
    }
}
