//! Sorting algorithms as resumable step producers
//!
//! Every algorithm is an explicit state machine implementing [`Stepper`]. A
//! [`SortRun`] owns the buffer being sorted and drives the stepper one logical
//! action at a time, handing out the queued [`SortStep`]s as an [`Iterator`].
//!
//! # Execution Model
//!
//! ```text
//! SortRun::next → pending step? → yield
//!              ↘ Stepper::advance(&mut Tracked) → queues 0..=2 steps
//! ```
//!
//! Nothing runs unless a step is pulled, so pausing a run is simply not
//! calling `next`. Dropping a run cancels it.
//!
//! # Algorithms
//!
//! - [`bubble`]: adjacent compare/swap passes
//! - [`insertion`]: key shifting by adjacent swaps
//! - [`selection`]: minimum scan then one swap per pass
//! - [`quick`]: Lomuto partition over a work stack of ranges
//! - [`merge`]: top-down merge over a work stack of split/merge frames

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use crate::step::{Marks, SortStep};
use serde::Serialize;
use std::collections::VecDeque;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The sorting algorithms known to the engine
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr, Serialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Algorithm {
    #[strum(to_string = "Bubble Sort", serialize = "bubble")]
    Bubble,
    #[strum(to_string = "Insertion Sort", serialize = "insertion")]
    Insertion,
    #[strum(to_string = "Selection Sort", serialize = "selection")]
    Selection,
    #[strum(to_string = "Quick Sort", serialize = "quick")]
    Quick,
    #[strum(to_string = "Merge Sort", serialize = "merge")]
    Merge,
}

impl Algorithm {
    /// Start a run over a private copy of `input`
    pub fn run<T: Ord + Clone>(self, input: &[T]) -> SortRun<T> {
        SortRun::new(self, input.to_vec())
    }

    fn machine<T: Ord + Clone>(self, len: usize) -> Machine<T> {
        match self {
            Algorithm::Bubble => Machine::Bubble(bubble::Bubble::new(len)),
            Algorithm::Insertion => Machine::Insertion(insertion::Insertion::new(len)),
            Algorithm::Selection => Machine::Selection(selection::Selection::new(len)),
            Algorithm::Quick => Machine::Quick(quick::Quick::new(len)),
            Algorithm::Merge => Machine::Merge(merge::Merge::new(len)),
        }
    }
}

/// The buffer a run sorts, plus the steps queued but not yet pulled
#[derive(Debug)]
pub struct Tracked<T> {
    array: Vec<T>,
    pending: VecDeque<SortStep<T>>,
}

impl<T: Ord + Clone> Tracked<T> {
    fn new(array: Vec<T>) -> Self {
        Tracked {
            array,
            pending: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn get(&self, index: usize) -> &T {
        &self.array[index]
    }

    /// Clone the elements in `start..end` (scratch copies for merging)
    pub fn copy_range(&self, start: usize, end: usize) -> Vec<T> {
        self.array[start..end].to_vec()
    }

    /// Overwrite one position without recording a step
    pub fn write(&mut self, index: usize, value: T) {
        self.array[index] = value;
    }

    /// Record a non-swap step highlighting `marks`
    pub fn mark(&mut self, marks: Marks) {
        self.emit(marks, false);
    }

    /// Record a comparison of two positions
    pub fn compare(&mut self, a: usize, b: usize) {
        self.emit(Marks::pair(a, b), false);
    }

    /// Swap two positions and record the result
    pub fn swap(&mut self, a: usize, b: usize) {
        self.array.swap(a, b);
        self.emit(Marks::pair(a, b), true);
    }

    fn emit(&mut self, marks: Marks, is_swap: bool) {
        self.pending.push_back(SortStep {
            array: self.array.clone(),
            marks,
            is_swap,
        });
    }
}

/// A sorting algorithm suspended between logical actions
pub trait Stepper<T> {
    /// Perform the next logical action, queueing any steps it produces.
    ///
    /// Returns `false` once the algorithm has finished; no steps are queued
    /// by that final call.
    fn advance(&mut self, buffer: &mut Tracked<T>) -> bool;
}

/// Suspended state of whichever algorithm a run is executing
enum Machine<T> {
    Bubble(bubble::Bubble),
    Insertion(insertion::Insertion),
    Selection(selection::Selection),
    Quick(quick::Quick),
    Merge(merge::Merge<T>),
}

impl<T: Ord + Clone> Stepper<T> for Machine<T> {
    fn advance(&mut self, buffer: &mut Tracked<T>) -> bool {
        match self {
            Machine::Bubble(m) => m.advance(buffer),
            Machine::Insertion(m) => m.advance(buffer),
            Machine::Selection(m) => m.advance(buffer),
            Machine::Quick(m) => m.advance(buffer),
            Machine::Merge(m) => m.advance(buffer),
        }
    }
}

/// One lazy, non-restartable sorting run
pub struct SortRun<T> {
    algorithm: Algorithm,
    buffer: Tracked<T>,
    machine: Machine<T>,
    finished: bool,
    emitted: usize,
}

impl<T: Ord + Clone> SortRun<T> {
    pub fn new(algorithm: Algorithm, array: Vec<T>) -> Self {
        tracing::debug!(%algorithm, len = array.len(), "starting sort run");
        SortRun {
            algorithm,
            machine: algorithm.machine(array.len()),
            buffer: Tracked::new(array),
            finished: false,
            emitted: 0,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Current contents of the run's buffer
    pub fn array(&self) -> &[T] {
        &self.buffer.array
    }

    /// Consume the run, returning its buffer
    pub fn into_array(self) -> Vec<T> {
        self.buffer.array
    }

    /// Whether the algorithm has finished and every step has been pulled
    pub fn is_exhausted(&self) -> bool {
        self.finished && self.buffer.pending.is_empty()
    }

    /// Number of steps pulled so far
    pub fn steps_emitted(&self) -> usize {
        self.emitted
    }
}

impl<T: Ord + Clone> Iterator for SortRun<T> {
    type Item = SortStep<T>;

    fn next(&mut self) -> Option<SortStep<T>> {
        loop {
            if let Some(step) = self.buffer.pending.pop_front() {
                self.emitted += 1;
                return Some(step);
            }
            if self.finished {
                return None;
            }
            if !self.machine.advance(&mut self.buffer) {
                self.finished = true;
                tracing::debug!(algorithm = %self.algorithm, steps = self.emitted, "sort run exhausted");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn algorithm_names_parse() {
        assert_eq!("Bubble Sort".parse::<Algorithm>().unwrap(), Algorithm::Bubble);
        assert_eq!("quick".parse::<Algorithm>().unwrap(), Algorithm::Quick);
        assert_eq!("MERGE".parse::<Algorithm>().unwrap(), Algorithm::Merge);
        assert!("bogo".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::Selection.to_string(), "Selection Sort");
    }

    #[test]
    fn trivial_inputs_emit_nothing() {
        for algorithm in Algorithm::iter() {
            let empty: Vec<i64> = Vec::new();
            assert_eq!(algorithm.run(&empty).count(), 0, "{}", algorithm);
            assert_eq!(algorithm.run(&[42]).count(), 0, "{}", algorithm);
        }
    }

    #[test]
    fn run_does_not_touch_caller_input() {
        let input = vec![3, 1, 2];
        let mut run = Algorithm::Bubble.run(&input);
        while run.next().is_some() {}
        assert_eq!(input, vec![3, 1, 2]);
        assert_eq!(run.array(), &[1, 2, 3]);
        assert!(run.is_exhausted());
    }
}
