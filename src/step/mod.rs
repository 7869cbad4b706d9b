//! Step records shared by both engines
//!
//! A step is the unit of animation: a full copy of the visible state, the
//! positions touched by the step, and an annotation explaining it.
//!
//! - [`SortStep`]: produced by [`crate::sorting`]; the annotation is a swap flag
//! - [`OpStep`]: produced by [`crate::structures`]; the annotation is a message
//! - [`OpRun`]: the finite step sequence returned by a structure operation
//!
//! Snapshots are owned `Vec`s. A consumer can never observe a later mutation
//! through a step it already pulled.

use serde::Serialize;
use std::fmt;

/// Element type stored by the data structures
pub type Value = i64;

/// One rendered slot of a structure snapshot. Tree gaps are `None`.
pub type Cell = Option<Value>;

/// Zero, one, or two highlighted positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "Vec<usize>")]
pub struct Marks {
    slots: [Option<usize>; 2],
}

impl Marks {
    pub const NONE: Marks = Marks { slots: [None, None] };

    pub fn one(index: usize) -> Self {
        Marks {
            slots: [Some(index), None],
        }
    }

    pub fn pair(first: usize, second: usize) -> Self {
        Marks {
            slots: [Some(first), Some(second)],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots[0].is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.iter().any(|i| i == index)
    }

    /// Both positions, when this is a pair
    pub fn as_pair(&self) -> Option<(usize, usize)> {
        match self.slots {
            [Some(a), Some(b)] => Some((a, b)),
            _ => None,
        }
    }
}

impl From<Marks> for Vec<usize> {
    fn from(marks: Marks) -> Self {
        marks.iter().collect()
    }
}

/// A step of a sorting run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortStep<T> {
    pub array: Vec<T>,
    pub marks: Marks,
    pub is_swap: bool,
}

impl<T> SortStep<T> {
    /// Human-readable explanation of this step
    pub fn describe(&self) -> String {
        match (self.marks.as_pair(), self.is_swap) {
            (Some((a, b)), true) => format!("Swapped elements at positions {} and {}", a, b),
            (Some((a, b)), false) => format!("Comparing elements at positions {} and {}", a, b),
            _ => "Processing…".to_string(),
        }
    }
}

/// A step of a data-structure operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpStep {
    pub cells: Vec<Cell>,
    pub marks: Marks,
    pub message: String,
}

impl OpStep {
    pub fn new(cells: Vec<Cell>, marks: Marks, message: impl Into<String>) -> Self {
        OpStep {
            cells,
            marks,
            message: message.into(),
        }
    }
}

impl fmt::Display for OpStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Steps produced by one structure operation
///
/// The operation has already been applied to the structure when the run is
/// handed out; pulling steps only replays what happened.
#[derive(Debug, Clone, Default)]
pub struct OpRun {
    steps: std::vec::IntoIter<OpStep>,
}

impl OpRun {
    pub fn new(steps: Vec<OpStep>) -> Self {
        OpRun {
            steps: steps.into_iter(),
        }
    }

    /// A run consisting of a single explanatory step
    pub fn single(cells: Vec<Cell>, marks: Marks, message: impl Into<String>) -> Self {
        OpRun::new(vec![OpStep::new(cells, marks, message)])
    }

    /// Steps not yet pulled
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl Iterator for OpRun {
    type Item = OpStep;

    fn next(&mut self) -> Option<OpStep> {
        self.steps.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl ExactSizeIterator for OpRun {}

/// Collects the steps of an operation while it mutates its structure
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    steps: Vec<OpStep>,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder { steps: Vec::new() }
    }

    pub fn emit(&mut self, cells: Vec<Cell>, marks: Marks, message: impl Into<String>) {
        self.steps.push(OpStep::new(cells, marks, message));
    }

    pub fn finish(self) -> OpRun {
        OpRun::new(self.steps)
    }
}

/// Wrap plain values as fully populated cells
pub fn cells_of(values: &[Value]) -> Vec<Cell> {
    values.iter().copied().map(Some).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_shapes() {
        assert!(Marks::NONE.is_empty());
        assert_eq!(Marks::one(3).len(), 1);
        assert_eq!(Marks::pair(1, 2).as_pair(), Some((1, 2)));
        assert_eq!(Marks::one(3).as_pair(), None);
        assert!(Marks::pair(4, 7).contains(7));
        assert_eq!(Vec::from(Marks::pair(0, 5)), vec![0, 5]);
    }

    #[test]
    fn sort_step_descriptions() {
        let swap = SortStep {
            array: vec![1, 2],
            marks: Marks::pair(0, 1),
            is_swap: true,
        };
        assert_eq!(swap.describe(), "Swapped elements at positions 0 and 1");

        let compare = SortStep {
            is_swap: false,
            ..swap.clone()
        };
        assert_eq!(compare.describe(), "Comparing elements at positions 0 and 1");

        let key = SortStep {
            array: vec![1, 2],
            marks: Marks::one(1),
            is_swap: false,
        };
        assert_eq!(key.describe(), "Processing…");
    }

    #[test]
    fn marks_serialize_as_index_list() {
        let json = serde_json::to_string(&Marks::pair(2, 3)).unwrap();
        assert_eq!(json, "[2,3]");
    }
}
