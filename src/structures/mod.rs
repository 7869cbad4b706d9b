//! Data structures that narrate their own operations
//!
//! Each structure owns its storage and is only mutated through operations
//! that return an [`OpRun`]: the ordered steps a renderer replays to show what
//! happened. Failures (full, empty, not found) are never errors here; they
//! arrive as the final explanatory step of the run.
//!
//! # Capabilities
//!
//! Structures expose what they can do through [`Container`]. Each capability
//! accessor returns `Some` only for structures that support it:
//!
//! | structure     | insert         | delete          | search  | peek | traverse |
//! |---------------|----------------|-----------------|---------|------|----------|
//! | linked list   | at end         | by value        | yes     |      |          |
//! | stack         | push           | pop             |         | yes  |          |
//! | queue         | enqueue        | dequeue         |         | yes  |          |
//! | binary tree   | level order    |                 |         |      | inorder  |
//! | array         | append         | last / by value | yes     |      |          |
//! | binary heap   | sift up        | root, sift down | yes     |      |          |
//!
//! [`Container::perform`] dispatches an [`Action`] through those capabilities.

pub mod array;
pub mod binary_tree;
pub mod heap;
pub mod linked_list;
pub mod queue;
pub mod stack;

use crate::step::{Cell, OpRun, Value};
use serde::Serialize;
use std::fmt;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

/// Capacity shared by the bounded stack and queue
pub const BOUNDED_CAPACITY: usize = 10;

/// The data structures known to the engine
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr, Serialize,
)]
#[strum(ascii_case_insensitive)]
pub enum StructureKind {
    #[strum(to_string = "Linked List", serialize = "list", serialize = "linked-list")]
    LinkedList,
    #[strum(to_string = "Stack", serialize = "stack")]
    Stack,
    #[strum(to_string = "Queue", serialize = "queue")]
    Queue,
    #[strum(to_string = "Binary Tree", serialize = "tree", serialize = "binary-tree")]
    BinaryTree,
    #[strum(to_string = "Array", serialize = "array")]
    Array,
    #[strum(to_string = "Binary Heap", serialize = "heap", serialize = "binary-heap")]
    BinaryHeap,
}

impl StructureKind {
    /// Construct an empty instance
    pub fn create(self) -> Box<dyn Container> {
        match self {
            StructureKind::LinkedList => Box::new(linked_list::LinkedList::new()),
            StructureKind::Stack => Box::new(stack::Stack::new()),
            StructureKind::Queue => Box::new(queue::Queue::new()),
            StructureKind::BinaryTree => Box::new(binary_tree::BinaryTree::new()),
            StructureKind::Array => Box::new(array::ArrayList::new()),
            StructureKind::BinaryHeap => Box::new(heap::BinaryHeap::new()),
        }
    }
}

/// A generic operation requested by the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    Insert(Value),
    /// `None` removes whatever the structure removes by default
    Delete(Option<Value>),
    /// Stack and queue answer with a peek
    Search(Value),
    Traverse,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Insert(value) => write!(f, "insert {}", value),
            Action::Delete(Some(value)) => write!(f, "delete {}", value),
            Action::Delete(None) => write!(f, "delete"),
            Action::Search(value) => write!(f, "search {}", value),
            Action::Traverse => write!(f, "traverse"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("{structure} does not support {action}")]
    Unsupported {
        structure: StructureKind,
        action: &'static str,
    },
}

pub trait Insertable {
    fn insert(&mut self, value: Value) -> OpRun;
}

pub trait Deletable {
    fn delete(&mut self, value: Option<Value>) -> OpRun;
}

pub trait Searchable {
    fn search(&self, value: Value) -> OpRun;
}

pub trait Peekable {
    fn peek(&self) -> OpRun;
}

pub trait Traversable {
    fn traverse(&self) -> OpRun;
}

/// A structure instance with statically known capabilities
pub trait Container {
    fn kind(&self) -> StructureKind;

    /// Render the current state, never mutating it
    fn to_array(&self) -> Vec<Cell>;

    /// Number of stored elements
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insertable(&mut self) -> Option<&mut dyn Insertable> {
        None
    }

    fn deletable(&mut self) -> Option<&mut dyn Deletable> {
        None
    }

    fn searchable(&self) -> Option<&dyn Searchable> {
        None
    }

    fn peekable(&self) -> Option<&dyn Peekable> {
        None
    }

    fn traversable(&self) -> Option<&dyn Traversable> {
        None
    }

    /// Run `action` against whichever capability handles it
    fn perform(&mut self, action: Action) -> Result<OpRun, StructureError> {
        let kind = self.kind();
        let unsupported = |action: &'static str| StructureError::Unsupported {
            structure: kind,
            action,
        };

        let run = match action {
            Action::Insert(value) => self
                .insertable()
                .map(|c| c.insert(value))
                .ok_or_else(|| unsupported("insert"))?,
            Action::Delete(value) => self
                .deletable()
                .map(|c| c.delete(value))
                .ok_or_else(|| unsupported("delete"))?,
            Action::Search(value) => match (self.searchable(), self.peekable()) {
                (Some(c), _) => c.search(value),
                (None, Some(c)) => c.peek(),
                (None, None) => return Err(unsupported("search")),
            },
            Action::Traverse => self
                .traversable()
                .map(|c| c.traverse())
                .ok_or_else(|| unsupported("traverse"))?,
        };

        tracing::debug!(structure = %kind, %action, steps = run.remaining(), "structure operation");
        Ok(run)
    }

    /// Insert every value, discarding the narration
    fn seed(&mut self, values: &[Value]) {
        if let Some(target) = self.insertable() {
            for &value in values {
                target.insert(value).for_each(drop);
            }
        }
    }

    /// The run the front-end animates on start: a traversal where supported,
    /// otherwise a search for the first element, otherwise a peek
    fn demo(&mut self) -> Option<OpRun> {
        if let Some(c) = self.traversable() {
            return Some(c.traverse());
        }
        let first = self.to_array().into_iter().flatten().next()?;
        match (self.searchable(), self.peekable()) {
            (Some(c), _) => Some(c.search(first)),
            (None, Some(c)) => Some(c.peek()),
            (None, None) => None,
        }
    }
}

/// Drop the trailing gaps of a breadth-first serialization. Internal gaps
/// stay so parent/child index arithmetic remains valid.
pub(crate) fn trim_trailing_gaps(mut cells: Vec<Cell>) -> Vec<Cell> {
    while matches!(cells.last(), Some(None)) {
        cells.pop();
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Marks;
    use strum::IntoEnumIterator;

    #[test]
    fn every_kind_starts_empty() {
        for kind in StructureKind::iter() {
            let s = kind.create();
            assert_eq!(s.kind(), kind);
            assert!(s.is_empty());
            assert!(s.to_array().is_empty());
        }
    }

    #[test]
    fn unsupported_action_is_reported() {
        let mut tree = StructureKind::BinaryTree.create();
        let err = tree.perform(Action::Delete(None)).unwrap_err();
        assert_eq!(
            err,
            StructureError::Unsupported {
                structure: StructureKind::BinaryTree,
                action: "delete",
            }
        );
        assert_eq!(err.to_string(), "Binary Tree does not support delete");
    }

    #[test]
    fn search_falls_back_to_peek() {
        let mut stack = StructureKind::Stack.create();
        stack.seed(&[4, 9]);
        let steps: Vec<_> = stack.perform(Action::Search(1)).unwrap().collect();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].message, "Peeked at 9");
    }

    #[test]
    fn kinds_parse_from_names_and_aliases() {
        assert_eq!("Binary Heap".parse::<StructureKind>().unwrap(), StructureKind::BinaryHeap);
        assert_eq!("list".parse::<StructureKind>().unwrap(), StructureKind::LinkedList);
        assert_eq!("TREE".parse::<StructureKind>().unwrap(), StructureKind::BinaryTree);
        assert!("graph".parse::<StructureKind>().is_err());
    }

    #[test]
    fn demo_prefers_traversal() {
        let mut tree = StructureKind::BinaryTree.create();
        tree.seed(&[1, 2, 3]);
        let first = tree.demo().unwrap().next().unwrap();
        assert!(first.message.starts_with("Visited"));

        let mut array = StructureKind::Array.create();
        assert!(array.demo().is_none());
        array.seed(&[7, 8]);
        let steps: Vec<_> = array.demo().unwrap().collect();
        assert_eq!(steps.last().unwrap().message, "Found 7 at index 0");
    }

    #[test]
    fn demo_falls_back_to_peek() {
        let mut stack = StructureKind::Stack.create();
        assert!(stack.demo().is_none());
        stack.seed(&[4, 9, 2]);
        let steps: Vec<_> = stack.demo().unwrap().collect();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].message, "Peeked at 2");
        assert_eq!(steps[0].marks, Marks::one(2));

        let mut queue = StructureKind::Queue.create();
        queue.seed(&[4, 9, 2]);
        let steps: Vec<_> = queue.demo().unwrap().collect();
        assert_eq!(steps[0].message, "Peeked at 4");
        assert_eq!(steps[0].marks, Marks::one(0));
    }

    #[test]
    fn trailing_gaps_trimmed_internal_kept() {
        let cells = vec![Some(1), None, Some(3), None, None];
        assert_eq!(trim_trailing_gaps(cells), vec![Some(1), None, Some(3)]);
    }
}
