//! Name → constructor registries with display metadata
//!
//! The front-end populates its selection menus and description panels from
//! these tables. Metadata carries no behavior.

use crate::sorting::{Algorithm, SortRun};
use crate::step::Value;
use crate::structures::{Container, StructureKind};
use rustc_hash::FxHashMap;
use serde::Serialize;
use strum::IntoEnumIterator;

/// Description panel contents for a sorting algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub stable: bool,
    pub in_place: bool,
}

/// Description panel contents for a data structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub operations: &'static [&'static str],
    pub time_complexity: &'static [(&'static str, &'static str)],
}

pub struct AlgorithmEntry {
    pub algorithm: Algorithm,
    pub info: AlgorithmInfo,
    pub start: fn(&[Value]) -> SortRun<Value>,
}

pub struct StructureEntry {
    pub kind: StructureKind,
    pub info: StructureInfo,
    pub create: fn() -> Box<dyn Container>,
}

/// Entries keyed by display name, iterated in declaration order
pub struct Registry<E> {
    order: Vec<&'static str>,
    entries: FxHashMap<&'static str, E>,
}

impl<E> Registry<E> {
    fn from_entries(entries: impl IntoIterator<Item = (&'static str, E)>) -> Self {
        let mut order = Vec::new();
        let mut map = FxHashMap::default();
        for (name, entry) in entries {
            order.push(name);
            map.insert(name, entry);
        }
        Registry {
            order,
            entries: map,
        }
    }

    pub fn get(&self, name: &str) -> Option<&E> {
        self.entries.get(name)
    }

    /// Display names in menu order
    pub fn names(&self) -> &[&'static str] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.order.iter().filter_map(|name| self.entries.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Algorithm {
    pub fn info(self) -> AlgorithmInfo {
        let name = self.into();
        match self {
            Algorithm::Bubble => AlgorithmInfo {
                name,
                description: "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
                time_complexity: "O(n²) worst/average, O(n) best",
                space_complexity: "O(1)",
                stable: true,
                in_place: true,
            },
            Algorithm::Insertion => AlgorithmInfo {
                name,
                description: "Builds the sorted prefix one element at a time by shifting each new key left until it is in place.",
                time_complexity: "O(n²) worst/average, O(n) best",
                space_complexity: "O(1)",
                stable: true,
                in_place: true,
            },
            Algorithm::Selection => AlgorithmInfo {
                name,
                description: "Finds the minimum of the unsorted suffix and swaps it to the front of the suffix.",
                time_complexity: "O(n²) in all cases",
                space_complexity: "O(1)",
                stable: false,
                in_place: true,
            },
            Algorithm::Quick => AlgorithmInfo {
                name,
                description: "Partitions around the last element as pivot (Lomuto), then sorts the left and right partitions recursively.",
                time_complexity: "O(n log n) average, O(n²) worst",
                space_complexity: "O(log n)",
                stable: false,
                in_place: true,
            },
            Algorithm::Merge => AlgorithmInfo {
                name,
                description: "Splits the list in half, sorts each half recursively, and merges the two sorted halves.",
                time_complexity: "O(n log n) in all cases",
                space_complexity: "O(n)",
                stable: true,
                in_place: false,
            },
        }
    }
}

impl StructureKind {
    pub fn info(self) -> StructureInfo {
        let name = self.into();
        match self {
            StructureKind::LinkedList => StructureInfo {
                name,
                description: "A linear data structure where elements are stored in nodes, and each node points to the next node in the sequence.",
                operations: &["Insert at beginning", "Insert at end", "Delete", "Search"],
                time_complexity: &[
                    ("insertion", "O(1) at beginning, O(n) at end"),
                    ("deletion", "O(1) at beginning, O(n) at end"),
                    ("search", "O(n)"),
                ],
            },
            StructureKind::Stack => StructureInfo {
                name,
                description: "A linear data structure that follows the Last In First Out (LIFO) principle.",
                operations: &["Push", "Pop", "Peek"],
                time_complexity: &[("push", "O(1)"), ("pop", "O(1)"), ("peek", "O(1)")],
            },
            StructureKind::Queue => StructureInfo {
                name,
                description: "A linear data structure that follows the First In First Out (FIFO) principle.",
                operations: &["Enqueue", "Dequeue", "Peek"],
                time_complexity: &[("enqueue", "O(1)"), ("dequeue", "O(1)"), ("peek", "O(1)")],
            },
            StructureKind::BinaryTree => StructureInfo {
                name,
                description: "A hierarchical data structure where each node has at most two children, referred to as left child and right child.",
                operations: &["Insert", "Traverse"],
                time_complexity: &[("insertion", "O(n)"), ("traversal", "O(n)")],
            },
            StructureKind::Array => StructureInfo {
                name,
                description: "A sequence of elements accessible by contiguous indices.",
                operations: &["Insert", "Delete", "Search"],
                time_complexity: &[
                    ("insert", "O(1) amortized (append)"),
                    ("delete", "O(n)"),
                    ("search", "O(n)"),
                ],
            },
            StructureKind::BinaryHeap => StructureInfo {
                name,
                description: "A complete binary tree that maintains the heap property; here implemented as a min-heap.",
                operations: &["Insert", "Delete (root)", "Search"],
                time_complexity: &[
                    ("insert", "O(log n)"),
                    ("delete", "O(log n)"),
                    ("search", "O(n)"),
                ],
            },
        }
    }
}

fn start_bubble(input: &[Value]) -> SortRun<Value> {
    Algorithm::Bubble.run(input)
}

fn start_insertion(input: &[Value]) -> SortRun<Value> {
    Algorithm::Insertion.run(input)
}

fn start_selection(input: &[Value]) -> SortRun<Value> {
    Algorithm::Selection.run(input)
}

fn start_quick(input: &[Value]) -> SortRun<Value> {
    Algorithm::Quick.run(input)
}

fn start_merge(input: &[Value]) -> SortRun<Value> {
    Algorithm::Merge.run(input)
}

impl Registry<AlgorithmEntry> {
    pub fn algorithms() -> Self {
        Registry::from_entries(Algorithm::iter().map(|algorithm| {
            let start = match algorithm {
                Algorithm::Bubble => start_bubble as fn(&[Value]) -> SortRun<Value>,
                Algorithm::Insertion => start_insertion,
                Algorithm::Selection => start_selection,
                Algorithm::Quick => start_quick,
                Algorithm::Merge => start_merge,
            };
            let info = algorithm.info();
            (
                info.name,
                AlgorithmEntry {
                    algorithm,
                    info,
                    start,
                },
            )
        }))
    }
}

fn create_linked_list() -> Box<dyn Container> {
    StructureKind::LinkedList.create()
}

fn create_stack() -> Box<dyn Container> {
    StructureKind::Stack.create()
}

fn create_queue() -> Box<dyn Container> {
    StructureKind::Queue.create()
}

fn create_binary_tree() -> Box<dyn Container> {
    StructureKind::BinaryTree.create()
}

fn create_array() -> Box<dyn Container> {
    StructureKind::Array.create()
}

fn create_binary_heap() -> Box<dyn Container> {
    StructureKind::BinaryHeap.create()
}

impl Registry<StructureEntry> {
    pub fn structures() -> Self {
        Registry::from_entries(StructureKind::iter().map(|kind| {
            let create = match kind {
                StructureKind::LinkedList => create_linked_list as fn() -> Box<dyn Container>,
                StructureKind::Stack => create_stack,
                StructureKind::Queue => create_queue,
                StructureKind::BinaryTree => create_binary_tree,
                StructureKind::Array => create_array,
                StructureKind::BinaryHeap => create_binary_heap,
            };
            let info = kind.info();
            (info.name, StructureEntry { kind, info, create })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_registry_covers_every_algorithm() {
        let registry = Registry::algorithms();
        assert_eq!(
            registry.names(),
            &["Bubble Sort", "Insertion Sort", "Selection Sort", "Quick Sort", "Merge Sort"]
        );
        let entry = registry.get("Merge Sort").unwrap();
        assert_eq!(entry.algorithm, Algorithm::Merge);
        assert!(entry.info.stable);
        assert!(!entry.info.in_place);

        let mut run = (entry.start)(&[3, 1, 2]);
        run.by_ref().for_each(drop);
        assert_eq!(run.array(), &[1, 2, 3]);
    }

    #[test]
    fn structure_registry_constructs_matching_kinds() {
        let registry = Registry::structures();
        assert_eq!(registry.len(), 6);
        for entry in registry.iter() {
            let instance = (entry.create)();
            assert_eq!(instance.kind(), entry.kind);
            assert_eq!(entry.info.name, entry.kind.to_string());
        }
        assert!(registry.get("Trie").is_none());
    }

    #[test]
    fn stability_flags_match_classical_table() {
        let stable: Vec<_> = Algorithm::iter().filter(|a| a.info().stable).collect();
        assert_eq!(stable, vec![Algorithm::Bubble, Algorithm::Insertion, Algorithm::Merge]);
    }
}
