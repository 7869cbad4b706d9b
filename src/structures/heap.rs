//! Array-backed binary min-heap
//!
//! Children of `i` live at `2i + 1` and `2i + 2`; every parent is `<=` both
//! of its children after each operation completes.

use super::array::linear_search;
use super::{Container, Deletable, Insertable, Searchable, StructureKind};
use crate::step::{cells_of, Cell, Marks, OpRun, Recorder, Value};

pub struct BinaryHeap {
    heap: Vec<Value>,
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

impl BinaryHeap {
    pub fn new() -> Self {
        BinaryHeap { heap: Vec::new() }
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.heap
    }

    pub fn peek_min(&self) -> Option<Value> {
        self.heap.first().copied()
    }

    fn cells(&self) -> Vec<Cell> {
        cells_of(&self.heap)
    }

    /// Append, then sift up while the parent is greater
    pub fn push(&mut self, value: Value) -> OpRun {
        let mut rec = Recorder::new();
        self.heap.push(value);
        let mut index = self.heap.len() - 1;
        rec.emit(self.cells(), Marks::one(index), format!("Inserted {}", value));

        while index > 0 && self.heap[index] < self.heap[parent(index)] {
            let p = parent(index);
            self.heap.swap(index, p);
            rec.emit(self.cells(), Marks::pair(index, p), "Heapify up");
            index = p;
        }
        rec.finish()
    }

    /// Move the last element to the root and sift it down, following the
    /// smaller child
    pub fn pop_min(&mut self) -> OpRun {
        if self.heap.is_empty() {
            return OpRun::single(Vec::new(), Marks::NONE, "Heap is empty");
        }

        let mut rec = Recorder::new();
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let removed = self.heap.pop();
        if let Some(removed) = removed {
            let marks = if self.heap.is_empty() {
                Marks::NONE
            } else {
                Marks::one(0)
            };
            rec.emit(self.cells(), marks, format!("Removed root {}", removed));
        }

        let len = self.heap.len();
        let mut index = 0;
        loop {
            let (left, right) = (2 * index + 1, 2 * index + 2);
            let mut smallest = index;
            if left < len && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            rec.emit(self.cells(), Marks::pair(index, smallest), "Heapify down");
            index = smallest;
        }
        rec.finish()
    }

    /// Whether every parent is `<=` its children
    pub fn is_valid(&self) -> bool {
        (1..self.heap.len()).all(|i| self.heap[parent(i)] <= self.heap[i])
    }
}

impl Default for BinaryHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl Insertable for BinaryHeap {
    fn insert(&mut self, value: Value) -> OpRun {
        self.push(value)
    }
}

impl Deletable for BinaryHeap {
    fn delete(&mut self, _value: Option<Value>) -> OpRun {
        self.pop_min()
    }
}

impl Searchable for BinaryHeap {
    fn search(&self, value: Value) -> OpRun {
        linear_search(&self.heap, value)
    }
}

impl Container for BinaryHeap {
    fn kind(&self) -> StructureKind {
        StructureKind::BinaryHeap
    }

    fn to_array(&self) -> Vec<Cell> {
        self.cells()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn insertable(&mut self) -> Option<&mut dyn Insertable> {
        Some(self)
    }

    fn deletable(&mut self) -> Option<&mut dyn Deletable> {
        Some(self)
    }

    fn searchable(&self) -> Option<&dyn Searchable> {
        Some(self)
    }
}
