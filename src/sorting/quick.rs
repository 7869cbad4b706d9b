//! Quick sort with the Lomuto partition scheme
//!
//! The pivot is the last element of the range. Pending ranges live on an
//! explicit work stack; the right half is pushed before the left so the left
//! subtree's steps all come out before the right's.

use super::{Stepper, Tracked};
use crate::step::Marks;
use std::ops::Range;

/// A partition in progress over `start..=pivot`
struct Partition {
    start: usize,
    pivot: usize,
    store: usize,
    scan: usize,
}

pub struct Quick {
    pending: Vec<Range<usize>>,
    active: Option<Partition>,
}

impl Quick {
    pub fn new(len: usize) -> Self {
        Quick {
            pending: vec![0..len],
            active: None,
        }
    }
}

impl Quick {
    /// Pop the next range and, if it needs sorting, mark its pivot
    fn begin<T: Ord + Clone>(&mut self, buffer: &mut Tracked<T>) -> bool {
        let Some(range) = self.pending.pop() else {
            return false;
        };
        // Ranges of zero or one element are already sorted
        if range.len() >= 2 {
            let pivot = range.end - 1;
            buffer.mark(Marks::one(pivot));
            self.active = Some(Partition {
                start: range.start,
                pivot,
                store: range.start,
                scan: range.start,
            });
        }
        true
    }
}

impl<T: Ord + Clone> Stepper<T> for Quick {
    fn advance(&mut self, buffer: &mut Tracked<T>) -> bool {
        let Some(mut part) = self.active.take() else {
            return self.begin(buffer);
        };

        if part.scan < part.pivot {
            buffer.compare(part.scan, part.pivot);
            if buffer.get(part.scan) <= buffer.get(part.pivot) {
                buffer.swap(part.store, part.scan);
                part.store += 1;
            }
            part.scan += 1;
            self.active = Some(part);
            return true;
        }

        buffer.swap(part.store, part.pivot);
        self.pending.push(part.store + 1..part.pivot + 1);
        self.pending.push(part.start..part.store);
        true
    }
}
