//! Top-down merge sort
//!
//! Ranges are split at `(left + right) / 2` over inclusive bounds. The work
//! stack holds split and merge frames; a range's merge frame sits beneath its
//! two halves so it runs only after both are sorted.
//!
//! The merge copies each half into scratch runs and writes back into the
//! tracked buffer. One comparison step is emitted per pair considered, before
//! the smaller element is written. Copying out the leftover tail emits
//! nothing.

use super::{Stepper, Tracked};
use std::ops::Range;

enum Frame {
    Split(Range<usize>),
    Merge { start: usize, mid: usize, end: usize },
}

/// A merge of `start..mid` and `mid..end` in progress
struct Merging<T> {
    start: usize,
    mid: usize,
    end: usize,
    left: Vec<T>,
    right: Vec<T>,
    i: usize,
    j: usize,
}

impl<T> Merging<T> {
    fn write_pos(&self) -> usize {
        self.start + self.i + self.j
    }
}

pub struct Merge<T> {
    frames: Vec<Frame>,
    active: Option<Merging<T>>,
}

impl<T> Merge<T> {
    pub fn new(len: usize) -> Self {
        Merge {
            frames: vec![Frame::Split(0..len)],
            active: None,
        }
    }
}

impl<T: Ord + Clone> Merge<T> {
    fn begin(&mut self, buffer: &mut Tracked<T>) -> bool {
        let Some(frame) = self.frames.pop() else {
            return false;
        };
        match frame {
            Frame::Split(range) if range.len() >= 2 => {
                let mid = (range.start + range.end - 1) / 2 + 1;
                self.frames.push(Frame::Merge {
                    start: range.start,
                    mid,
                    end: range.end,
                });
                self.frames.push(Frame::Split(mid..range.end));
                self.frames.push(Frame::Split(range.start..mid));
            }
            Frame::Split(_) => {}
            Frame::Merge { start, mid, end } => {
                self.active = Some(Merging {
                    start,
                    mid,
                    end,
                    left: buffer.copy_range(start, mid),
                    right: buffer.copy_range(mid, end),
                    i: 0,
                    j: 0,
                });
            }
        }
        true
    }
}

impl<T: Ord + Clone> Stepper<T> for Merge<T> {
    fn advance(&mut self, buffer: &mut Tracked<T>) -> bool {
        let Some(mut run) = self.active.take() else {
            return self.begin(buffer);
        };

        if run.i < run.left.len() && run.j < run.right.len() {
            let at = run.write_pos();
            buffer.compare(run.start + run.i, run.mid + run.j);
            // Non-strict so equal keys keep their left-run order
            if run.left[run.i] <= run.right[run.j] {
                buffer.write(at, run.left[run.i].clone());
                run.i += 1;
            } else {
                buffer.write(at, run.right[run.j].clone());
                run.j += 1;
            }
            self.active = Some(run);
            return true;
        }

        let mut at = run.write_pos();
        for value in run.left.drain(run.i..).chain(run.right.drain(run.j..)) {
            buffer.write(at, value);
            at += 1;
        }
        debug_assert_eq!(at, run.end);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::sorting::Algorithm;
    use crate::step::Marks;

    #[test]
    fn one_comparison_per_pair_considered() {
        // [2, 1] splits into [2] | [1]; one pair, then a silent copy-out
        let mut run = Algorithm::Merge.run(&[2, 1]);
        let steps: Vec<_> = run.by_ref().collect();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].marks, Marks::pair(0, 1));
        assert_eq!(steps[0].array, vec![2, 1]);
        assert_eq!(run.array(), &[1, 2]);
    }

    #[test]
    fn left_half_is_split_at_midpoint() {
        // [3, 2, 1] splits into [3, 2] | [1]; the first merge is over 0..2
        let steps: Vec<_> = Algorithm::Merge.run(&[3, 2, 1]).collect();
        assert_eq!(steps[0].marks, Marks::pair(0, 1));
        assert_eq!(steps[0].array, vec![3, 2, 1]);
        assert!(steps.iter().all(|s| !s.is_swap));
    }
}
