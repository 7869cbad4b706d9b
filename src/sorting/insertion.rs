//! Insertion sort
//!
//! Each key is marked, shifted left one adjacent swap at a time while its
//! left neighbour is strictly greater, and marked again where it lands.

use super::{Stepper, Tracked};
use crate::step::Marks;

enum Phase {
    /// About to pick up the key at `next`
    Pick,
    /// Shifting the key, currently at `at`
    Shift { at: usize },
}

pub struct Insertion {
    len: usize,
    next: usize,
    phase: Phase,
}

impl Insertion {
    pub fn new(len: usize) -> Self {
        Insertion {
            len,
            next: 1,
            phase: Phase::Pick,
        }
    }
}

impl<T: Ord + Clone> Stepper<T> for Insertion {
    fn advance(&mut self, buffer: &mut Tracked<T>) -> bool {
        match self.phase {
            Phase::Pick => {
                if self.next >= self.len {
                    return false;
                }
                buffer.mark(Marks::one(self.next));
                self.phase = Phase::Shift { at: self.next };
            }
            Phase::Shift { at } => {
                if at > 0 && buffer.get(at - 1) > buffer.get(at) {
                    buffer.compare(at - 1, at);
                    buffer.swap(at - 1, at);
                    self.phase = Phase::Shift { at: at - 1 };
                } else {
                    buffer.mark(Marks::one(at));
                    self.next += 1;
                    self.phase = Phase::Pick;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::sorting::Algorithm;
    use crate::step::Marks;

    #[test]
    fn key_is_marked_shifted_and_landed() {
        let steps: Vec<_> = Algorithm::Insertion.run(&[2, 1]).collect();
        let shape: Vec<_> = steps.iter().map(|s| (s.marks, s.is_swap)).collect();
        assert_eq!(
            shape,
            vec![
                (Marks::one(1), false),
                (Marks::pair(0, 1), false),
                (Marks::pair(0, 1), true),
                (Marks::one(0), false),
            ]
        );
        assert_eq!(steps.last().unwrap().array, vec![1, 2]);
    }

    #[test]
    fn already_placed_key_lands_immediately() {
        let steps: Vec<_> = Algorithm::Insertion.run(&[1, 2, 3]).collect();
        // pick + land per key
        assert_eq!(steps.len(), 4);
        assert!(steps.iter().all(|s| s.marks.len() == 1));
    }
}
