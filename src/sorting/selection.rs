//! Selection sort
//!
//! Each pass marks the minimum candidate, compares every later position
//! against it, marks each new minimum, and finishes with at most one swap.

use super::{Stepper, Tracked};
use crate::step::Marks;

enum Phase {
    Begin,
    Scan { min: usize, probe: usize },
}

pub struct Selection {
    len: usize,
    pass: usize,
    phase: Phase,
}

impl Selection {
    pub fn new(len: usize) -> Self {
        Selection {
            len,
            pass: 0,
            phase: Phase::Begin,
        }
    }
}

impl<T: Ord + Clone> Stepper<T> for Selection {
    fn advance(&mut self, buffer: &mut Tracked<T>) -> bool {
        // A single element is already sorted
        if self.len < 2 {
            return false;
        }

        match self.phase {
            Phase::Begin => {
                if self.pass >= self.len {
                    return false;
                }
                buffer.mark(Marks::one(self.pass));
                self.phase = Phase::Scan {
                    min: self.pass,
                    probe: self.pass + 1,
                };
            }
            Phase::Scan { min, probe } if probe < self.len => {
                buffer.compare(probe, min);
                let min = if buffer.get(probe) < buffer.get(min) {
                    buffer.mark(Marks::one(probe));
                    probe
                } else {
                    min
                };
                self.phase = Phase::Scan {
                    min,
                    probe: probe + 1,
                };
            }
            Phase::Scan { min, .. } => {
                if min != self.pass {
                    buffer.swap(self.pass, min);
                }
                self.pass += 1;
                self.phase = Phase::Begin;
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
    fn new_minimum_gets_its_own_step() {
        let steps: Vec<_> = Algorithm::Selection.run(&[2, 1]).collect();
        let shape: Vec<_> = steps.iter().map(|s| (s.marks, s.is_swap)).collect();
        assert_eq!(
            shape,
            vec![
                (Marks::one(0), false),
                (Marks::pair(1, 0), false),
                (Marks::one(1), false),
                (Marks::pair(0, 1), true),
                (Marks::one(1), false),
            ]
        );
        assert_eq!(steps[3].array, vec![1, 2]);
    }

    #[test]
    fn no_swap_when_minimum_is_in_place() {
        let steps: Vec<_> = Algorithm::Selection.run(&[1, 2, 3]).collect();
        assert!(steps.iter().all(|s| !s.is_swap));
    }
}
