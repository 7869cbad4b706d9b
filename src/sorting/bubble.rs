//! Bubble sort
//!
//! Always runs full passes: for `i in 0..n`, for `j in 0..n-i-1`, compare the
//! adjacent pair and swap it when out of order.

use super::{Stepper, Tracked};

pub struct Bubble {
    len: usize,
    pass: usize,
    cursor: usize,
}

impl Bubble {
    pub fn new(len: usize) -> Self {
        Bubble {
            len,
            pass: 0,
            cursor: 0,
        }
    }
}

impl<T: Ord + Clone> Stepper<T> for Bubble {
    fn advance(&mut self, buffer: &mut Tracked<T>) -> bool {
        loop {
            if self.pass >= self.len {
                return false;
            }
            // Pass is over once the unsorted prefix is exhausted
            if self.cursor + 1 >= self.len - self.pass {
                self.pass += 1;
                self.cursor = 0;
                continue;
            }

            let j = self.cursor;
            buffer.compare(j, j + 1);
            if buffer.get(j) > buffer.get(j + 1) {
                buffer.swap(j, j + 1);
            }
            self.cursor += 1;
            return true;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::sorting::Algorithm;
    use crate::step::Marks;

    #[test]
    fn compares_then_swaps_same_pair() {
        let steps: Vec<_> = Algorithm::Bubble.run(&[2, 1]).collect();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].array, vec![2, 1]);
        assert_eq!(steps[0].marks, Marks::pair(0, 1));
        assert!(!steps[0].is_swap);
        assert_eq!(steps[1].array, vec![1, 2]);
        assert_eq!(steps[1].marks, Marks::pair(0, 1));
        assert!(steps[1].is_swap);
    }

    #[test]
    fn sorted_input_still_runs_full_passes() {
        let steps: Vec<_> = Algorithm::Bubble.run(&[1, 2, 3, 4]).collect();
        // 3 + 2 + 1 comparisons, no swaps
        assert_eq!(steps.len(), 6);
        assert!(steps.iter().all(|s| !s.is_swap));
    }

    #[test]
    fn equal_neighbours_are_not_swapped() {
        let steps: Vec<_> = Algorithm::Bubble.run(&[5, 5, 5]).collect();
        assert!(steps.iter().all(|s| !s.is_swap));
    }
}
