use std::iter::FusedIterator;

use num_integer::Integer;

use crate::slice::Slice;
use crate::Ix;

/// Split the range `0..size` into `n` consecutive slices of nearly equal
/// length, for chunking a large axis into units of work.
///
/// The first `size % n` slices hold one element more than the others. If
/// `n > size` the trailing slices are empty. `n == 0` gives no slices.
///
/// ```
/// use ndstride::{split, Slice};
///
/// let parts: Vec<Slice> = split(10, 3).collect();
/// assert_eq!(parts, [
///     Slice::new(0, Some(4), 1),
///     Slice::new(4, Some(7), 1),
///     Slice::new(7, Some(10), 1),
/// ]);
/// ```
pub fn split(size: Ix, n: usize) -> Split {
    let (quotient, remainder) = if n == 0 { (0, 0) } else { size.div_rem(&n) };
    Split { quotient, remainder, front: 0, back: n }
}

/// An iterator over the slices of [`split`].
#[derive(Clone, Debug)]
pub struct Split {
    quotient: Ix,
    remainder: Ix,
    front: usize,
    back: usize,
}

impl Split {
    fn slice(&self, i: usize) -> Slice {
        let start = i * self.quotient + i.min(self.remainder);
        let len = self.quotient + (i < self.remainder) as Ix;
        Slice::new(start as isize, Some((start + len) as isize), 1)
    }
}

impl Iterator for Split {
    type Item = Slice;

    fn next(&mut self) -> Option<Slice> {
        if self.front == self.back {
            return None;
        }
        let s = self.slice(self.front);
        self.front += 1;
        Some(s)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Split {
    fn next_back(&mut self) -> Option<Slice> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.slice(self.back))
    }
}

impl ExactSizeIterator for Split {}

impl FusedIterator for Split {}
