use std::ops::Index;
use std::ops::IndexMut;

/// Read a per-axis sequence in storage order: position `len - 1` is the
/// innermost axis of a row major layout.
pub(in crate::dimension) struct Forward<S>(pub(crate) S);

/// Read a per-axis sequence back to front, which turns a column major
/// question into a row major one: position `len - 1` is storage axis 0.
pub(in crate::dimension) struct Reverse<S>(pub(crate) S);

impl<T> Index<usize> for Forward<&[T]> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T> Index<usize> for Forward<&mut [T]> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for Forward<&mut [T]> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T> Index<usize> for Reverse<&[T]> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[self.0.len() - index - 1]
    }
}

impl<T> Index<usize> for Reverse<&mut [T]> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[self.0.len() - index - 1]
    }
}

impl<T> IndexMut<usize> for Reverse<&mut [T]> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.0.len();
        &mut self.0[len - index - 1]
    }
}

/// Indexable sequence with length
pub(in crate::dimension) trait Sequence: Index<usize> {
    fn len(&self) -> usize;
}

/// Indexable sequence with length (mut)
pub(in crate::dimension) trait SequenceMut: Sequence + IndexMut<usize> { }

impl<T> Sequence for Forward<&[T]> {
    #[inline]
    fn len(&self) -> usize { self.0.len() }
}

impl<T> Sequence for Forward<&mut [T]> {
    #[inline]
    fn len(&self) -> usize { self.0.len() }
}

impl<T> SequenceMut for Forward<&mut [T]> { }

impl<T> Sequence for Reverse<&[T]> {
    #[inline]
    fn len(&self) -> usize { self.0.len() }
}

impl<T> Sequence for Reverse<&mut [T]> {
    #[inline]
    fn len(&self) -> usize { self.0.len() }
}

impl<T> SequenceMut for Reverse<&mut [T]> { }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_reads_back_to_front() {
        let data = [1, 2, 3];
        let f = Forward(&data[..]);
        let r = Reverse(&data[..]);
        assert_eq!((f[0], f[2], f.len()), (1, 3, 3));
        assert_eq!((r[0], r[2], r.len()), (3, 1, 3));

        let mut out = [0; 3];
        {
            let mut w = Reverse(&mut out[..]);
            w[0] = 7;
        }
        assert_eq!(out, [0, 0, 7]);
    }
}
