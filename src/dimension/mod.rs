// Copyright 2014-2025 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::{Ix, Ixs};

pub use self::axis::Axis;
pub use self::broadcast::{broadcast, broadcast_axis, co_broadcast};
pub use self::ndindex::NdIndex;
pub use self::ordering::{are_contiguous, is_contiguous, is_rightmost, order, squeeze};
pub use self::reshape::reshape;
pub use self::shape::Shape;
pub use self::strides::Strides;

#[macro_use]
mod macros;
mod axis;
mod broadcast;
mod ndindex;
mod ordering;
mod reshape;
mod sequence;
mod shape;
mod strides;

/// The highest supported rank.
pub const MAX_RANK: usize = 4;

/// Compile time check of a rank parameter: referencing `Rank::<N>::CHECK`
/// fails to compile unless `1 <= N <= MAX_RANK`.
pub(crate) struct Rank<const N: usize>;

impl<const N: usize> Rank<N> {
    pub(crate) const CHECK: () = assert!(N >= 1 && N <= MAX_RANK, "rank must be between 1 and 4");
}

/// Return `true` if `axes` holds each of `0..N` exactly once.
pub(crate) fn is_permutation<const N: usize>(axes: &[usize; N]) -> bool {
    let mut seen = [false; N];
    for &axis in axes {
        if axis >= N || seen[axis] {
            return false;
        }
        seen[axis] = true;
    }
    true
}

/// Wrap a negative index from the end of an axis of length `len`.
#[inline]
pub(crate) fn abs_index(len: Ix, index: Ixs) -> Ixs {
    if index < 0 {
        len as Ixs + index
    } else {
        index
    }
}

/// Return the lowest and highest element offsets (inclusive) reachable with
/// `shape` and `strides`, relative to the first element, or `None` if the
/// shape is empty.
///
/// Together with [`is_overlap`] this tells whether two views of the same
/// buffer may touch the same memory.
///
/// ```
/// use ndstride::{offset_range, Shape, Strides};
///
/// let shape = Shape::new([3, 4]);
/// assert_eq!(offset_range(&shape, &Strides::new([4, 1])), Some((0, 11)));
/// assert_eq!(offset_range(&shape, &Strides::new([-4, 1])), Some((-8, 3)));
/// assert_eq!(offset_range(&Shape::new([3, 0]), &Strides::new([4, 1])), None);
/// ```
pub fn offset_range<const N: usize>(shape: &Shape<N>, strides: &Strides<N>) -> Option<(Ixs, Ixs)> {
    if shape.is_empty() {
        return None;
    }
    let mut low = 0;
    let mut high = 0;
    for (&d, &s) in shape.iter().zip(strides) {
        let reach = (d as Ixs - 1) * s;
        if reach < 0 {
            low += reach;
        } else {
            high += reach;
        }
    }
    Some((low, high))
}

/// Return `true` if the closed intervals `[a_start, a_end]` and
/// `[b_start, b_end]` share at least one point.
///
/// Intervals that only touch at an end point overlap; the test is symmetric
/// in `a` and `b`. Works for element offsets as well as addresses.
///
/// ```
/// use ndstride::is_overlap;
///
/// assert!(is_overlap(0, 5, 5, 9));
/// assert!(is_overlap(0, 10, 2, 3));
/// assert!(!is_overlap(0, 4, 5, 9));
/// ```
#[inline]
pub fn is_overlap<T: PartialOrd>(a_start: T, a_end: T, b_start: T, b_end: T) -> bool {
    a_start <= b_end && b_start <= a_end
}

/// Invert the offset computation: return the index whose element offset
/// (the sum of `index[i] * strides[i]`) is `offset`.
///
/// Axes are visited in [`order`], outermost first, so this works for any
/// axis permutation. The layout must not overlap itself and strides must be
/// non-negative (debug assertions); `offset` must be reachable.
///
/// ```
/// use ndstride::{index_at_offset, Shape, Strides};
///
/// let shape = Shape::new([2, 3, 4]);
/// let strides = Strides::new([1, 8, 2]);
/// assert_eq!(index_at_offset(&shape, &strides, 15), [1, 1, 3]);
/// ```
pub fn index_at_offset<const N: usize>(shape: &Shape<N>, strides: &Strides<N>, offset: Ixs) -> [Ix; N] {
    debug_assert!(strides.iter().all(|&s| s >= 0), "index_at_offset: negative strides {:?}", strides);
    let mut index = [0; N];
    let mut rest = offset;
    for axis in order(strides, shape) {
        let s = strides[axis];
        if shape[axis] <= 1 || s == 0 {
            continue;
        }
        let i = rest / s;
        index[axis] = i as Ix;
        rest -= i * s;
    }
    debug_assert_eq!(rest, 0, "index_at_offset: offset {} is not reachable", offset);
    index
}
