// Copyright 2014-2025 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Axis ordering and contiguity queries.

use std::cmp::Reverse as Descending;

use super::sequence::{Forward, Reverse, Sequence, SequenceMut};
use super::{Shape, Strides};
use crate::{Ix, Ixs, Order};

/// Return the axis permutation that sorts the axes by descending stride,
/// outermost first.
///
/// Axes of length zero or one have no meaningful stride; they sort as if
/// their stride were the largest possible, which moves them to the outermost
/// positions. The sort is stable: axes with equal strides, and the length
/// one axes among themselves, keep their relative order.
///
/// Loops over an array in this order have the physically fastest varying
/// axis innermost. Already rightmost strides give the identity permutation.
///
/// ```
/// use ndstride::{order, Shape, Strides};
///
/// let shape = Shape::new([2, 1, 3, 4]);
/// assert_eq!(order(&Strides::new([12, 12, 4, 1]), &shape), [1, 0, 2, 3]);
/// assert_eq!(order(&shape.strides_f(), &shape), [1, 3, 2, 0]);
/// ```
pub fn order<const N: usize>(strides: &Strides<N>, shape: &Shape<N>) -> [usize; N] {
    let mut axes: [usize; N] = std::array::from_fn(|axis| axis);
    axes.sort_by_key(|&axis| {
        if shape[axis] <= 1 {
            Descending(Ixs::MAX)
        } else {
            Descending(strides[axis])
        }
    });
    axes
}

/// Return `true` if the strides are non-increasing from left to right, that
/// is, already in rightmost order.
///
/// ```
/// use ndstride::{is_rightmost, Strides};
///
/// assert!(is_rightmost(&Strides::new([12, 4, 4, 1])));
/// assert!(!is_rightmost(&Strides::new([1, 3])));
/// ```
pub fn is_rightmost<const N: usize>(strides: &Strides<N>) -> bool {
    strides.as_slice().windows(2).all(|w| w[0] >= w[1])
}

/// Return `true` if the layout is packed in the given order: no gaps, no
/// broadcast axes, and the axes nested in the order of `order`.
///
/// Every axis must either have length one, which allows any stride, or
/// have a stride equal to the product of the lengths of the axes inside it
/// (to its right for row major, to its left for column major).
///
/// An array with an axis of length zero is never contiguous.
///
/// ```
/// use ndstride::{are_contiguous, Order, Shape, Strides};
///
/// let shape = Shape::new([2, 1, 3, 4]);
/// assert!(are_contiguous(&Strides::new([12, 12, 4, 1]), &shape, Order::C));
/// assert!(are_contiguous(&Strides::new([12, 99, 4, 1]), &shape, Order::C));
/// assert!(!are_contiguous(&Strides::new([12, 12, 4, 1]), &shape, Order::F));
/// assert!(!are_contiguous(&Strides::new([0, 12, 4, 1]), &Shape::new([2, 1, 3, 0]), Order::C));
/// ```
pub fn are_contiguous<const N: usize>(strides: &Strides<N>, shape: &Shape<N>, order: Order) -> bool {
    if shape.is_empty() {
        return false;
    }
    match order {
        Order::RowMajor => are_packed(&Forward(strides.as_slice()), &Forward(shape.as_slice())),
        Order::ColumnMajor => are_packed(&Reverse(strides.as_slice()), &Reverse(shape.as_slice())),
    }
}

fn are_packed<S, D>(strides: &S, shape: &D) -> bool
where
    S: Sequence<Output = Ixs>,
    D: Sequence<Output = Ix>,
{
    let mut expected: Ixs = 1;
    for axis in (0..shape.len()).rev() {
        // a length one axis can have any stride
        if shape[axis] != 1 && strides[axis] != expected {
            return false;
        }
        expected *= shape[axis] as Ixs;
    }
    true
}

/// Per-axis contiguity: entry `i` is `true` if axis `i` is packed directly
/// around the next axis inward (in the given order).
///
/// The innermost axis is contiguous if its stride is 1. Any other axis is
/// contiguous if its stride equals the stride of the next axis inward times
/// that axis' length. Length one axes are always contiguous and broadcast
/// axes (stride 0) never are. Both pass the stride of the next real axis
/// inward on to the axis outside them, so an interior length one or
/// broadcast axis does not break the contiguity of its neighbours.
///
/// Unlike [`are_contiguous`], each axis is judged only against its inner
/// neighbour: the result tells which axes could be merged with the one
/// inside them. All entries are `false` if any axis has length zero.
///
/// ```
/// use ndstride::{is_contiguous, Order, Shape, Strides};
///
/// let shape = Shape::new([2, 3, 4]);
/// // the middle axis has a gap after it (row pitch 8 for 4 elements)
/// let strides = Strides::new([24, 8, 1]);
/// assert_eq!(is_contiguous(&strides, &shape, Order::C), [true, false, true]);
/// assert_eq!(is_contiguous(&strides, &Shape::new([2, 0, 4]), Order::C), [false; 3]);
/// ```
pub fn is_contiguous<const N: usize>(strides: &Strides<N>, shape: &Shape<N>, order: Order) -> [bool; N] {
    let mut contiguous = [false; N];
    if shape.is_empty() {
        return contiguous;
    }
    match order {
        Order::RowMajor => packed_axes(
            &Forward(strides.as_slice()),
            &Forward(shape.as_slice()),
            Forward(&mut contiguous[..]),
        ),
        Order::ColumnMajor => packed_axes(
            &Reverse(strides.as_slice()),
            &Reverse(shape.as_slice()),
            Reverse(&mut contiguous[..]),
        ),
    }
    contiguous
}

fn packed_axes<S, D, B>(strides: &S, shape: &D, mut contiguous: B)
where
    S: Sequence<Output = Ixs>,
    D: Sequence<Output = Ix>,
    B: SequenceMut<Output = bool>,
{
    let mut expected: Ixs = 1;
    for axis in (0..shape.len()).rev() {
        if shape[axis] == 1 {
            contiguous[axis] = true;
        } else if strides[axis] == 0 {
            // broadcast: not packed, and transparent to the axis outside it
            contiguous[axis] = false;
        } else {
            contiguous[axis] = strides[axis] == expected;
            expected = strides[axis] * shape[axis] as Ixs;
        }
    }
}

/// Return the stable permutation that moves all axes of length zero or one
/// to the outermost positions.
///
/// Both groups keep their relative order, so applying the permutation with
/// [`Shape::permute`] and [`Strides::permute`] leaves the non-trivial axes
/// packed at the inner end in their original order.
///
/// ```
/// use ndstride::{squeeze, Shape};
///
/// assert_eq!(squeeze(&Shape::new([3, 1, 4, 1])), [1, 3, 0, 2]);
/// assert_eq!(squeeze(&Shape::new([1, 0, 5, 1])), [0, 1, 3, 2]);
/// ```
pub fn squeeze<const N: usize>(shape: &Shape<N>) -> [usize; N] {
    let mut axes: [usize; N] = std::array::from_fn(|axis| axis);
    axes.sort_by_key(|&axis| shape[axis] > 1);
    axes
}
