// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::sequence::{Forward, Reverse, SequenceMut, Sequence};
use super::Strides;
use crate::{Ix, Ixs, Order};

/// Shape description: the length of each axis of an array.
///
/// `Shape<N>` holds `N` non-negative extents, outermost axis first: axis
/// `N - 1` is the innermost, fastest varying axis of a row major layout. An
/// extent of zero on any axis makes the array structurally empty.
///
/// The rank is fixed at compile time and must be between 1 and
/// [`MAX_RANK`](crate::MAX_RANK).
///
/// ```
/// use ndstride::{Shape, Order};
///
/// let shape = Shape::new([2, 3, 4]);
/// assert_eq!(shape.numel(), 24);
/// assert_eq!(shape.strides(), [12, 4, 1]);
/// assert_eq!(shape.strides_in(Order::F), [1, 2, 6]);
/// assert_eq!(shape.resize::<4>(1), [1, 2, 3, 4]);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Shape<const N: usize>(pub(crate) [Ix; N]);

impl_axis_sequence!(Shape, Ix);

impl<const N: usize> Shape<N> {
    /// Return the number of elements, the product of the extents.
    #[inline]
    pub fn numel(&self) -> Ix {
        self.0.iter().product()
    }

    /// Return the number of elements, or `None` if the product overflows.
    pub fn numel_checked(&self) -> Option<Ix> {
        self.0.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    /// Return `true` if any axis has length zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.iter().any(|&d| d == 0)
    }

    /// Packed row major (rightmost) strides for this shape:
    /// shape `[a, b, c]` gives strides `[b * c, c, 1]`.
    #[inline]
    pub fn strides(&self) -> Strides<N> {
        self.strides_in(Order::RowMajor)
    }

    /// Packed column major strides for this shape:
    /// shape `[a, b, c]` gives strides `[1, a, a * b]`.
    #[inline]
    pub fn strides_f(&self) -> Strides<N> {
        self.strides_in(Order::ColumnMajor)
    }

    /// Packed strides for this shape in the given memory order.
    pub fn strides_in(&self, order: Order) -> Strides<N> {
        let mut strides = Strides::filled(0);
        match order {
            Order::RowMajor => {
                packed_strides(&Forward(&self.0[..]), Forward(strides.as_mut_slice()))
            }
            Order::ColumnMajor => {
                packed_strides(&Reverse(&self.0[..]), Reverse(strides.as_mut_slice()))
            }
        }
        strides
    }
}

fn packed_strides<D, S>(shape: &D, mut strides: S)
where
    D: Sequence<Output = Ix>,
    S: SequenceMut<Output = Ixs>,
{
    let mut cum_prod: Ixs = 1;
    for axis in (0..shape.len()).rev() {
        strides[axis] = cum_prod;
        cum_prod *= shape[axis] as Ixs;
    }
}
