// Copyright 2014-2025 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Views into externally owned buffers.

use num_integer::Integer;

use crate::accessor::Accessor;
use crate::dimension::{self, abs_index, Axis, NdIndex, Rank, Shape, Strides};
use crate::error::ShapeError;
use crate::slice::{Indexer, Slice};
use crate::{Ix, Ixs, Order};

/// An addressing description of a view: shape, strides and the element
/// offset of the view's first element, relative to some buffer owned
/// elsewhere.
///
/// A `Subregion` never owns or touches memory. Indexing and slicing it
/// produces a new `Subregion`; [`accessor`](Subregion::accessor) combines
/// it with a pointer to the buffer.
///
/// ```
/// use ndstride::{s, Shape, Subregion};
///
/// // a 6 x 8 image, row major
/// let image = Subregion::from_shape(Shape::new([6, 8]));
/// // every second row, the last three columns
/// let view = image.subregion(s![..;2, -3..]).unwrap();
/// assert_eq!(view.shape, [3, 3]);
/// assert_eq!(view.strides, [16, 1]);
/// assert_eq!(view.offset, 5);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subregion<const N: usize> {
    pub shape: Shape<N>,
    pub strides: Strides<N>,
    /// Element offset of the first element.
    pub offset: Ixs,
}

impl<const N: usize> Subregion<N> {
    /// Create a view with the given shape and strides, starting at offset 0.
    pub fn new(shape: Shape<N>, strides: Strides<N>) -> Self {
        Subregion { shape, strides, offset: 0 }
    }

    /// Create a view of a packed row major buffer of the given shape.
    pub fn from_shape(shape: Shape<N>) -> Self {
        Self::new(shape, shape.strides())
    }

    /// Return the same view, moved to start at `offset`.
    pub fn with_offset(self, offset: Ixs) -> Self {
        Subregion { offset, ..self }
    }

    /// Return the number of elements in the view.
    pub fn numel(&self) -> Ix {
        self.shape.numel()
    }

    /// Return `true` if the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    /// Apply one indexing argument per axis and return the new view.
    ///
    /// With fewer arguments than axes (`M < N`), the arguments bind to the
    /// innermost `M` axes and the outer axes are kept whole. Use the
    /// [`s!`](crate::s!) macro to build the arguments.
    ///
    /// - An integer index must lie in `-len..len`; negative indexes count
    ///   from the end. The axis keeps length 1, its stride is unchanged and
    ///   the offset moves to the selected element.
    /// - A slice must have a positive step. Its bounds wrap like indexes and
    ///   are then clamped to the axis, so slicing never fails on bounds.
    ///
    /// **Errors** with `IndexOutOfRange` or `InvalidSliceStep` naming the
    /// axis.
    ///
    /// ```
    /// use ndstride::{s, Shape, Subregion};
    ///
    /// let volume = Subregion::from_shape(Shape::new([4, 5, 6]));
    /// // arguments bind to the innermost axes
    /// let plane = volume.subregion(s![2, ..]).unwrap();
    /// assert_eq!(plane.shape, [4, 1, 6]);
    /// assert_eq!(plane.offset, 12);
    /// assert!(volume.subregion(s![5, ..]).is_err());
    /// ```
    pub fn subregion<const M: usize>(&self, indexers: [Indexer; M]) -> Result<Self, ShapeError> {
        #[allow(clippy::let_unit_value)]
        let () = Ellipsis::<N, M>::CHECK;
        let mut view = *self;
        let skip = N - M;
        for (i, indexer) in indexers.iter().enumerate() {
            view = view.apply(skip + i, indexer)?;
        }
        Ok(view)
    }

    /// Select index `index` of `axis`. The axis keeps length 1.
    ///
    /// **Errors** with `IndexOutOfRange` if the index is not in `-len..len`.
    pub fn index_axis(&self, axis: Axis, index: Ixs) -> Result<Self, ShapeError> {
        self.apply(axis.index(), &Indexer::Index(index))
    }

    /// Slice `axis` with `slice`.
    ///
    /// **Errors** with `InvalidSliceStep` if the step is not positive.
    pub fn slice_axis(&self, axis: Axis, slice: Slice) -> Result<Self, ShapeError> {
        self.apply(axis.index(), &Indexer::Slice(slice))
    }

    fn apply(&self, axis: usize, indexer: &Indexer) -> Result<Self, ShapeError> {
        let mut view = *self;
        let len = self.shape[axis];
        let stride = self.strides[axis];
        match *indexer {
            Indexer::Full => {}
            Indexer::Index(index) => {
                let i = abs_index(len, index);
                if i < 0 || i >= len as Ixs {
                    return Err(rejected!(ShapeError::index_out_of_range(axis, index, len)));
                }
                view.shape[axis] = 1;
                view.offset += stride * i;
            }
            Indexer::Slice(Slice { start, end, step }) => {
                if step <= 0 {
                    return Err(rejected!(ShapeError::slice_step(axis, step)));
                }
                let clamp = |i: Ixs| abs_index(len, i).max(0).min(len as Ixs);
                let start = clamp(start);
                let end = end.map_or(len as Ixs, clamp).max(start);
                view.shape[axis] = Integer::div_ceil(&(end - start), &step) as Ix;
                view.strides[axis] = stride * step;
                view.offset += start * stride;
            }
        }
        Ok(view)
    }

    /// Return the lowest and highest element offsets (inclusive) the view
    /// touches, or `None` if it is empty.
    ///
    /// Two views of the same buffer can only share elements if their ranges
    /// overlap; see [`is_overlap`](crate::is_overlap).
    ///
    /// ```
    /// use ndstride::{is_overlap, s, Shape, Subregion};
    ///
    /// let rows = Subregion::from_shape(Shape::new([4, 8]));
    /// let (a0, a1) = rows.subregion(s![..2, ..]).unwrap().offset_range().unwrap();
    /// let (b0, b1) = rows.subregion(s![2.., ..]).unwrap().offset_range().unwrap();
    /// assert_eq!((a0, a1, b0, b1), (0, 15, 16, 31));
    /// assert!(!is_overlap(a0, a1, b0, b1));
    /// ```
    pub fn offset_range(&self) -> Option<(Ixs, Ixs)> {
        dimension::offset_range(&self.shape, &self.strides)
            .map(|(low, high)| (low + self.offset, high + self.offset))
    }

    /// Return the element offset of `index` within the view, including the
    /// view's own offset.
    #[inline]
    pub fn offset_of<I: NdIndex<N>>(&self, index: I) -> Ixs {
        self.offset + self.strides.offset(index)
    }

    /// Return the index of the element at element offset `offset`: the
    /// inverse of [`offset_of`](Subregion::offset_of).
    ///
    /// The view must not overlap itself and must have non-negative strides.
    ///
    /// ```
    /// use ndstride::{s, Shape, Subregion};
    ///
    /// let view = Subregion::from_shape(Shape::new([4, 6])).subregion(s![1.., ..;2]).unwrap();
    /// assert_eq!(view.index_at(view.offset_of([2, 1])), [2, 1]);
    /// ```
    pub fn index_at(&self, offset: Ixs) -> [Ix; N] {
        dimension::index_at_offset(&self.shape, &self.strides, offset - self.offset)
    }

    /// Return the loop order of the view's axes; see [`order`](crate::order).
    pub fn order(&self) -> [usize; N] {
        dimension::order(&self.strides, &self.shape)
    }

    /// Return `true` if the view is packed in memory in the given order.
    pub fn is_contiguous(&self, order: Order) -> bool {
        dimension::are_contiguous(&self.strides, &self.shape, order)
    }

    /// Return the view with a new shape of the same size, without moving any
    /// elements; see [`reshape`](crate::reshape).
    ///
    /// **Errors** if the element counts differ or the layout does not allow
    /// it.
    pub fn reshape<const M: usize>(&self, shape: Shape<M>) -> Result<Subregion<M>, ShapeError> {
        let strides = dimension::reshape(&self.shape, &self.strides, &shape)?;
        Ok(Subregion { shape, strides, offset: self.offset })
    }

    /// Return the view broadcast to `shape`; see [`broadcast`](crate::broadcast).
    ///
    /// **Errors** with `ShapeMismatch` if an axis can not be broadcast.
    pub fn broadcast_to(&self, shape: Shape<N>) -> Result<Self, ShapeError> {
        let mut strides = self.strides;
        dimension::broadcast(&self.shape, &mut strides, &shape)?;
        Ok(Subregion { shape, strides, offset: self.offset })
    }

    /// Return the view with its axes permuted: axis `i` of the result is
    /// axis `axes[i]` of `self`.
    pub fn permute(&self, axes: [usize; N]) -> Self {
        Subregion {
            shape: self.shape.permute(axes),
            strides: self.strides.permute(axes),
            offset: self.offset,
        }
    }

    /// Return an accessor for the view inside the buffer that starts at `base`.
    ///
    /// The pointer is only offset, not dereferenced; the accessor's unsafe
    /// methods carry the validity requirements.
    pub fn accessor<T>(&self, base: *mut T) -> Accessor<T, N> {
        Accessor::new(base.wrapping_offset(self.offset), self.strides)
    }
}

struct Ellipsis<const N: usize, const M: usize>;

impl<const N: usize, const M: usize> Ellipsis<N, M> {
    const CHECK: () = {
        let () = Rank::<N>::CHECK;
        assert!(M <= N, "more indexing arguments than axes");
    };
}
