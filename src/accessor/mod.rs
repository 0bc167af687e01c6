// Copyright 2014-2025 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pointer plus strides element addressing.

use std::fmt;
use std::marker::PhantomData;

use rawpointer::PointerExt;

use crate::dimension::{NdIndex, Strides};
use crate::{Ix, Ixs};

pub use self::operand::Operand;
pub use self::reference::AccessorReference;
pub use self::traits::{Aliased, Contiguous, PointerTrait, Restrict, Strided, StridesTrait};
pub use self::value::AccessorValue;

mod operand;
mod reference;
mod traits;
mod value;

/// A pointer to the first element of a strided array together with its
/// strides: the addressing part of an array, without shape or ownership.
///
/// Kernels take an `Accessor` plus a [`Shape`](crate::Shape) and compute
/// the address of every element they visit. Indexing is not bounds checked
/// and only offsets the pointer; the unsafe `get` methods dereference it.
///
/// The two trailing type parameters are compile time tags:
///
/// - `P`: [`Aliased`] (default) or [`Restrict`], whether the pointer may
///   alias the other operands of a kernel.
/// - `S`: [`Strided`] (default) or [`Contiguous`]. A contiguous accessor has
///   an innermost stride of 1 that offset computations do not read.
///
/// ```
/// use ndstride::{Accessor, Shape};
///
/// let mut data = [0, 1, 2, 3, 4, 5];
/// let shape = Shape::new([2, 3]);
/// let acc: Accessor<i32, 2> = Accessor::from_slice(&mut data, shape.strides());
/// assert_eq!(acc.offset_of([1, 2]), 5);
/// assert_eq!(unsafe { *acc.get([1, 0]) }, 3);
///
/// // peel the outer axis
/// let row = acc.at(1);
/// assert_eq!(unsafe { *row.get(&[2]) }, 5);
/// ```
pub struct Accessor<T, const N: usize, P: PointerTrait = Aliased, S: StridesTrait = Strided> {
    ptr: *mut T,
    strides: Strides<N>,
    marker: PhantomData<(P, S)>,
}

copy_and_clone!([T, const N: usize, P: PointerTrait, S: StridesTrait] Accessor<T, N, P, S>);

impl<T, const N: usize, P: PointerTrait, S: StridesTrait> fmt::Debug for Accessor<T, N, P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("ptr", &self.ptr)
            .field("strides", &self.strides)
            .field("restrict", &P::RESTRICT)
            .field("contiguous", &S::CONTIGUOUS)
            .finish()
    }
}

impl<T, const N: usize, P: PointerTrait, S: StridesTrait> Accessor<T, N, P, S> {
    /// `true` for [`Restrict`] accessors.
    pub const RESTRICT: bool = P::RESTRICT;
    /// `true` for [`Contiguous`] accessors.
    pub const CONTIGUOUS: bool = S::CONTIGUOUS;

    /// Create an accessor from a pointer to the first element and strides.
    ///
    /// For [`Contiguous`] accessors the innermost stride must be 1 (debug
    /// assertion).
    #[inline]
    pub fn new(ptr: *mut T, strides: Strides<N>) -> Self {
        let mut strides = strides;
        if S::CONTIGUOUS {
            debug_assert_eq!(strides[N - 1], 1, "contiguous accessor with innermost stride {}", strides[N - 1]);
            strides[N - 1] = 1;
        }
        Accessor { ptr, strides, marker: PhantomData }
    }

    /// Create an accessor over `data`, which must hold every element the
    /// accessor will be used to reach.
    #[inline]
    pub fn from_slice(data: &mut [T], strides: Strides<N>) -> Self {
        Self::new(data.as_mut_ptr(), strides)
    }

    /// Return the pointer to the first element.
    #[inline(always)]
    pub fn as_ptr(&self) -> *mut T {
        self.ptr
    }

    #[inline(always)]
    pub fn strides(&self) -> &Strides<N> {
        &self.strides
    }

    /// Return the stride of `axis`.
    #[inline(always)]
    pub fn stride(&self, axis: usize) -> Ixs {
        self.strides[axis]
    }

    /// Return the element offset of `index`: the sum of `index[i] * stride[i]`.
    ///
    /// No bounds checking is performed.
    #[inline(always)]
    pub fn offset_of<I: NdIndex<N>>(&self, index: I) -> Ixs {
        let index = index.into_indices();
        let mut offset = 0;
        for axis in 0..N - 1 {
            offset += index[axis] * self.strides[axis];
        }
        if S::CONTIGUOUS {
            offset + index[N - 1]
        } else {
            offset + index[N - 1] * self.strides[N - 1]
        }
    }

    /// Return a pointer to the element at `index`.
    ///
    /// The pointer arithmetic wraps; the result is only valid to dereference
    /// if the element is part of the addressed buffer.
    #[inline(always)]
    pub fn ptr_at<I: NdIndex<N>>(&self, index: I) -> *mut T {
        self.ptr.wrapping_offset(self.offset_of(index))
    }

    /// Return a reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// The element must be inside the buffer the accessor was created for,
    /// be initialized, and must not be written through any other path for
    /// the lifetime `'a`.
    #[inline(always)]
    pub unsafe fn get<'a, I: NdIndex<N>>(self, index: I) -> &'a T {
        &*self.ptr.offset(self.offset_of(index))
    }

    /// Return a mutable reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// The element must be inside the buffer the accessor was created for,
    /// the buffer must be writable, and the element must not be accessed
    /// through any other path for the lifetime `'a`.
    #[inline(always)]
    pub unsafe fn get_mut<'a, I: NdIndex<N>>(self, index: I) -> &'a mut T {
        &mut *self.ptr.offset(self.offset_of(index))
    }

    /// Peel the outermost axis: return the accessor of rank `N - 1` at index
    /// `i` of axis 0. The reference borrows the remaining strides from
    /// `self`. At rank 1 the result has rank 0 and addresses one element;
    /// [`elem`](Accessor::elem) goes straight to the element reference.
    #[inline]
    pub fn at(&self, i: Ix) -> AccessorReference<'_, T, P> {
        let ptr = self.ptr.wrapping_offset(self.strides[0] * i as Ixs);
        AccessorReference::new(ptr, &self.strides.as_slice()[1..])
    }

    /// Return the same accessor with the [`Strided`] tag.
    #[inline]
    pub fn into_strided(self) -> Accessor<T, N, P, Strided> {
        Accessor { ptr: self.ptr, strides: self.strides, marker: PhantomData }
    }

    /// Return the same accessor with the [`Aliased`] tag.
    #[inline]
    pub fn into_aliased(self) -> Accessor<T, N, Aliased, S> {
        Accessor { ptr: self.ptr, strides: self.strides, marker: PhantomData }
    }
}

impl<T, const N: usize, P: PointerTrait> Accessor<T, N, P, Strided> {
    /// Reorder the axes: axis `i` of the result is axis `axes[i]` of `self`.
    /// Use with [`order`](crate::order) to loop over memory in order.
    #[inline]
    pub fn permute(self, axes: [usize; N]) -> Self {
        Accessor { ptr: self.ptr, strides: self.strides.permute(axes), marker: PhantomData }
    }

    /// Return the same accessor with the [`Contiguous`] tag.
    ///
    /// The innermost stride must be 1 (debug assertion).
    #[inline]
    pub fn into_contiguous(self) -> Accessor<T, N, P, Contiguous> {
        Accessor::new(self.ptr, self.strides)
    }
}

impl<T, const N: usize, S: StridesTrait> Accessor<T, N, Aliased, S> {
    /// Return the same accessor with the [`Restrict`] tag.
    ///
    /// # Safety
    ///
    /// The memory the accessor reaches must not be accessed through any
    /// other pointer while the returned accessor is in use.
    #[inline]
    pub unsafe fn into_restrict(self) -> Accessor<T, N, Restrict, S> {
        Accessor { ptr: self.ptr, strides: self.strides, marker: PhantomData }
    }
}

impl<T, P: PointerTrait, S: StridesTrait> Accessor<T, 1, P, S> {
    /// Return a reference to element `i` of a rank 1 accessor.
    ///
    /// # Safety
    ///
    /// As for [`get`](Accessor::get).
    #[inline(always)]
    pub unsafe fn elem<'a>(self, i: Ix) -> &'a T {
        &*self.ptr.stride_offset(self.strides[0], i)
    }

    /// Return a mutable reference to element `i` of a rank 1 accessor.
    ///
    /// # Safety
    ///
    /// As for [`get_mut`](Accessor::get_mut).
    #[inline(always)]
    pub unsafe fn elem_mut<'a>(self, i: Ix) -> &'a mut T {
        &mut *self.ptr.stride_offset(self.strides[0], i)
    }
}
