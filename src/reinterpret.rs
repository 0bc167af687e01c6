// Copyright 2014-2025 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Viewing typed buffers as another element type.

use std::mem::{align_of, size_of};

use crate::accessor::Accessor;
use crate::dimension::{order, Shape, Strides};
use crate::error::{Reason, ShapeError};
use crate::Ixs;

/// A strided view (shape, strides and pointer to the first element) that can
/// be reinterpreted as a view of another element type over the same bytes.
///
/// Shrinking the element type (for example `f64` to `u8`) multiplies the
/// length of the innermost axis; growing it divides. The innermost axis is
/// the one with the smallest stride, as given by [`order`](crate::order),
/// which must be 1.
///
/// `Reinterpret` never dereferences its pointer. Casting between element
/// types does not make the data valid for the new type; the caller is
/// responsible for that when accessing it.
///
/// ```
/// use ndstride::{Reinterpret, Shape};
///
/// let data = [1.0f64; 6];
/// let floats = Reinterpret::from_slice(&data, Shape::new([2, 3]));
/// let bytes = floats.as_type::<u8>().unwrap();
/// assert_eq!(bytes.shape, [2, 24]);
/// assert_eq!(bytes.strides, [24, 1]);
///
/// let back = bytes.as_type::<f64>().unwrap();
/// assert_eq!((back.shape, back.strides, back.ptr), (floats.shape, floats.strides, floats.ptr));
/// ```
#[derive(Debug)]
pub struct Reinterpret<T, const N: usize> {
    pub shape: Shape<N>,
    pub strides: Strides<N>,
    pub ptr: *mut T,
}

copy_and_clone!([T, const N: usize] Reinterpret<T, N>);

impl<T, const N: usize> Reinterpret<T, N> {
    /// Create from the parts of a strided view.
    pub fn new(shape: Shape<N>, strides: Strides<N>, ptr: *mut T) -> Self {
        Reinterpret { shape, strides, ptr }
    }

    /// Create a packed row major view of `data`.
    ///
    /// The view is read only in spirit: it carries a `*mut T` so it can be
    /// turned into an accessor, but must not be written through.
    ///
    /// **Panics** if `shape` holds more elements than `data`.
    pub fn from_slice(data: &[T], shape: Shape<N>) -> Self {
        assert!(shape.numel() <= data.len(), "Reinterpret::from_slice: shape {} too large for {} elements",
                shape, data.len());
        Self::new(shape, shape.strides(), data.as_ptr() as *mut T)
    }

    /// Create a packed row major view of `data`.
    ///
    /// **Panics** if `shape` holds more elements than `data`.
    pub fn from_mut_slice(data: &mut [T], shape: Shape<N>) -> Self {
        assert!(shape.numel() <= data.len(), "Reinterpret::from_mut_slice: shape {} too large for {} elements",
                shape, data.len());
        Self::new(shape, shape.strides(), data.as_mut_ptr())
    }

    /// Return the same view with element type `V`.
    ///
    /// - Equal sizes: the pointer is cast; shape and strides are unchanged.
    /// - `V` smaller: the size of `T` must be a multiple of the size of `V`,
    ///   by a ratio `r`. The innermost axis must have stride 1; its length is
    ///   multiplied by `r` and all other strides are multiplied by `r`.
    /// - `V` larger: the size of `V` must be a multiple of the size of `T`,
    ///   by a ratio `r`. The innermost axis must have stride 1 and a length
    ///   divisible by `r`, and all other strides must be divisible by `r`;
    ///   they are all divided by `r`.
    ///
    /// In every case the pointer must be aligned for `V`. Zero sized types
    /// are not supported.
    ///
    /// **Errors** with `ReinterpretIncompatible` naming the violated
    /// requirement, the axis and value involved, and both types.
    pub fn as_type<V>(&self) -> Result<Reinterpret<V, N>, ShapeError> {
        let from = size_of::<T>();
        let to = size_of::<V>();
        if from == 0 || to == 0 {
            return Err(rejected!(ShapeError::reinterpret::<T, V>(Reason::ZeroSized, None, 0)));
        }
        let address = self.ptr as usize;
        if address % align_of::<V>() != 0 {
            return Err(rejected!(ShapeError::reinterpret::<T, V>(Reason::Alignment, None, address as Ixs)));
        }

        let mut shape = self.shape;
        let mut strides = self.strides;
        if from != to {
            let inner = order(&self.strides, &self.shape)[N - 1];
            if self.shape[inner] > 1 && self.strides[inner] != 1 {
                return Err(rejected!(ShapeError::reinterpret::<T, V>(
                    Reason::InnermostStride,
                    Some(inner),
                    self.strides[inner],
                )));
            }
            if from > to {
                if from % to != 0 {
                    return Err(rejected!(ShapeError::reinterpret::<T, V>(Reason::SizeNotMultiple, None, to as Ixs)));
                }
                let ratio = from / to;
                for axis in 0..N {
                    if axis != inner {
                        strides[axis] *= ratio as Ixs;
                    }
                }
                shape[inner] *= ratio;
                strides[inner] = 1;
            } else {
                if to % from != 0 {
                    return Err(rejected!(ShapeError::reinterpret::<T, V>(Reason::SizeNotMultiple, None, to as Ixs)));
                }
                let ratio = to / from;
                if shape[inner] % ratio != 0 {
                    return Err(rejected!(ShapeError::reinterpret::<T, V>(
                        Reason::InnermostExtent,
                        Some(inner),
                        shape[inner] as Ixs,
                    )));
                }
                for axis in 0..N {
                    if axis != inner && strides[axis] % ratio as Ixs != 0 {
                        return Err(rejected!(ShapeError::reinterpret::<T, V>(
                            Reason::OuterStride,
                            Some(axis),
                            strides[axis],
                        )));
                    }
                }
                for axis in 0..N {
                    if axis != inner {
                        strides[axis] /= ratio as Ixs;
                    }
                }
                shape[inner] /= ratio;
                strides[inner] = 1;
            }
        }
        Ok(Reinterpret { shape, strides, ptr: self.ptr as *mut V })
    }

    /// Return an accessor over the view.
    pub fn accessor(&self) -> Accessor<T, N> {
        Accessor::new(self.ptr, self.strides)
    }
}
