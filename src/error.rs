// Copyright 2014-2025 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

use crate::dimension::Axis;
use crate::{Ix, Ixs};

/// An error related to array shape, layout, indexing or reinterpretation.
///
/// Every failing operation in this crate returns a `ShapeError` that names
/// the offending axis and values; the [`kind`](ShapeError::kind) gives the
/// category.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShapeError {
    // we want to be able to change this representation later
    repr: Repr,
}

impl ShapeError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            Repr::Broadcast { .. } | Repr::ElementCount { .. } => ErrorKind::ShapeMismatch,
            Repr::EmptyReshape | Repr::Layout { .. } => ErrorKind::IncompatibleLayout,
            Repr::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Repr::SliceStep { .. } => ErrorKind::InvalidSliceStep,
            Repr::Reinterpret { .. } => ErrorKind::ReinterpretIncompatible,
        }
    }

    /// Return the axis the error was detected on, if it concerns one axis.
    pub fn axis(&self) -> Option<Axis> {
        match self.repr {
            Repr::Broadcast { axis, .. }
            | Repr::Layout { axis }
            | Repr::IndexOutOfRange { axis, .. }
            | Repr::SliceStep { axis, .. } => Some(Axis(axis)),
            Repr::Reinterpret { axis, .. } => axis.map(Axis),
            Repr::ElementCount { .. } | Repr::EmptyReshape => None,
        }
    }

    pub(crate) fn broadcast(axis: usize, input: Ix, output: Ix) -> Self {
        ShapeError { repr: Repr::Broadcast { axis, input, output } }
    }

    pub(crate) fn element_count(from: Ix, to: Ix) -> Self {
        ShapeError { repr: Repr::ElementCount { from, to } }
    }

    pub(crate) fn empty_reshape() -> Self {
        ShapeError { repr: Repr::EmptyReshape }
    }

    pub(crate) fn layout(axis: usize) -> Self {
        ShapeError { repr: Repr::Layout { axis } }
    }

    pub(crate) fn index_out_of_range(axis: usize, index: Ixs, size: Ix) -> Self {
        ShapeError { repr: Repr::IndexOutOfRange { axis, index, size } }
    }

    pub(crate) fn slice_step(axis: usize, step: Ixs) -> Self {
        ShapeError { repr: Repr::SliceStep { axis, step } }
    }

    pub(crate) fn reinterpret<T, V>(reason: Reason, axis: Option<usize>, value: Ixs) -> Self {
        ShapeError {
            repr: Repr::Reinterpret {
                reason,
                axis,
                value,
                from: std::any::type_name::<T>(),
                to: std::any::type_name::<V>(),
            },
        }
    }
}

/// Error code for an error related to array shape, layout or indexing.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// incompatible extents in broadcast or reshape
    ShapeMismatch,
    /// the memory layout can not describe the new shape without a copy
    IncompatibleLayout,
    /// integer index outside `-size..size`
    IndexOutOfRange,
    /// slice step that is zero or negative
    InvalidSliceStep,
    /// stride, extent, size or alignment forbids viewing the data as another type
    ReinterpretIncompatible,
}

/// What a reinterpretation tripped over.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Reason {
    ZeroSized,
    SizeNotMultiple,
    InnermostStride,
    OuterStride,
    InnermostExtent,
    Alignment,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Repr {
    Broadcast {
        axis: usize,
        input: Ix,
        output: Ix,
    },
    ElementCount {
        from: Ix,
        to: Ix,
    },
    EmptyReshape,
    Layout {
        axis: usize,
    },
    IndexOutOfRange {
        axis: usize,
        index: Ixs,
        size: Ix,
    },
    SliceStep {
        axis: usize,
        step: Ixs,
    },
    Reinterpret {
        reason: Reason,
        axis: Option<usize>,
        value: Ixs,
        from: &'static str,
        to: &'static str,
    },
}

impl Error for ShapeError {}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::Broadcast { axis, input, output } => write!(
                f,
                "incompatible shapes: can not broadcast axis {} from length {} to length {}",
                axis, input, output
            ),
            Repr::ElementCount { from, to } => write!(
                f,
                "incompatible shapes: {} elements can not be reshaped into {} elements",
                from, to
            ),
            Repr::EmptyReshape => write!(f, "incompatible layout: can not reshape an empty array without copying"),
            Repr::Layout { axis } => write!(
                f,
                "incompatible layout: new axis {} spans a non-contiguous boundary of the old layout",
                axis
            ),
            Repr::IndexOutOfRange { axis, index, size } => write!(
                f,
                "index out of range: index {} is out of bounds for axis {} with length {}",
                index, axis, size
            ),
            Repr::SliceStep { axis, step } => {
                write!(f, "invalid slice step: step {} on axis {} must be positive", step, axis)
            }
            Repr::Reinterpret { reason, axis, value, from, to } => {
                write!(f, "can not reinterpret {} as {}: ", from, to)?;
                match reason {
                    Reason::ZeroSized => write!(f, "zero sized element types are not supported"),
                    Reason::SizeNotMultiple => {
                        write!(f, "the larger element size is not a multiple of the smaller")
                    }
                    Reason::InnermostStride => write!(f, "the innermost stride must be 1, got {}", value),
                    Reason::OuterStride => write!(f, "stride {} is not divisible by the size ratio", value),
                    Reason::InnermostExtent => {
                        write!(f, "innermost length {} is not divisible by the size ratio", value)
                    }
                    Reason::Alignment => write!(f, "pointer {:#x} is not aligned for the new type", value),
                }?;
                if let Some(axis) = axis {
                    write!(f, " (axis {})", axis)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_and_axes() {
        let e = ShapeError::broadcast(2, 3, 4);
        assert_eq!(e.kind(), ErrorKind::ShapeMismatch);
        assert_eq!(e.axis(), Some(Axis(2)));

        let e = ShapeError::element_count(6, 8);
        assert_eq!(e.kind(), ErrorKind::ShapeMismatch);
        assert_eq!(e.axis(), None);

        assert_eq!(ShapeError::empty_reshape().kind(), ErrorKind::IncompatibleLayout);
        assert_eq!(ShapeError::slice_step(0, -1).kind(), ErrorKind::InvalidSliceStep);
    }

    #[test]
    fn messages_name_the_offender() {
        let e = ShapeError::index_out_of_range(1, -11, 10);
        let msg = e.to_string();
        assert!(msg.contains("-11"), "{}", msg);
        assert!(msg.contains("axis 1"), "{}", msg);
        assert!(msg.contains("10"), "{}", msg);

        let e = ShapeError::reinterpret::<f64, u8>(Reason::InnermostStride, Some(2), 3);
        let msg = e.to_string();
        assert!(msg.contains("f64") && msg.contains("u8"), "{}", msg);
        assert!(msg.contains("got 3") && msg.contains("axis 2"), "{}", msg);
        assert_eq!(e.kind(), ErrorKind::ReinterpretIncompatible);
    }
}
