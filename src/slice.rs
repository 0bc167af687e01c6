// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

/// A slice (range with step size).
///
/// Negative `start` or `end` indexes are counted from the back of the axis. If
/// `end` is `None`, the slice extends to the end of the axis. Out of range
/// bounds are clamped to the axis when the slice is applied.
///
/// `step` must be positive; a zero or negative step is rejected with
/// `InvalidSliceStep` when the slice is applied to a
/// [`Subregion`](crate::Subregion).
///
/// ## Examples
///
/// `Slice::new(0, None, 1)` is the full range of an axis. It can also be
/// created with `Slice::from(..)`. The Python equivalent is `[:]`.
///
/// `Slice::new(a, Some(b), 2)` is every second element from `a` until `b`. It
/// can also be created with `Slice::from(a..b).step_by(2)`. The Python
/// equivalent is `[a:b:2]`.
///
/// `Slice::from(-3..)` is the last three elements. The Python equivalent is
/// `[-3:]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slice {
    pub start: isize,
    pub end: Option<isize>,
    pub step: isize,
}

impl Slice {
    /// Create a new `Slice` with the given extents.
    ///
    /// See also the `From` impls, converting from ranges; for example
    /// `Slice::from(i..)` or `Slice::from(j..k)`.
    pub fn new(start: isize, end: Option<isize>, step: isize) -> Slice {
        Slice { start, end, step }
    }

    /// Create a new `Slice` with the given step size (multiplied with the
    /// previous step size).
    #[inline]
    pub fn step_by(self, step: isize) -> Self {
        Slice { step: self.step * step, ..self }
    }
}

macro_rules! impl_slice_from_index_type {
    ($index:ty) => {
        impl From<Range<$index>> for Slice {
            #[inline]
            fn from(r: Range<$index>) -> Slice {
                Slice { start: r.start as isize, end: Some(r.end as isize), step: 1 }
            }
        }

        impl From<RangeInclusive<$index>> for Slice {
            #[inline]
            fn from(r: RangeInclusive<$index>) -> Slice {
                let end = *r.end() as isize;
                // `..=-1` means to the end
                Slice { start: *r.start() as isize, end: if end == -1 { None } else { Some(end + 1) }, step: 1 }
            }
        }

        impl From<RangeFrom<$index>> for Slice {
            #[inline]
            fn from(r: RangeFrom<$index>) -> Slice {
                Slice { start: r.start as isize, end: None, step: 1 }
            }
        }

        impl From<RangeTo<$index>> for Slice {
            #[inline]
            fn from(r: RangeTo<$index>) -> Slice {
                Slice { start: 0, end: Some(r.end as isize), step: 1 }
            }
        }

        impl From<RangeToInclusive<$index>> for Slice {
            #[inline]
            fn from(r: RangeToInclusive<$index>) -> Slice {
                let end = r.end as isize;
                Slice { start: 0, end: if end == -1 { None } else { Some(end + 1) }, step: 1 }
            }
        }
    };
}

impl_slice_from_index_type!(isize);
impl_slice_from_index_type!(usize);
impl_slice_from_index_type!(i32);

impl From<RangeFull> for Slice {
    #[inline]
    fn from(_: RangeFull) -> Slice {
        Slice { start: 0, end: None, step: 1 }
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start != 0 {
            write!(f, "{}", self.start)?;
        }
        write!(f, "..")?;
        if let Some(i) = self.end {
            write!(f, "{}", i)?;
        }
        if self.step != 1 {
            write!(f, ";{}", self.step)?;
        }
        Ok(())
    }
}

/// An indexing argument for one axis: an integer index, the whole axis, or
/// a slice.
///
/// See also the [`s![]`](crate::s!) macro for a convenient way to create an
/// array of indexers.
///
/// ## Examples
///
/// `Indexer::Index(a)` is the index `a`. It can also be created with
/// `Indexer::from(a)`. The Python equivalent is `[a]`. The macro equivalent
/// is `s![a]`. Negative indexes count from the back of the axis.
///
/// `Indexer::Full` is the full range of an axis. It can also be created with
/// `Indexer::from(..)`. The Python equivalent is `[:]`. The macro equivalent
/// is `s![..]`.
///
/// `Indexer::Slice(Slice { start: a, end: Some(b), step: 2 })` is every
/// second element from `a` until `b`. It can also be created with
/// `Indexer::from(a..b).step_by(2)`. The Python equivalent is `[a:b:2]`. The
/// macro equivalent is `s![a..b;2]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Indexer {
    /// A single index; the axis keeps length 1.
    Index(isize),
    /// The whole axis, unchanged.
    Full,
    /// A range with step size.
    Slice(Slice),
}

impl Indexer {
    /// Returns `true` if `self` is an `Index` value.
    pub fn is_index(&self) -> bool {
        matches!(self, Indexer::Index(_))
    }

    /// Returns `true` if `self` is a `Slice` or `Full` value.
    pub fn is_slice(&self) -> bool {
        !self.is_index()
    }

    /// Returns a new `Indexer` with the given step size (multiplied with
    /// the previous step size). `Full` becomes a slice over the whole axis;
    /// an index is returned unchanged.
    #[inline]
    pub fn step_by(self, step: isize) -> Self {
        match self {
            Indexer::Index(i) => Indexer::Index(i),
            Indexer::Full => Indexer::Slice(Slice::from(..).step_by(step)),
            Indexer::Slice(s) => Indexer::Slice(s.step_by(step)),
        }
    }
}

impl fmt::Display for Indexer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Indexer::Index(index) => write!(f, "{}", index),
            Indexer::Full => write!(f, ".."),
            Indexer::Slice(s) => write!(f, "{}", s),
        }
    }
}

impl From<Slice> for Indexer {
    #[inline]
    fn from(s: Slice) -> Indexer {
        Indexer::Slice(s)
    }
}

impl From<RangeFull> for Indexer {
    #[inline]
    fn from(_: RangeFull) -> Indexer {
        Indexer::Full
    }
}

macro_rules! impl_indexer_from_index_type {
    ($index:ty) => {
        impl From<$index> for Indexer {
            #[inline]
            fn from(r: $index) -> Indexer {
                Indexer::Index(r as isize)
            }
        }

        impl From<Range<$index>> for Indexer {
            #[inline]
            fn from(r: Range<$index>) -> Indexer {
                Indexer::Slice(Slice::from(r))
            }
        }

        impl From<RangeInclusive<$index>> for Indexer {
            #[inline]
            fn from(r: RangeInclusive<$index>) -> Indexer {
                Indexer::Slice(Slice::from(r))
            }
        }

        impl From<RangeFrom<$index>> for Indexer {
            #[inline]
            fn from(r: RangeFrom<$index>) -> Indexer {
                Indexer::Slice(Slice::from(r))
            }
        }

        impl From<RangeTo<$index>> for Indexer {
            #[inline]
            fn from(r: RangeTo<$index>) -> Indexer {
                Indexer::Slice(Slice::from(r))
            }
        }

        impl From<RangeToInclusive<$index>> for Indexer {
            #[inline]
            fn from(r: RangeToInclusive<$index>) -> Indexer {
                Indexer::Slice(Slice::from(r))
            }
        }
    };
}

impl_indexer_from_index_type!(isize);
impl_indexer_from_index_type!(usize);
impl_indexer_from_index_type!(i32);

/// Slice argument constructor.
///
/// `s![]` takes a list of ranges/slices/indices, separated by comma, with
/// optional step sizes that are separated from the range by a semicolon. It
/// evaluates to an array `[Indexer; M]` with one entry per argument, to be
/// passed to [`Subregion::subregion`](crate::Subregion::subregion).
///
/// Each range/slice/index uses signed indices, where a negative value is
/// counted from the end of the axis. Step sizes must be positive.
///
/// The syntax is `s![` *[ axis-slice-or-index [, axis-slice-or-index [ , ...
/// ] ] ]* `]`, where *axis-slice-or-index* is any of the following:
///
/// * *index*: an index to use for taking a subview with respect to that axis.
///   (The index is selected. The axis keeps length 1.)
/// * *range*: a range with step size 1 to use for slicing that axis.
/// * *range* `;` *step*: a range with step size *step* to use for slicing that axis.
/// * *slice*: a [`Slice`] instance to use for slicing that axis.
/// * *slice* `;` *step*: a range constructed from the start and end of a [`Slice`]
///   instance, with new step size *step*, to use for slicing that axis.
///
/// `..` keeps an axis whole. When fewer arguments than axes are given, the
/// arguments bind to the innermost axes and the outer axes are kept whole.
///
/// ```
/// use ndstride::{s, Indexer, Shape, Slice, Subregion};
///
/// let args = s![1, 2..;2, ..];
/// assert_eq!(args, [Indexer::Index(1), Indexer::Slice(Slice::new(2, None, 2)), Indexer::Full]);
///
/// let view = Subregion::from_shape(Shape::new([4, 10, 3])).subregion(args).unwrap();
/// assert_eq!(view.shape, [1, 4, 3]);
/// assert_eq!(view.strides, [30, 6, 1]);
/// assert_eq!(view.offset, 36);
/// ```
#[macro_export]
macro_rules! s(
    // convert a..b;c into @convert(a..b, c), final item
    (@parse [$($stack:tt)*] $r:expr;$s:expr) => {
        [$($stack)* $crate::s!(@convert $r, $s)]
    };
    // convert a..b into @convert(a..b), final item
    (@parse [$($stack:tt)*] $r:expr) => {
        [$($stack)* $crate::s!(@convert $r)]
    };
    // convert a..b;c into @convert(a..b, c), final item, trailing comma
    (@parse [$($stack:tt)*] $r:expr;$s:expr ,) => {
        [$($stack)* $crate::s!(@convert $r, $s)]
    };
    // convert a..b into @convert(a..b), final item, trailing comma
    (@parse [$($stack:tt)*] $r:expr ,) => {
        [$($stack)* $crate::s!(@convert $r)]
    };
    // convert a..b;c into @convert(a..b, c)
    (@parse [$($stack:tt)*] $r:expr;$s:expr, $($t:tt)*) => {
        $crate::s![@parse [$($stack)* $crate::s!(@convert $r, $s),] $($t)*]
    };
    // convert a..b into @convert(a..b)
    (@parse [$($stack:tt)*] $r:expr, $($t:tt)*) => {
        $crate::s![@parse [$($stack)* $crate::s!(@convert $r),] $($t)*]
    };
    // convert range/index into Indexer
    (@convert $r:expr) => {
        <$crate::Indexer as ::std::convert::From<_>>::from($r)
    };
    // convert range/index and step into Indexer
    (@convert $r:expr, $s:expr) => {
        <$crate::Indexer as ::std::convert::From<_>>::from($r).step_by($s as isize)
    };
    ($($t:tt)*) => {
        $crate::s![@parse [] $($t)*]
    };
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_from_ranges() {
        assert_eq!(Slice::from(2..5), Slice::new(2, Some(5), 1));
        assert_eq!(Slice::from(-3..), Slice::new(-3, None, 1));
        assert_eq!(Slice::from(..4usize), Slice::new(0, Some(4), 1));
        assert_eq!(Slice::from(1..=3), Slice::new(1, Some(4), 1));
        assert_eq!(Slice::from(1..=-1), Slice::new(1, None, 1));
        assert_eq!(Slice::from(..), Slice::new(0, None, 1));
        assert_eq!(Slice::from(0..6).step_by(2).step_by(3), Slice::new(0, Some(6), 6));
    }

    #[test]
    fn indexer_conversions() {
        assert_eq!(Indexer::from(3), Indexer::Index(3));
        assert_eq!(Indexer::from(-1isize), Indexer::Index(-1));
        assert_eq!(Indexer::from(..), Indexer::Full);
        assert_eq!(Indexer::from(..).step_by(2), Indexer::Slice(Slice::new(0, None, 2)));
        assert_eq!(Indexer::Index(4).step_by(2), Indexer::Index(4));
        assert!(Indexer::Full.is_slice());
        assert!(Indexer::from(2usize).is_index());
    }

    #[test]
    fn macro_arguments() {
        assert_eq!(s![2], [Indexer::Index(2)]);
        assert_eq!(s![.., 1..3, -1,], [
            Indexer::Full,
            Indexer::Slice(Slice::new(1, Some(3), 1)),
            Indexer::Index(-1),
        ]);
        assert_eq!(s![..;3, Slice::new(1, None, 1);2], [
            Indexer::Slice(Slice::new(0, None, 3)),
            Indexer::Slice(Slice::new(1, None, 2)),
        ]);
    }

    #[test]
    fn display() {
        assert_eq!(Indexer::Index(-2).to_string(), "-2");
        assert_eq!(Indexer::Full.to_string(), "..");
        assert_eq!(Slice::new(1, Some(7), 2).to_string(), "1..7;2");
        assert_eq!(Slice::new(0, None, 1).to_string(), "..");
    }
}
