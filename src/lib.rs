// Copyright 2014-2025 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndstride"]
#![doc(html_root_url = "https://docs.rs/ndstride/0.1/")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(
    clippy::many_single_char_names,
    clippy::deref_addrof,
    clippy::unreadable_literal,
    clippy::manual_map, // is not an error
    clippy::while_let_on_iterator, // is not an error
    clippy::from_iter_instead_of_collect, // using from_iter is good style
    clippy::incompatible_msrv, // false positive PointerExt::offset
)]
#![doc(test(attr(deny(warnings))))]
#![doc(test(attr(allow(unused_variables))))]
#![doc(test(attr(allow(deprecated))))]

//! The `ndstride` crate provides the addressing layer of strided
//! *n*-dimensional arrays: shapes, strides, views and element accessors over
//! memory that is owned somewhere else.
//!
//! - [`Shape`] and [`Strides`]: fixed rank (1 to 4) extents and signed
//!   per-axis element offsets.
//! - Ordering and contiguity analysis: [`order`], [`is_rightmost`],
//!   [`are_contiguous`], [`is_contiguous`] and [`squeeze`].
//! - [`broadcast`]: stride zeroing for axes of length one.
//! - [`reshape`]: reshape without copying, when the memory layout allows it.
//! - [`Subregion`] and the [`s!`] macro: integer indexing and slicing into a
//!   (shape, strides, offset) view, plus [`split`] for chunking an axis.
//! - [`Reinterpret`]: view the same bytes as a different element type.
//! - [`Accessor`], [`AccessorReference`] and [`AccessorValue`]: pointer plus
//!   strides addressing for kernels, with [`Operand`] to treat arrays and
//!   scalar constants uniformly.
//!
//! ## Rightmost order
//!
//! Every type in this crate follows the same convention: axis 0 is the
//! outermost axis and axis `N - 1` is the innermost, fastest varying one
//! (row major, or "C" order). Nothing in the types enforces this; it is the
//! reading all the algorithms use when they talk about "inner" and "outer".
//!
//! ```
//! use ndstride::{order, reshape, Shape, Strides};
//!
//! let shape = Shape::new([2, 3, 4]);
//! let strides = shape.strides();
//! assert_eq!(strides, Strides::new([12, 4, 1]));
//! assert_eq!(order(&strides, &shape), [0, 1, 2]);
//!
//! let merged = reshape(&shape, &strides, &Shape::new([6, 4])).unwrap();
//! assert_eq!(merged, Strides::new([4, 1]));
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `serde`: serialization of shapes, strides, slices and subregions.

#[cfg(feature = "serde")]
extern crate serde;

#[macro_use]
mod macro_utils;
#[macro_use]
mod private;

mod accessor;
mod dimension;
mod error;
mod order;
mod reinterpret;
mod slice;
mod split;
mod subregion;

#[cfg(feature = "serde")]
mod shape_serde;

pub use crate::accessor::{
    Accessor,
    AccessorReference,
    AccessorValue,
    Aliased,
    Contiguous,
    Operand,
    PointerTrait,
    Restrict,
    Strided,
    StridesTrait,
};
pub use crate::dimension::{
    are_contiguous,
    broadcast,
    broadcast_axis,
    co_broadcast,
    index_at_offset,
    is_contiguous,
    is_overlap,
    is_rightmost,
    offset_range,
    order,
    reshape,
    squeeze,
    Axis,
    NdIndex,
    Shape,
    Strides,
    MAX_RANK,
};
pub use crate::error::{ErrorKind, ShapeError};
pub use crate::order::Order;
pub use crate::reinterpret::Reinterpret;
pub use crate::slice::{Indexer, Slice};
pub use crate::split::{split, Split};
pub use crate::subregion::Subregion;

/// Array extent and index type
pub type Ix = usize;
/// Array stride and offset type
pub type Ixs = isize;
