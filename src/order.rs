/// Memory order of a packed layout.
///
/// Order says which axis is fastest varying when a shape is laid out in a
/// contiguous block of memory without gaps.
///
/// - `RowMajor` means that the last axis is the fastest varying, so a packed
///   shape `[a, b, c]` has strides `[b * c, c, 1]`
/// - `ColumnMajor` means that the first axis is the fastest varying, so the
///   same shape has strides `[1, a, a * b]`
///
/// The rest of this crate defaults to row major ("rightmost") order; the
/// contiguity queries take an `Order` so column major layouts can be
/// recognized too. The orderings have common short names, also seen in other
/// environments, where row major is called "C" order (after the C programming
/// language) and column major is called "F" or "Fortran" order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Order {
    /// Row major or "C" order
    #[default]
    RowMajor,
    /// Column major or "F" order
    ColumnMajor,
}

impl Order {
    /// "C" is an alias for row major ordering
    pub const C: Order = Order::RowMajor;

    /// "F" (for Fortran) is an alias for column major ordering
    pub const F: Order = Order::ColumnMajor;

    /// Return true if input is Order::RowMajor, false otherwise
    #[inline]
    pub fn is_row_major(self) -> bool {
        match self {
            Order::RowMajor => true,
            Order::ColumnMajor => false,
        }
    }

    /// The axis that is fastest varying in this order, for `ndim` axes.
    #[inline]
    pub fn innermost_axis(self, ndim: usize) -> usize {
        debug_assert!(ndim > 0);
        match self {
            Order::RowMajor => ndim - 1,
            Order::ColumnMajor => 0,
        }
    }
}
