use super::NdIndex;
use crate::Ixs;

/// Strides: the signed element offset between neighbours along each axis.
///
/// `Strides<N>` pairs with a [`Shape<N>`](crate::Shape) of the same rank. The
/// unit is elements, not bytes. A stride of zero on an axis marks it as
/// broadcast: every logical index along it addresses the same element.
///
/// ```
/// use ndstride::Strides;
///
/// let strides = Strides::new([12, 0, 1]);
/// assert_eq!(strides.offset([1, 5, 3]), 15);
/// assert!(strides.has_broadcast_axis());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Strides<const N: usize>(pub(crate) [Ixs; N]);

impl_axis_sequence!(Strides, Ixs);

impl<const N: usize> Strides<N> {
    /// Return the element offset of `index`: the sum of `index[i] * self[i]`.
    ///
    /// Offset arithmetic is not checked for overflow.
    #[inline]
    pub fn offset<I: NdIndex<N>>(&self, index: I) -> Ixs {
        let index = index.into_indices();
        let mut offset = 0;
        for (&i, &s) in index.iter().zip(&self.0) {
            offset += i * s;
        }
        offset
    }

    /// Return `true` if any axis has stride zero.
    pub fn has_broadcast_axis(&self) -> bool {
        self.0.iter().any(|&s| s == 0)
    }
}
