/// Storage and access shared by the fixed rank per-axis sequences
/// `Shape<N>` (extents) and `Strides<N>` (element offsets).
///
/// $name: the tuple struct wrapping `[$elem; N]`
macro_rules! impl_axis_sequence {
    ($name:ident, $elem:ty) => {
        impl<const N: usize> $name<N> {
            /// Create from per-axis values, outermost axis first.
            ///
            /// The rank `N` must be between 1 and [`MAX_RANK`](crate::MAX_RANK);
            /// any other rank fails to compile.
            #[inline]
            pub const fn new(values: [$elem; N]) -> Self {
                #[allow(clippy::let_unit_value)]
                let () = $crate::dimension::Rank::<N>::CHECK;
                $name(values)
            }

            /// Create with `value` on every axis.
            #[inline]
            pub fn filled(value: $elem) -> Self {
                Self::new([value; N])
            }

            /// Create from the first `N` values of a contiguous block.
            ///
            /// The block should hold exactly `N` values (debug assertion);
            /// **panics** if it holds fewer.
            pub fn from_slice(values: &[$elem]) -> Self {
                debug_assert_eq!(values.len(), N,
                                 concat!(stringify!($name), "::from_slice: expected {} values, got {}"),
                                 N, values.len());
                let mut out = [0 as $elem; N];
                out.copy_from_slice(&values[..N]);
                Self::new(out)
            }

            /// Convert to rank `M`, keeping the innermost axes aligned.
            ///
            /// Going down in rank drops outer axes; going up inserts outer
            /// axes holding `fill`.
            pub fn resize<const M: usize>(&self, fill: $elem) -> $name<M> {
                let mut out = [fill; M];
                for (dst, &src) in out.iter_mut().rev().zip(self.0.iter().rev()) {
                    *dst = src;
                }
                $name::new(out)
            }

            /// Reorder the axes: axis `i` of the result is axis `axes[i]` of
            /// `self`. `axes` must be a permutation of `0..N` (debug assertion),
            /// as returned by [`order`](crate::order) and
            /// [`squeeze`](crate::squeeze).
            pub fn permute(&self, axes: [usize; N]) -> Self {
                debug_assert!($crate::dimension::is_permutation(&axes),
                              "permute: {:?} is not a permutation", axes);
                let mut out = self.0;
                for (dst, &axis) in out.iter_mut().zip(&axes) {
                    *dst = self.0[axis];
                }
                $name(out)
            }

            /// Return the number of axes.
            #[inline]
            pub const fn ndim(&self) -> usize {
                N
            }

            #[inline]
            pub fn as_array(&self) -> &[$elem; N] {
                &self.0
            }

            #[inline]
            pub fn into_array(self) -> [$elem; N] {
                self.0
            }

            #[inline]
            pub fn as_slice(&self) -> &[$elem] {
                &self.0
            }

            #[inline]
            pub fn as_mut_slice(&mut self) -> &mut [$elem] {
                &mut self.0
            }

            #[inline]
            pub fn iter(&self) -> std::slice::Iter<'_, $elem> {
                self.0.iter()
            }
        }

        impl<const N: usize> std::ops::Index<usize> for $name<N> {
            type Output = $elem;
            #[inline(always)]
            fn index(&self, index: usize) -> &$elem {
                debug_assert!(index < N, "axis {} out of bounds for rank {}", index, N);
                &self.0[index]
            }
        }

        impl<const N: usize> std::ops::IndexMut<usize> for $name<N> {
            #[inline(always)]
            fn index_mut(&mut self, index: usize) -> &mut $elem {
                debug_assert!(index < N, "axis {} out of bounds for rank {}", index, N);
                &mut self.0[index]
            }
        }

        impl<const N: usize> From<[$elem; N]> for $name<N> {
            #[inline]
            fn from(values: [$elem; N]) -> Self {
                $name::new(values)
            }
        }

        impl<const N: usize> From<$name<N>> for [$elem; N] {
            #[inline]
            fn from(values: $name<N>) -> Self {
                values.0
            }
        }

        impl<const N: usize> PartialEq<[$elem; N]> for $name<N> {
            fn eq(&self, rhs: &[$elem; N]) -> bool {
                self.0 == *rhs
            }
        }

        impl<'a, const N: usize> IntoIterator for &'a $name<N> {
            type Item = &'a $elem;
            type IntoIter = std::slice::Iter<'a, $elem>;
            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl<const N: usize> std::fmt::Debug for $name<N> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:?}", self.0)
            }
        }

        impl<const N: usize> std::fmt::Display for $name<N> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:?}", self.0)
            }
        }
    };
}
