use std::fmt::Debug;

use num_traits::{AsPrimitive, ToPrimitive};

use crate::Ixs;

/// Tuples, fixed size arrays and (for rank 1) plain integers that can be
/// used as an `N`-dimensional index.
///
/// Any primitive integer works as a component; components are converted to
/// [`Ixs`](crate::Ixs) without a runtime check in release builds. Debug builds
/// assert that every component is representable.
///
/// ```
/// use ndstride::Strides;
///
/// let strides = Strides::new([4, 1]);
/// assert_eq!(strides.offset([1, 2]), 6);
/// assert_eq!(strides.offset((1u32, 2i64)), 6);
/// ```
pub trait NdIndex<const N: usize>: Debug {
    /// Return the index components, outermost axis first.
    fn into_indices(self) -> [Ixs; N];
}

#[inline(always)]
fn component<A>(i: A) -> Ixs
where
    A: AsPrimitive<Ixs> + ToPrimitive,
{
    debug_assert!(i.to_isize().is_some(), "index component is not representable as isize");
    i.as_()
}

impl<A, const N: usize> NdIndex<N> for [A; N]
where
    A: AsPrimitive<Ixs> + ToPrimitive + Debug,
{
    #[inline(always)]
    fn into_indices(self) -> [Ixs; N] {
        let mut out = [0; N];
        for (dst, src) in out.iter_mut().zip(self) {
            *dst = component(src);
        }
        out
    }
}

impl<A, const N: usize> NdIndex<N> for &[A; N]
where
    A: AsPrimitive<Ixs> + ToPrimitive + Debug,
{
    #[inline(always)]
    fn into_indices(self) -> [Ixs; N] {
        (*self).into_indices()
    }
}

macro_rules! ndindex_for_integer {
    ($($t:ty),*) => {
        $(
        impl NdIndex<1> for $t {
            #[inline(always)]
            fn into_indices(self) -> [Ixs; 1] {
                [component(self)]
            }
        }
        )*
    }
}

ndindex_for_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! ndindex_for_tuple {
    ($n:expr; $($param:ident $index:tt),*) => {
        impl<$($param),*> NdIndex<$n> for ($($param,)*)
        where
            $($param: AsPrimitive<Ixs> + ToPrimitive + Debug,)*
        {
            #[inline(always)]
            fn into_indices(self) -> [Ixs; $n] {
                [$(component(self.$index)),*]
            }
        }
    }
}

ndindex_for_tuple!(1; A 0);
ndindex_for_tuple!(2; A 0, B 1);
ndindex_for_tuple!(3; A 0, B 1, C 2);
ndindex_for_tuple!(4; A 0, B 1, C 2, D 3);

#[cfg(test)]
mod tests {
    use super::NdIndex;

    #[test]
    fn components_convert() {
        assert_eq!([1usize, 2, 3].into_indices(), [1, 2, 3]);
        assert_eq!((1u8, -2i32).into_indices(), [1, -2]);
        assert_eq!(7usize.into_indices(), [7]);
        assert_eq!((3i64,).into_indices(), [3]);
        assert_eq!((&[4i32, 5]).into_indices(), [4, 5]);
    }
}
