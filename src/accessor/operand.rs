use super::{Accessor, AccessorValue, Aliased, PointerTrait, Strided, StridesTrait};
use crate::dimension::NdIndex;

/// An operand of an elementwise kernel: an array, addressed through an
/// [`Accessor`], or a scalar that stands for every element.
///
/// ```
/// use ndstride::{Accessor, AccessorValue, Operand, Strides};
///
/// let mut data = [1.0, 2.0, 3.0];
/// let lhs = Operand::from(Accessor::<f64, 1>::from_slice(&mut data, Strides::new([1])));
/// let rhs = Operand::<f64, 1>::from(AccessorValue::new(10.0));
///
/// let sums: Vec<f64> = (0..3).map(|i| unsafe { lhs.get([i]) + rhs.get([i]) }).collect();
/// assert_eq!(sums, [11.0, 12.0, 13.0]);
/// ```
#[derive(Copy, Clone, Debug)]
pub enum Operand<T, const N: usize, P: PointerTrait = Aliased, S: StridesTrait = Strided> {
    Array(Accessor<T, N, P, S>),
    Scalar(AccessorValue<T>),
}

impl<T, const N: usize, P: PointerTrait, S: StridesTrait> Operand<T, N, P, S> {
    /// Return a reference to the element at `index`; a scalar operand
    /// returns its value.
    ///
    /// # Safety
    ///
    /// For array operands, as for [`Accessor::get`].
    #[inline(always)]
    pub unsafe fn get<I: NdIndex<N>>(&self, index: I) -> &T {
        match self {
            Operand::Array(a) => a.get(index),
            Operand::Scalar(v) => v.get(index),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Operand::Scalar(_))
    }
}

impl<T, const N: usize, P: PointerTrait, S: StridesTrait> From<Accessor<T, N, P, S>> for Operand<T, N, P, S> {
    fn from(a: Accessor<T, N, P, S>) -> Self {
        Operand::Array(a)
    }
}

impl<T, const N: usize, P: PointerTrait, S: StridesTrait> From<AccessorValue<T>> for Operand<T, N, P, S> {
    fn from(v: AccessorValue<T>) -> Self {
        Operand::Scalar(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Strides;

    #[test]
    fn broadcast_scalar_against_array() {
        let mut data = [1i64, 2, 3, 4];
        let arr: Operand<i64, 2> = Accessor::from_slice(&mut data, Strides::new([2, 1])).into();
        let three: Operand<i64, 2> = AccessorValue::new(3).into();
        assert!(!arr.is_scalar());
        assert!(three.is_scalar());
        let mut products = Vec::new();
        for i in 0..2 {
            for j in 0..2 {
                products.push(unsafe { arr.get([i, j]) * three.get([i, j]) });
            }
        }
        assert_eq!(products, [3, 6, 9, 12]);
    }
}
