use crate::{Ix, Ixs};

/// A rank 0 accessor that owns a single value and answers every index with
/// it.
///
/// Kernels written against accessors can take a scalar operand this way:
/// whatever index they ask for, they get the same value. See also
/// [`Operand`](crate::Operand).
///
/// ```
/// use ndstride::AccessorValue;
///
/// let two = AccessorValue::new(2.0);
/// assert_eq!(*two.get([3, 1, 4]), 2.0);
/// assert_eq!(*two.get(()), 2.0);
/// assert_eq!(*two.at(7).at(9).get_slice(&[1, 2]), 2.0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AccessorValue<T> {
    value: T,
}

impl<T> AccessorValue<T> {
    pub fn new(value: T) -> Self {
        AccessorValue { value }
    }

    /// Return the value for any index.
    #[inline(always)]
    pub fn get<I>(&self, _index: I) -> &T {
        &self.value
    }

    /// Return the value for any index.
    #[inline(always)]
    pub fn get_mut<I>(&mut self, _index: I) -> &mut T {
        &mut self.value
    }

    /// Peeling an axis gives the same accessor back.
    #[inline(always)]
    pub fn at(&self, _i: Ix) -> &Self {
        self
    }

    /// Return the value for any index.
    #[inline(always)]
    pub fn get_slice(&self, _index: &[Ixs]) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<T> for AccessorValue<T> {
    fn from(value: T) -> Self {
        AccessorValue::new(value)
    }
}
