use std::fmt;
use std::marker::PhantomData;

use super::{Aliased, PointerTrait};
use crate::{Ix, Ixs};

/// An accessor of reduced rank, produced by [`Accessor::at`](crate::Accessor::at).
///
/// It borrows its strides from the accessor it was peeled from, so it can
/// not outlive it. Its rank is the length of the borrowed strides and is
/// only known at run time; a rank 0 reference addresses a single element.
pub struct AccessorReference<'s, T, P: PointerTrait = Aliased> {
    ptr: *mut T,
    strides: &'s [Ixs],
    marker: PhantomData<P>,
}

copy_and_clone!(['s, T, P: PointerTrait] AccessorReference<'s, T, P>);

impl<'s, T, P: PointerTrait> fmt::Debug for AccessorReference<'s, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorReference")
            .field("ptr", &self.ptr)
            .field("strides", &self.strides)
            .finish()
    }
}

impl<'s, T, P: PointerTrait> AccessorReference<'s, T, P> {
    #[inline(always)]
    pub(crate) fn new(ptr: *mut T, strides: &'s [Ixs]) -> Self {
        AccessorReference { ptr, strides, marker: PhantomData }
    }

    /// Return the number of axes.
    #[inline(always)]
    pub fn ndim(&self) -> usize {
        self.strides.len()
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *mut T {
        self.ptr
    }

    #[inline(always)]
    pub fn strides(&self) -> &'s [Ixs] {
        self.strides
    }

    /// Peel the next axis: return the reference of one rank less at index
    /// `i` of its outermost axis. The rank must be at least 1 (debug
    /// assertion).
    #[inline]
    pub fn at(&self, i: Ix) -> AccessorReference<'s, T, P> {
        debug_assert!(!self.strides.is_empty(), "AccessorReference::at on a rank 0 reference");
        let ptr = self.ptr.wrapping_offset(self.strides[0] * i as Ixs);
        AccessorReference::new(ptr, &self.strides[1..])
    }

    /// Return the element offset of `index`, one entry per axis (debug
    /// assertion).
    #[inline]
    pub fn offset_of(&self, index: &[Ixs]) -> Ixs {
        debug_assert_eq!(index.len(), self.strides.len(), "index {:?} has the wrong rank", index);
        index.iter().zip(self.strides).map(|(&i, &s)| i * s).sum()
    }

    /// Return a reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// As for [`Accessor::get`](crate::Accessor::get).
    #[inline]
    pub unsafe fn get<'a>(self, index: &[Ixs]) -> &'a T {
        &*self.ptr.offset(self.offset_of(index))
    }

    /// Return a mutable reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// As for [`Accessor::get_mut`](crate::Accessor::get_mut).
    #[inline]
    pub unsafe fn get_mut<'a>(self, index: &[Ixs]) -> &'a mut T {
        &mut *self.ptr.offset(self.offset_of(index))
    }

    /// Return a reference to the element a rank 0 reference addresses.
    ///
    /// # Safety
    ///
    /// As for [`Accessor::get`](crate::Accessor::get).
    #[inline]
    pub unsafe fn deref_elem<'a>(self) -> &'a T {
        debug_assert_eq!(self.ndim(), 0, "deref_elem on a reference of rank {}", self.ndim());
        &*self.ptr
    }

    /// Return a mutable reference to the element a rank 0 reference
    /// addresses.
    ///
    /// # Safety
    ///
    /// As for [`Accessor::get_mut`](crate::Accessor::get_mut).
    #[inline]
    pub unsafe fn deref_elem_mut<'a>(self) -> &'a mut T {
        debug_assert_eq!(self.ndim(), 0, "deref_elem_mut on a reference of rank {}", self.ndim());
        &mut *self.ptr
    }
}

#[cfg(test)]
mod tests {
    use crate::{Accessor, Shape};

    #[test]
    fn peel_down_to_elements() {
        let mut data: Vec<u32> = (0..24).collect();
        let shape = Shape::new([2, 3, 4]);
        let acc: Accessor<u32, 3> = Accessor::from_slice(&mut data, shape.strides());

        let plane = acc.at(1);
        assert_eq!(plane.ndim(), 2);
        assert_eq!(plane.strides(), &[4, 1]);
        let row = plane.at(2);
        assert_eq!(row.ndim(), 1);
        let elem = row.at(3);
        assert_eq!(elem.ndim(), 0);
        unsafe {
            assert_eq!(*elem.deref_elem(), 23);
            assert_eq!(*plane.get(&[1, 1]), 17);
            assert_eq!(*row.get(&[0]), 20);
        }
        assert_eq!(plane.offset_of(&[2, 3]), 11);
    }

    #[test]
    fn rank_one_gives_element_reference() {
        let mut data = [5i8, 6, 7];
        let acc: Accessor<i8, 1> = Accessor::from_slice(&mut data, Shape::new([3]).strides());
        let third = acc.at(2);
        unsafe {
            *third.deref_elem_mut() = -1;
            assert_eq!(acc.elem(2) as *const i8, third.deref_elem() as *const i8);
            assert_eq!(*acc.elem(1), 6);
        }
        assert_eq!(data, [5, 6, -1]);
    }
}
