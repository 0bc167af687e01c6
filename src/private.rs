//! Sealing for the accessor marker traits.
//!
//! `PointerTrait` and `StridesTrait` carry a method whose return type can
//! only be named from inside this crate, so the set of markers is closed and
//! new associated items can be added to the traits later.

/// Public but unreachable from outside the crate.
pub struct PrivateMarker;

macro_rules! private_decl {
    () => {
        /// Not implementable outside this crate.
        #[doc(hidden)]
        fn __private__(&self) -> crate::private::PrivateMarker;
    }
}

macro_rules! private_impl {
    () => {
        fn __private__(&self) -> crate::private::PrivateMarker {
            crate::private::PrivateMarker
        }
    };
}
