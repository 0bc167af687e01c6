use std::fmt::Debug;

/// Aliasing trait of an accessor's pointer.
///
/// This trait is sealed; the implementors are [`Aliased`] and [`Restrict`].
pub trait PointerTrait: Copy + Debug + Default {
    /// `true` if the pointer is promised not to alias any other pointer the
    /// kernel writes through.
    const RESTRICT: bool;

    private_decl! {}
}

/// Stride storage trait of an accessor.
///
/// This trait is sealed; the implementors are [`Strided`] and [`Contiguous`].
pub trait StridesTrait: Copy + Debug + Default {
    /// `true` if the innermost stride is implicitly 1.
    const CONTIGUOUS: bool;

    private_decl! {}
}

/// The pointer may alias other pointers. This is the default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Aliased;

/// The pointer does not alias any other pointer used alongside it: the
/// memory it addresses is only reached through it for the accessor's
/// lifetime. Nothing checks this; kernels may rely on it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Restrict;

/// Every axis has a stored stride. This is the default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Strided;

/// The innermost axis has stride 1, which offset computations do not read.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Contiguous;

impl PointerTrait for Aliased {
    const RESTRICT: bool = false;
    private_impl! {}
}

impl PointerTrait for Restrict {
    const RESTRICT: bool = true;
    private_impl! {}
}

impl StridesTrait for Strided {
    const CONTIGUOUS: bool = false;
    private_impl! {}
}

impl StridesTrait for Contiguous {
    const CONTIGUOUS: bool = true;
    private_impl! {}
}
