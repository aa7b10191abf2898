//! Type-erased callables.
//!
//! An [`ErasedFn`] pairs an erased closure with an erased entry point, giving
//! a fixed-signature callable over any `Fn` implementor. This is the
//! bare-bones `std::function` analog: the implementation map for the single
//! `call` operation is provided blanket-wise for every callable.

use crate::type_erase::{Erased, Eraseable};

/// A type-erased callable with signature `Args -> Ret`.
///
/// Multi-argument callables take their arguments as a tuple.
pub struct ErasedFn<Args, Ret> {
    f: unsafe fn(&Erased, Args) -> Ret,
    data: Erased,
}

impl<Args, Ret> ErasedFn<Args, Ret> {
    /// Erase the given callable.
    pub fn new<F: Fn(Args) -> Ret + Eraseable>(f: F) -> Self {
        unsafe fn func<F: Fn(Args) -> Ret, Args, Ret>(data: &Erased, args: Args) -> Ret {
            (data.as_ref::<F>())(args)
        }

        ErasedFn {
            f: func::<F, Args, Ret>,
            data: Erased::new(f),
        }
    }

    /// Call the erased callable.
    pub fn call(&self, args: Args) -> Ret {
        unsafe { (self.f)(&self.data, args) }
    }
}

impl<F, Args, Ret> From<F> for ErasedFn<Args, Ret>
where
    F: Fn(Args) -> Ret + Eraseable,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl<Args, Ret> std::fmt::Debug for ErasedFn<Args, Ret> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("ErasedFn")
            .field("f", &(self.f as *const ()))
            .field("data", &self.data)
            .finish()
    }
}
