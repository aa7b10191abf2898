//! Store arbitrary types, erasing their type.
//!
//! It is an unsafe operation to retrieve the typed value; you must ensure that
//! the type is correct by other means before retrieval.

use std::marker::PhantomData;

/// Types which can be erased.
pub trait Eraseable: Send + Sync + 'static {}

impl<T: Send + Sync + ?Sized + 'static> Eraseable for T {}

unsafe fn drop_boxed<T>(data: *mut ()) {
    drop(Box::from_raw(data as *mut T));
}

/// A type which stores a value with the type erased.
///
/// The stored value is exclusively owned. Dropping an `Erased` destroys the
/// value through a destructor trampoline captured at construction, so the
/// concrete type's cleanup runs even though the type is no longer known.
pub struct Erased {
    data: *mut (),
    drop: unsafe fn(*mut ()),
}

// The constructor only accepts Send + Sync values.
unsafe impl Send for Erased {}
unsafe impl Sync for Erased {}

impl Erased {
    /// Create a new Erased from the given value.
    pub fn new<T: Eraseable>(v: T) -> Self {
        Erased {
            data: Box::into_raw(Box::new(v)) as *mut (),
            drop: drop_boxed::<T>,
        }
    }

    /// Get a &T reference.
    ///
    /// Unsafe because callers must ensure the data is a T.
    pub unsafe fn as_ref<T>(&self) -> &T {
        &*(self.data as *const T)
    }

    /// Take the value out as a T.
    ///
    /// Unsafe because callers must ensure the data is a T.
    pub unsafe fn to_owned<T>(self) -> T {
        let v = *Box::from_raw(self.data as *mut T);
        std::mem::forget(self);
        v
    }
}

impl Drop for Erased {
    fn drop(&mut self) {
        unsafe { (self.drop)(self.data) }
    }
}

impl std::fmt::Debug for Erased {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Erased").field("data", &self.data).finish()
    }
}

/// A reference to an Erased that can be dereferenced to T.
pub struct Ref<T, Ptr>(Ptr, PhantomData<*const T>);

unsafe impl<T, Ptr: Send> Send for Ref<T, Ptr> {}
unsafe impl<T, Ptr: Sync> Sync for Ref<T, Ptr> {}

impl<T, Ptr: std::ops::Deref<Target = Erased>> Ref<T, Ptr> {
    /// Create a new ref from an erased value.
    ///
    /// Unsafe because callers must ensure that the Erased stores T.
    pub unsafe fn new(inner: Ptr) -> Self {
        Ref(inner, PhantomData)
    }
}

impl<T: Sync, Ptr: std::ops::Deref<Target = Erased>> std::ops::Deref for Ref<T, Ptr> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { (*self.0).as_ref() }
    }
}

impl<T: Sync, Ptr: std::ops::Deref<Target = Erased>> AsRef<T> for Ref<T, Ptr> {
    fn as_ref(&self) -> &T {
        &**self
    }
}
