//! Storage for trait implementations.

use super::{ImplRef, PolyTrait, PolyType, Trait, Type};
use crate::error::{Error, Result};
use crate::type_erase::{Erased, Ref};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Key to store a (type, trait) tuple.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct TraitKey(Type, Trait);

/// Raw storage for trait implementations.
///
/// Implementations are stored as reference-counted dispatch tables, so the
/// table built for a (type, trait) pair is shared by every holder of that
/// pair.
#[derive(Debug, Default)]
struct TraitRegistry {
    impls: HashMap<TraitKey, Arc<Erased>>,
}

impl TraitRegistry {
    /// Insert a new implementation.
    ///
    /// Unsafe because the implementation must correspond to the trait
    /// correctly on retrieval.
    unsafe fn insert_unchecked(
        &mut self,
        tp: Type,
        trt: Trait,
        implementation: Erased,
    ) -> Result<()> {
        use std::collections::hash_map::Entry;
        match self.impls.entry(TraitKey(tp, trt)) {
            Entry::Occupied(entry) => {
                let TraitKey(tp, trt) = entry.key().clone();
                Err(Error::DuplicateImpl { tp, trt })
            }
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(implementation));
                Ok(())
            }
        }
    }

    /// Get the raw implementation for a (type, trait) pair.
    fn get_impl(&self, tp: &Type, trt: &Trait) -> Option<Arc<Erased>> {
        self.impls.get(&TraitKey(tp.clone(), trt.clone())).cloned()
    }
}

/// Shared registry of trait implementations.
///
/// A registry is populated before holders are constructed from it; each
/// (type, trait) pair may be registered exactly once. Tables are immutable
/// once stored and may be read concurrently.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    inner: Arc<RwLock<TraitRegistry>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Default::default()
    }

    /// Register the dispatch table of a trait for the given type.
    ///
    /// Fails with [`Error::DuplicateImpl`] if the pair was already
    /// registered.
    pub fn add_impl<Trt: PolyTrait>(&self, tp: Type, implementation: Trt::Impl) -> Result<()> {
        let trt = Trt::poly_trait();
        log::debug!("registering impl of trait {} for type {}", trt.id, tp.id);
        unsafe {
            self.inner
                .write()
                .insert_unchecked(tp, trt, Erased::new(implementation))
        }
    }

    /// Register the dispatch table of a trait for the given rust type.
    pub fn add_impl_for_type<T, Trt>(&self, implementation: Trt::Impl) -> Result<()>
    where
        T: PolyType,
        Trt: PolyTrait,
    {
        self.add_impl::<Trt>(T::poly_type(), implementation)
    }

    /// Get the dispatch table registered for the given type, if any.
    pub fn get<Trt: PolyTrait>(&self, tp: &Type) -> Option<ImplRef<Trt::Impl>> {
        self.inner
            .read()
            .get_impl(tp, &Trt::poly_trait())
            .map(|erased| unsafe { Ref::new(erased) })
    }
}
