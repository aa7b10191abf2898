//! Runtime trait descriptors.

use crate::type_erase::{Erased, Eraseable, Ref};
use crate::uuid::{poly_uuid, Uuid};
use lazy_static::lazy_static;
use std::sync::Arc;

lazy_static! {
    /// The trait namespace UUID.
    pub static ref NAMESPACE_TRAIT: Uuid = poly_uuid(b"trait");
}

/// Create a new trait Uuid with the given string digest.
pub fn trait_uuid(name: &[u8]) -> Uuid {
    Uuid::new_v5(&*NAMESPACE_TRAIT, name)
}

/// A descriptor for poly traits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trait {
    /// The identifier for the trait.
    pub id: Uuid,
}

impl Trait {
    /// Create a new Trait.
    pub fn new(id: Uuid) -> Self {
        Trait { id }
    }

    /// Create a new Trait with the given name.
    ///
    /// Uses `trait_uuid` to generate an id from the given name.
    pub fn named(name: &[u8]) -> Self {
        Self::new(trait_uuid(name))
    }
}

/// A trait for rust types which represent poly traits.
///
/// Implemented by the holder types the [`poly_trait!`](crate::poly_trait)
/// macro generates.
pub trait PolyTrait {
    /// The dispatch table stored for each implementing type.
    type Impl: Eraseable;

    /// Get the trait descriptor.
    fn poly_trait() -> Trait;
}

/// A shared reference to a dispatch table.
pub type ImplRef<T> = Ref<T, Arc<Erased>>;
