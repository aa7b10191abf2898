//! Runtime type descriptors.

use crate::uuid::{poly_uuid, Uuid};
use lazy_static::lazy_static;

lazy_static! {
    /// The type namespace UUID.
    pub static ref NAMESPACE_TYPE: Uuid = poly_uuid(b"type");
}

/// Create a new type Uuid with the given string digest.
pub fn type_uuid(name: &[u8]) -> Uuid {
    Uuid::new_v5(&*NAMESPACE_TYPE, name)
}

/// A runtime type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type {
    /// The identifier for the type.
    pub id: Uuid,
}

impl Type {
    /// Create a new Type.
    pub fn new(id: Uuid) -> Self {
        Type { id }
    }

    /// Create a new Type with the given name.
    ///
    /// Uses `type_uuid` to generate a type id from the given name.
    pub fn named(name: &[u8]) -> Self {
        Self::new(type_uuid(name))
    }
}

/// A trait for rust types that have associated poly `Type`s.
pub trait PolyType: crate::type_erase::Eraseable {
    /// Return the associated poly `Type`.
    fn poly_type() -> Type;
}

/// Implement [`PolyType`] for a rust type.
///
/// The type id is derived from the type's name, or from an explicit byte
/// string when the second form is used.
#[macro_export]
macro_rules! impl_poly_type {
    ( $t:ty ) => {
        $crate::impl_poly_type!($t, stringify!($t).as_bytes());
    };
    ( $t:ty, $name:expr ) => {
        impl $crate::type_system::PolyType for $t {
            fn poly_type() -> $crate::type_system::Type {
                $crate::type_system::Type::named($name)
            }
        }
    };
}

/// Match expression for Types.
///
/// Matching is based on types, not patterns, and each type must implement
/// PolyType. The else case is required.
#[macro_export]
macro_rules! match_type {
    ( $type:expr => { $( $t:ty => $e:expr $(,)? )+ => $else:expr } ) => {
        {
            let __poly_match_type_tp: $crate::type_system::Type = $type;
            $( if __poly_match_type_tp == <$t as $crate::type_system::PolyType>::poly_type() { $e } else )+ { $else }
        }
    };
}

impl_poly_type!((), b"std::unit");
impl_poly_type!(bool, b"std::bool");
impl_poly_type!(i64, b"std::i64");
impl_poly_type!(f64, b"std::f64");
impl_poly_type!(String, b"std::string::String");
