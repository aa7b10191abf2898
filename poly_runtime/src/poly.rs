//! Type-erased polymorphic holders.
//!
//! A [`Poly`] owns one backing value behind an opaque handle together with the
//! dispatch table of a poly trait. The [`poly_trait!`] macro declares the
//! trait, its dispatch table, and a named holder type whose methods route
//! through the table, so calling an operation the trait does not declare is a
//! compile error rather than a failed lookup.

use crate::error::{Error, Result};
use crate::type_erase::{Erased, Ref};
use crate::type_system::{ImplRef, PolyTrait, PolyType, Registry, Type};
use std::sync::Arc;

/// A type-erased value bound to the dispatch table of a poly trait.
///
/// The holder exclusively owns its backing value; dropping it destroys the
/// value through the destructor trampoline captured at construction.
pub struct Poly<Trt: PolyTrait> {
    data: Erased,
    tp: Type,
    table: ImplRef<Trt::Impl>,
}

impl<Trt: PolyTrait> Poly<Trt> {
    /// Create a holder with a freshly built dispatch table.
    pub fn with_table<T: PolyType>(v: T, table: Trt::Impl) -> Self {
        let tp = T::poly_type();
        log::trace!(
            "erasing value of type {} behind trait {}",
            tp.id,
            Trt::poly_trait().id
        );
        Poly {
            data: Erased::new(v),
            tp,
            table: unsafe { Ref::new(Arc::new(Erased::new(table))) },
        }
    }

    /// Create a holder using the dispatch table registered for T.
    ///
    /// The table is shared with every other holder constructed for the same
    /// (type, trait) pair. Fails with [`Error::MissingImpl`] if no table was
    /// registered.
    pub fn from_registry<T: PolyType>(registry: &Registry, v: T) -> Result<Self> {
        let tp = T::poly_type();
        let table = registry.get::<Trt>(&tp).ok_or_else(|| Error::MissingImpl {
            tp: tp.clone(),
            trt: Trt::poly_trait(),
        })?;
        Ok(Poly {
            data: Erased::new(v),
            tp,
            table,
        })
    }

    /// The dispatch table bound at construction.
    pub fn table(&self) -> &Trt::Impl {
        self.table.as_ref()
    }

    /// The erased backing value.
    pub fn data(&self) -> &Erased {
        &self.data
    }

    /// The type descriptor of the backing value.
    pub fn value_type(&self) -> &Type {
        &self.tp
    }

    /// Get a typed reference to the backing value, if it is a T.
    pub fn as_type<T: PolyType>(&self) -> Option<&T> {
        if self.tp == T::poly_type() {
            Some(unsafe { self.data.as_ref::<T>() })
        } else {
            None
        }
    }

    /// Take the backing value out, if it is a T.
    pub fn into_type<T: PolyType>(self) -> std::result::Result<T, Self> {
        if self.tp == T::poly_type() {
            Ok(unsafe { self.data.to_owned::<T>() })
        } else {
            Err(self)
        }
    }
}

/// Declare a poly trait.
///
/// The macro generates three items:
///
/// - the rust trait itself, which concrete types implement (this is the
///   implementation map; a missing operation is a missing method and does not
///   compile);
/// - a dispatch table struct holding one erased entry point per operation,
///   buildable for any implementing type with `for_type::<T>()`;
/// - a holder type wrapping [`Poly`] with one method per operation, plus
///   `new` (table built inline) and `from_registry` (shared table)
///   constructors.
///
/// Every operation must take `&self` as its first parameter; `&self` is the
/// position replaced by the opaque handle in the erased entry points.
///
/// ```
/// use poly_runtime::{impl_poly_type, poly_trait};
///
/// poly_trait! {
///     /// Things that have an area.
///     pub trait HasArea {
///         fn area(&self) -> f64;
///     }
///     table HasAreaTable;
///     poly AreaPoly;
/// }
///
/// struct Circle {
///     radius: f64,
/// }
///
/// impl_poly_type!(Circle);
///
/// impl HasArea for Circle {
///     fn area(&self) -> f64 {
///         3.1415 * self.radius * self.radius
///     }
/// }
///
/// let shape = AreaPoly::new(Circle { radius: 1.0 });
/// assert_eq!(shape.area(), 3.1415);
/// ```
#[macro_export]
macro_rules! poly_trait {
    (
        $(#[$attr:meta])*
        $vis:vis trait $name:ident {
            $(
                $(#[$fattr:meta])*
                fn $f:ident ( &self $(, $arg:ident : $argty:ty )* $(,)? ) $( -> $ret:ty )? ;
            )+
        }
        table $table:ident;
        poly $poly:ident;
    ) => {
        $(#[$attr])*
        $vis trait $name {
            $(
                $(#[$fattr])*
                fn $f(&self $(, $arg: $argty)*) $(-> $ret)?;
            )+
        }

        /// Dispatch table of erased entry points.
        $vis struct $table {
            $(
                pub $f: unsafe fn(&$crate::type_erase::Erased $(, $argty)*) $(-> $ret)?,
            )+
        }

        impl $table {
            /// Build the table for a concrete implementing type.
            pub fn for_type<T: $name + $crate::type_erase::Eraseable>() -> Self {
                $table {
                    $(
                        $f: {
                            unsafe fn shim<T: $name>(
                                this: &$crate::type_erase::Erased
                                $(, $arg: $argty)*
                            ) $(-> $ret)? {
                                this.as_ref::<T>().$f($($arg),*)
                            }
                            shim::<T>
                        },
                    )+
                }
            }
        }

        /// Type-erased holder dispatching through the trait's table.
        $vis struct $poly {
            inner: $crate::poly::Poly<$poly>,
        }

        impl $crate::type_system::PolyTrait for $poly {
            type Impl = $table;

            fn poly_trait() -> $crate::type_system::Trait {
                $crate::type_system::Trait::named(stringify!($name).as_bytes())
            }
        }

        impl $poly {
            /// Erase a value, building its dispatch table inline.
            pub fn new<T: $name + $crate::type_system::PolyType>(v: T) -> Self {
                $poly {
                    inner: $crate::poly::Poly::with_table(v, $table::for_type::<T>()),
                }
            }

            /// Erase a value using the table registered for its type.
            pub fn from_registry<T: $crate::type_system::PolyType>(
                registry: &$crate::type_system::Registry,
                v: T,
            ) -> $crate::error::Result<Self> {
                Ok($poly {
                    inner: $crate::poly::Poly::from_registry(registry, v)?,
                })
            }

            /// The type descriptor of the erased value.
            pub fn value_type(&self) -> &$crate::type_system::Type {
                self.inner.value_type()
            }

            /// Get a typed reference to the erased value, if it is a T.
            pub fn as_type<T: $crate::type_system::PolyType>(&self) -> Option<&T> {
                self.inner.as_type::<T>()
            }

            /// Take the erased value out, if it is a T.
            pub fn into_type<T: $crate::type_system::PolyType>(
                self,
            ) -> std::result::Result<T, Self> {
                self.inner.into_type::<T>().map_err(|inner| $poly { inner })
            }

            $(
                $(#[$fattr])*
                pub fn $f(&self $(, $arg: $argty)*) $(-> $ret)? {
                    unsafe { (self.inner.table().$f)(self.inner.data() $(, $arg)*) }
                }
            )+
        }
    };
}
