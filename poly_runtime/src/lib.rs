//! The poly runtime support crate.
//!
//! This crate provides manual type erasure with compile-time-checked dispatch:
//!
//! - [`type_erase`] stores one value of any type behind an opaque handle,
//!   keeping a destructor trampoline so dropping the handle destroys the value
//!   through its concrete type.
//! - [`type_system`] identifies rust types and poly traits with v5 UUIDs and
//!   stores dispatch tables in a registry keyed by (type, trait) pairs.
//! - [`poly`] declares poly traits with the [`poly_trait!`] macro: a trait is
//!   a closed set of named operations, each implementing type gets a dispatch
//!   table of erased function pointers, and a holder type routes calls through
//!   the table bound at construction. Unknown operations do not compile.
//! - [`closure`] erases callables behind a fixed signature.
//! - [`events`] declares closed event sets with the [`event_set!`] macro;
//!   unknown event names do not compile.

pub mod closure;
pub mod error;
pub mod events;
pub mod poly;
pub mod traits;
pub mod type_erase;
pub mod type_system;
pub mod uuid;

pub use closure::ErasedFn;
pub use error::{Error, Result};
pub use poly::Poly;
pub use type_system::Registry;
