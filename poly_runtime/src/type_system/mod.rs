//! The poly type system.
//!
//! Rust types and poly traits are identified by `Type` and `Trait`
//! descriptors, v5 UUIDs derived from their names. A trait implementation is a
//! dispatch table of erased function pointers; the registry stores one table
//! per (type, trait) pair and shares it across all holders of that pair.

mod registry;
#[path = "trait.rs"]
mod poly_trait;
#[path = "type.rs"]
mod poly_type;

pub use poly_trait::*;
pub use poly_type::*;
pub use registry::*;
