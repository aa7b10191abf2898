//! Runtime errors.
//!
//! Most misuse of the poly machinery is rejected by the compiler (unknown
//! operations, incomplete implementations, duplicate operation names). The
//! errors here are the remaining construction-time failures of the
//! implementation registry; none of them occur on a dispatch path.

use crate::type_system::{Trait, Type};

/// Poly result type, with a poly Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Poly error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No implementation of a trait is registered for a type.
    MissingImpl {
        /// The type descriptor.
        tp: Type,
        /// The trait descriptor.
        trt: Trait,
    },
    /// An implementation of a trait was registered twice for a type.
    DuplicateImpl {
        /// The type descriptor.
        tp: Type,
        /// The trait descriptor.
        trt: Trait,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingImpl { tp, trt } => write!(
                f,
                "no implementation of trait {} registered for type {}",
                trt.id, tp.id
            ),
            Error::DuplicateImpl { tp, trt } => write!(
                f,
                "implementation of trait {} registered twice for type {}",
                trt.id, tp.id
            ),
        }
    }
}

impl std::error::Error for Error {}
