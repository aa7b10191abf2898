//! Poly traits provided for common rust types.

mod display;

pub use display::*;
