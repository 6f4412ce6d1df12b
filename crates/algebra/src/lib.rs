//! Arithmetic in prime fields `Z/pZ` backed by arbitrary-precision integers.
//!
//! Field descriptors are shared behind an [`Arc`](std::sync::Arc) and compared by value, so two
//! independently built [`PrimeField`]s with the same modulus are interchangeable.

mod error;
mod field;

pub use error::*;
pub use field::*;
