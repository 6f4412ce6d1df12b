//! Short Weierstrass curves `y^2 = x^3 + ax + b` over prime fields, their affine group law,
//! and multi-scalar multiplication by the bucket method.

mod config;
mod curve;
pub mod curves;
mod error;
pub mod msm;
mod point;

pub use config::*;
pub use curve::*;
pub use ecmsm_algebra as algebra;
pub use error::*;
pub use msm::MultiScalarMultiplication;
pub use point::*;

#[cfg(test)]
mod tests;
