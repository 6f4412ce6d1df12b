//! The BN254 (alt_bn128) G1 curve `y^2 = x^3 + 3` over its 254-bit base field.

use std::sync::Arc;

use hex_literal::hex;
use num_bigint::BigUint;

use crate::{EccError, EllipticCurve, Point};

/// Base field modulus, big endian.
pub const BN254_MODULUS_BYTES: [u8; 32] =
    hex!("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47");

pub const BN254_A: u32 = 0;
pub const BN254_B: u32 = 3;

pub fn bn254_prime() -> BigUint {
    BigUint::from_bytes_be(&BN254_MODULUS_BYTES)
}

pub fn bn254_curve() -> Result<Arc<EllipticCurve>, EccError> {
    EllipticCurve::new(BN254_A, BN254_B, bn254_prime()).map(Arc::new)
}

/// The standard generator `(1, 2)`.
pub fn bn254_generator(curve: &Arc<EllipticCurve>) -> Result<Point, EccError> {
    curve.point(1u32, 2u32)
}
