use num_bigint::BigUint;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{value} is not an element of the field of order {modulus}")]
    NotInField { value: BigUint, modulus: BigUint },

    #[error("zero has no multiplicative inverse modulo {modulus}")]
    InverseOfZero { modulus: BigUint },

    #[error("{value} is not invertible modulo {modulus} (gcd: {gcd})")]
    NotInvertible {
        value: BigUint,
        modulus: BigUint,
        gcd: BigUint,
    },

    #[error("operands belong to different fields (moduli: {lhs}, {rhs})")]
    FieldMismatch { lhs: BigUint, rhs: BigUint },
}
