use ecmsm_algebra::FieldError;
use num_bigint::BigUint;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EccError {
    #[error("curve parameters ({a}, {b}) are not in the field of order {modulus}")]
    ParameterNotInField {
        a: BigUint,
        b: BigUint,
        modulus: BigUint,
    },

    #[error("({x}, {y}) is not on the curve")]
    NotOnCurve { x: BigUint, y: BigUint },

    #[error("points belong to different curves")]
    CurveMismatch,

    #[error(transparent)]
    Field(#[from] FieldError),
}

#[derive(Error, Debug)]
pub enum MsmError {
    #[error("dimension mismatch (scalars: {scalars}, points: {points})")]
    DimensionMismatch { scalars: usize, points: usize },

    #[error("scalar {index} has {bits} bits, more than the configured {max_bits}")]
    ScalarTooWide {
        index: usize,
        bits: u64,
        max_bits: usize,
    },

    #[error("invalid msm config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse msm config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error(transparent)]
    Ecc(#[from] EccError),
}
