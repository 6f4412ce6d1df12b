use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MsmError;

pub const DEFAULT_SCALAR_BITS: usize = 256;
pub const DEFAULT_WINDOW_BITS: usize = 8;
/// Widest window accepted; bucket tables grow as `2^window_bits`.
pub const MAX_WINDOW_BITS: usize = 16;

/// Window decomposition used by [`MultiScalarMultiplication`](crate::MultiScalarMultiplication).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MsmConfig {
    /// Width of every scalar, in bits.
    pub scalar_bits: usize,
    /// Width of one window, in bits.
    pub window_bits: usize,
}

impl Default for MsmConfig {
    fn default() -> Self {
        Self {
            scalar_bits: DEFAULT_SCALAR_BITS,
            window_bits: DEFAULT_WINDOW_BITS,
        }
    }
}

impl MsmConfig {
    pub fn new(scalar_bits: usize, window_bits: usize) -> Self {
        Self {
            scalar_bits,
            window_bits,
        }
    }

    pub fn validate(&self) -> Result<(), MsmError> {
        if self.window_bits == 0 || self.window_bits > MAX_WINDOW_BITS {
            return Err(MsmError::InvalidConfig(format!(
                "window_bits must be in 1..={MAX_WINDOW_BITS}, got {}",
                self.window_bits
            )));
        }
        if self.scalar_bits == 0 {
            return Err(MsmError::InvalidConfig("scalar_bits must be positive".to_string()));
        }
        Ok(())
    }

    pub fn num_windows(&self) -> usize {
        self.scalar_bits.div_ceil(self.window_bits)
    }

    /// Number of non-zero buckets per window.
    pub fn bucket_count(&self) -> usize {
        (1 << self.window_bits) - 1
    }
}

/// Parses a TOML table such as `window_bits = 4`; missing keys take their defaults.
impl FromStr for MsmConfig {
    type Err = MsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
