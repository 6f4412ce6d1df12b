use num_bigint::{BigUint, RandBigInt};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Deterministic seeded RNG, for testing use
pub fn create_seeded_rng() -> StdRng {
    let seed = [42; 32];
    StdRng::from_seed(seed)
}

pub fn create_seeded_rng_with_seed(seed: u64) -> StdRng {
    let seed_be = seed.to_be_bytes();
    let mut seed = [0u8; 32];
    seed[24..32].copy_from_slice(&seed_be);
    StdRng::from_seed(seed)
}

/// Uniform value in `[0, modulus)`.
pub fn generate_random_biguint(rng: &mut impl Rng, modulus: &BigUint) -> BigUint {
    rng.gen_biguint_below(modulus)
}

/// `len` uniform values in `[0, modulus)`.
pub fn generate_random_biguints(rng: &mut impl Rng, modulus: &BigUint, len: usize) -> Vec<BigUint> {
    (0..len)
        .map(|_| generate_random_biguint(rng, modulus))
        .collect()
}
