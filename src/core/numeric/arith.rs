/*!
Big-integer helpers used by the algorithm implementations.

Random sampling, probable-prime testing and prime generation. Nothing here
is constant time.
*/

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;

use crate::core::constants::{MAX_GENERATION_ATTEMPTS, MILLER_RABIN_ROUNDS};
use crate::core::error::{Error, Result};
use crate::core::numeric::transcoding::{bit_length, byte_length};

const SMALL_PRIMES: [u32; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181,
    191, 193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Uniform integer in `[0, 2^bits)`
pub fn random_bits(bits: usize, rng: &mut dyn RngCore) -> BigUint {
    let mut octets = vec![0u8; byte_length(bits)];
    rng.fill_bytes(&mut octets);

    let excess = octets.len() * 8 - bits;
    if let Some(first) = octets.first_mut() {
        *first &= 0xFFu8 >> excess;
    }
    BigUint::from_bytes_be(&octets)
}

/// Uniform integer in `[0, bound)`; `bound` must be non-zero.
pub fn random_below(bound: &BigUint, rng: &mut dyn RngCore) -> BigUint {
    debug_assert!(!bound.is_zero());
    let bits = bit_length(bound);
    loop {
        let candidate = random_bits(bits, rng);
        if &candidate < bound {
            return candidate;
        }
    }
}

/// Uniform integer in `[low, high)`; requires `low < high`.
pub fn random_in_range(low: &BigUint, high: &BigUint, rng: &mut dyn RngCore) -> BigUint {
    low + random_below(&(high - low), rng)
}

/// Miller-Rabin probable-prime test preceded by trial division.
pub fn is_probable_prime(n: &BigUint, rounds: usize, rng: &mut dyn RngCore) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }

    for &small in SMALL_PRIMES.iter() {
        let small = BigUint::from(small);
        if n == &small {
            return true;
        }
        if (n % &small).is_zero() {
            return false;
        }
    }

    let n_minus_one = n - &one;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for _ in 0..rounds {
        let a = random_in_range(&two, &n_minus_one, rng);
        let mut x = a.modpow(&d, n);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Random prime of exactly `bits` bits with the two top bits set.
///
/// Setting both top bits guarantees that the product of two such primes has
/// exactly `2 * bits` bits.
pub fn generate_prime(bits: usize, rng: &mut dyn RngCore) -> Result<BigUint> {
    if bits < 2 {
        return Err(Error::InvalidParameters(format!(
            "cannot generate a {}-bit prime",
            bits
        )));
    }

    let top = (BigUint::one() << (bits - 1)) | (BigUint::one() << (bits - 2));
    for attempt in 0..MAX_GENERATION_ATTEMPTS {
        let candidate = random_bits(bits, rng) | &top | BigUint::one();
        if is_probable_prime(&candidate, MILLER_RABIN_ROUNDS, rng) {
            log::trace!("found {}-bit prime after {} candidates", bits, attempt + 1);
            return Ok(candidate);
        }
    }

    Err(Error::InvalidParameters(format!(
        "no {}-bit prime found in {} attempts",
        bits, MAX_GENERATION_ATTEMPTS
    )))
}

/// Inverse of `a` modulo `m`, if it exists
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m.is_zero() {
        return None;
    }
    a.modinv(m)
}
