/*!
Discrete-logarithm domain parameters.

A [`DiscreteLogarithmGroup`] is the `(p, q, g)` triple shared by DSA,
ElGamal and Diffie-Hellman keys. Groups are immutable once built and are
shared between keys through an `Arc`.
*/

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::RngCore;

use crate::core::constants::{MAX_GENERATION_ATTEMPTS, MILLER_RABIN_ROUNDS, MIN_GROUP_MODULUS_BITS, subgroup};
use crate::core::error::{Error, Result};
use crate::core::numeric::arith::{generate_prime, is_probable_prime, random_in_range};
use crate::core::numeric::{Numeric, bit_length, maybe_integerize};
use crate::invalid_params;

/// Cyclic subgroup of order `q` in the multiplicative group mod `p`, generated by `g`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscreteLogarithmGroup {
    p: BigUint,
    q: BigUint,
    g: BigUint,
}

impl DiscreteLogarithmGroup {
    /// Build a group from its parameters, given as integers or big-endian octets.
    ///
    /// Checks `1 < g < p`, `q | p - 1` and `g^q mod p == 1`. Primality of `p`
    /// and `q` is the caller's responsibility.
    pub fn new(p: impl Into<Numeric>, q: impl Into<Numeric>, g: impl Into<Numeric>) -> Result<Self> {
        let p = maybe_integerize(p);
        let q = maybe_integerize(q);
        let g = maybe_integerize(g);
        let one = BigUint::one();

        if p < BigUint::from(3u32) {
            return invalid_params!("group modulus must be at least 3");
        }
        if q < BigUint::from(2u32) {
            return invalid_params!("subgroup order must be at least 2");
        }
        if g <= one || g >= p {
            return invalid_params!("generator must satisfy 1 < g < p");
        }
        if !(&p - &one).is_multiple_of(&q) {
            return invalid_params!("subgroup order must divide p - 1");
        }
        if !g.modpow(&q, &p).is_one() {
            return invalid_params!("generator does not have order q");
        }

        Ok(Self { p, q, g })
    }

    /// Generate a fresh group with a `num_bits`-bit prime modulus.
    ///
    /// `q` is a prime of [`subgroup_bits`]`(num_bits)` bits and
    /// `p = k*q + 1` is prime with exactly `num_bits` bits.
    pub fn generate(num_bits: usize, rng: &mut dyn RngCore) -> Result<Self> {
        if num_bits < MIN_GROUP_MODULUS_BITS {
            return invalid_params!(
                "group modulus must have at least {} bits, got {}",
                MIN_GROUP_MODULUS_BITS,
                num_bits
            );
        }

        let q = generate_prime(subgroup_bits(num_bits), rng)?;
        let one = BigUint::one();

        // k ranges over the cofactors that keep p inside [2^(L-1), 2^L)
        let low = &one << (num_bits - 1);
        let high = &one << num_bits;
        let k_low = (&low - &one).div_ceil(&q);
        let k_high = (&high - BigUint::from(2u32)) / &q;

        for attempt in 0..MAX_GENERATION_ATTEMPTS {
            let mut k = random_in_range(&k_low, &(&k_high + &one), rng);
            if k.is_odd() {
                k += 1u32;
            }
            if k > k_high {
                continue;
            }

            let p = &k * &q + &one;
            if !is_probable_prime(&p, MILLER_RABIN_ROUNDS, rng) {
                continue;
            }
            log::trace!("found {}-bit group modulus after {} candidates", num_bits, attempt + 1);

            let two = BigUint::from(2u32);
            loop {
                let h = random_in_range(&two, &(&p - &one), rng);
                let g = h.modpow(&k, &p);
                if !g.is_one() {
                    return Ok(Self { p, q, g });
                }
            }
        }

        Err(Error::InvalidParameters(format!(
            "no {}-bit group modulus found in {} attempts",
            num_bits, MAX_GENERATION_ATTEMPTS
        )))
    }

    /// Prime modulus
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Prime order of the subgroup
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Generator of the subgroup
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    pub fn modulus_bits(&self) -> usize {
        bit_length(&self.p)
    }

    pub fn order_bits(&self) -> usize {
        bit_length(&self.q)
    }

    /// `g^exponent mod p`
    pub fn exponentiate(&self, exponent: &BigUint) -> BigUint {
        self.g.modpow(exponent, &self.p)
    }

    /// Whether `element` is a non-trivial member of the order-`q` subgroup.
    pub fn contains(&self, element: &BigUint) -> bool {
        element > &BigUint::one()
            && element < &self.p
            && element.modpow(&self.q, &self.p).is_one()
    }

    /// Whether `exponent` is a valid secret exponent, i.e. in `[1, q)`.
    pub fn is_valid_exponent(&self, exponent: &BigUint) -> bool {
        !exponent.is_zero() && exponent < &self.q
    }

    /// Uniform secret exponent in `[1, q)`
    pub fn random_exponent(&self, rng: &mut dyn RngCore) -> BigUint {
        random_in_range(&BigUint::one(), &self.q, rng)
    }
}

/// Bit length of the subgroup order used for a `num_bits`-bit modulus
pub fn subgroup_bits(num_bits: usize) -> usize {
    match num_bits {
        n if n >= 3072 => subgroup::BITS_3072,
        n if n >= 2048 => subgroup::BITS_2048,
        n if n >= 1024 => subgroup::BITS_1024,
        n => n / 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // p = 23, q = 11, g = 4 (4 has order 11 mod 23)
    fn tiny_group() -> DiscreteLogarithmGroup {
        DiscreteLogarithmGroup::new(23u32, 11u32, 4u32).unwrap()
    }

    #[test]
    fn test_valid_group() {
        let group = tiny_group();
        assert_eq!(group.p(), &BigUint::from(23u32));
        assert_eq!(group.exponentiate(&BigUint::from(11u32)), BigUint::one());
        assert!(group.contains(&BigUint::from(4u32)));
        // 5 generates the full group of order 22
        assert!(!group.contains(&BigUint::from(5u32)));
        assert!(!group.contains(&BigUint::one()));
    }

    #[test]
    fn test_octet_parameters() {
        let group = DiscreteLogarithmGroup::new([23u8], [11u8], [4u8]).unwrap();
        assert_eq!(group, tiny_group());
    }

    #[test]
    fn test_invalid_groups() {
        // generator out of range
        assert!(DiscreteLogarithmGroup::new(23u32, 11u32, 1u32).is_err());
        assert!(DiscreteLogarithmGroup::new(23u32, 11u32, 23u32).is_err());
        // q does not divide p - 1
        assert!(DiscreteLogarithmGroup::new(23u32, 7u32, 4u32).is_err());
        // 5 does not have order 11
        assert!(matches!(
            DiscreteLogarithmGroup::new(23u32, 11u32, 5u32),
            Err(Error::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_generate_group() {
        let mut rng = rand::rng();
        let group = DiscreteLogarithmGroup::generate(128, &mut rng).unwrap();
        assert_eq!(group.modulus_bits(), 128);
        assert_eq!(group.order_bits(), 64);
        assert!(DiscreteLogarithmGroup::new(group.p(), group.q(), group.g()).is_ok());

        let x = group.random_exponent(&mut rng);
        assert!(group.is_valid_exponent(&x));
        assert!(group.contains(&group.exponentiate(&x)));
    }

    #[test]
    fn test_generate_rejects_small_modulus() {
        let mut rng = rand::rng();
        assert!(DiscreteLogarithmGroup::generate(32, &mut rng).is_err());
    }

    #[test]
    fn test_subgroup_bits() {
        assert_eq!(subgroup_bits(512), 256);
        assert_eq!(subgroup_bits(1024), 160);
        assert_eq!(subgroup_bits(2048), 224);
        assert_eq!(subgroup_bits(4096), 256);
    }
}
