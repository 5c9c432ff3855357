/*!
DSA signatures.

The signed range is treated as a digest: its leftmost `bit_length(q)` bits
form the integer `z`. Signatures are `r || s`, each encoded at the bit
length of `q`.
*/

use num_bigint::BigUint;
use num_traits::Zero;
use rand::RngCore;

use crate::core::constants::MAX_GENERATION_ATTEMPTS;
use crate::core::crypto::algorithms::codec::{decode_pair, encode_pair, encode_pair_at, leftmost_bits, split_pair};
use crate::core::crypto::algorithms::group_keys::{
    GroupKeyFactory, GroupKeyPairGenerator, GroupPrivateKey, GroupPublicKey,
};
use crate::core::crypto::registry::AlgorithmBundle;
use crate::core::crypto::traits::{PrivateKey, PublicKey, SignatureCodec, Signer, Verifier};
use crate::core::crypto::types::algorithms::Kind;
use crate::core::crypto::types::components::Components;
use crate::core::crypto::types::config::OperationOptions;
use crate::core::error::Result;
use crate::core::numeric::arith::mod_inverse;
use crate::{invalid_params, malformed_signature};

pub struct DsaSigner;

impl Signer for DsaSigner {
    fn sign(
        &self,
        key: &PrivateKey,
        message: &[u8],
        _options: &OperationOptions,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<u8>> {
        let key = key.material::<GroupPrivateKey>()?;
        let group = key.group();
        let q = group.q();
        let n = group.order_bits();
        let z = leftmost_bits(message, n);

        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let k = group.random_exponent(rng);
            let r = group.exponentiate(&k) % q;
            if r.is_zero() {
                continue;
            }
            let Some(k_inv) = mod_inverse(&k, q) else {
                continue;
            };
            let s = (k_inv * (&z + key.secret_exponent() * &r)) % q;
            if s.is_zero() {
                continue;
            }
            return Ok(encode_pair_at(&r, &s, n));
        }

        invalid_params!("no DSA signature found in {} attempts", MAX_GENERATION_ATTEMPTS)
    }
}

pub struct DsaVerifier;

impl Verifier for DsaVerifier {
    fn verify(
        &self,
        key: &PublicKey,
        message: &[u8],
        signature: &[u8],
        _options: &OperationOptions,
    ) -> Result<bool> {
        let key = key.material::<GroupPublicKey>()?;
        let group = key.group();
        let (p, q) = (group.p(), group.q());
        let n = group.order_bits();

        let Some((r, s)) = split_pair(signature) else {
            return malformed_signature!(
                "DSA signature must be a non-empty even number of bytes, got {}",
                signature.len()
            );
        };

        if r.is_zero() || s.is_zero() || &r >= q || &s >= q {
            return Ok(false);
        }
        let Some(w) = mod_inverse(&s, q) else {
            return Ok(false);
        };

        let z = leftmost_bits(message, n);
        let u1 = (&z * &w) % q;
        let u2 = (&r * &w) % q;
        let v: BigUint = (group.exponentiate(&u1) * key.public_value().modpow(&u2, p)) % p % q;
        Ok(v == r)
    }
}

/// Signature layout `r || s`
pub struct DsaSignatureCodec;

impl SignatureCodec for DsaSignatureCodec {
    fn make_signature(&self, components: &Components) -> Result<Vec<u8>> {
        encode_pair(components, "r", "s")
    }

    fn destructure_signature(&self, signature: &[u8]) -> Result<Components> {
        match decode_pair(signature, "r", "s") {
            Some(components) => Ok(components),
            None => malformed_signature!(
                "DSA signature must be a non-empty even number of bytes, got {}",
                signature.len()
            ),
        }
    }
}

/// DSA key handling and signatures
pub fn bundle() -> AlgorithmBundle {
    AlgorithmBundle::new()
        .with_key_factory(GroupKeyFactory::new(Kind::Dsa))
        .with_key_pair_generator(GroupKeyPairGenerator::new(Kind::Dsa, true))
        .with_signer(DsaSigner)
        .with_verifier(DsaVerifier)
        .with_signature_codec(DsaSignatureCodec)
}
