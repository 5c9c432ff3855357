/*!
ElGamal signatures and encryption over a Schnorr group.

Both the signature `r || s` and the ciphertext container `c1 || c2` are
encoded with each half at the bit length of the modulus `p`. ElGamal keys
also take part in Diffie-Hellman key exchange.
*/

use num_bigint::BigUint;
use num_traits::Zero;
use rand::RngCore;

use crate::core::constants::MAX_GENERATION_ATTEMPTS;
use crate::core::crypto::algorithms::codec::{decode_pair, encode_pair, encode_pair_at, leftmost_bits, split_pair};
use crate::core::crypto::algorithms::dh::GroupKeyExchange;
use crate::core::crypto::algorithms::group_keys::{
    GroupKeyFactory, GroupKeyPairGenerator, GroupPrivateKey, GroupPublicKey,
};
use crate::core::crypto::registry::AlgorithmBundle;
use crate::core::crypto::traits::{
    Decryptor, Encryptor, MessageCodec, PrivateKey, PublicKey, SignatureCodec, Signer, Verifier,
};
use crate::core::crypto::types::algorithms::Kind;
use crate::core::crypto::types::components::Components;
use crate::core::crypto::types::config::OperationOptions;
use crate::core::error::Result;
use crate::core::numeric::arith::mod_inverse;
use crate::core::numeric::{Endian, integer_to_octets};
use crate::{invalid_params, malformed_message, malformed_signature};

pub struct ElgamalSigner;

impl Signer for ElgamalSigner {
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
        let z = leftmost_bits(message, group.order_bits()) % q;

        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let k = group.random_exponent(rng);
            let Some(k_inv) = mod_inverse(&k, q) else {
                continue;
            };
            let r = group.exponentiate(&k);
            let xr = (key.secret_exponent() * &r) % q;
            let s = (k_inv * ((&z + q - xr) % q)) % q;
            if s.is_zero() {
                continue;
            }
            return Ok(encode_pair_at(&r, &s, group.modulus_bits()));
        }

        invalid_params!("no ElGamal signature found in {} attempts", MAX_GENERATION_ATTEMPTS)
    }
}

pub struct ElgamalVerifier;

impl Verifier for ElgamalVerifier {
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

        let Some((r, s)) = split_pair(signature) else {
            return malformed_signature!(
                "ElGamal signature must be a non-empty even number of bytes, got {}",
                signature.len()
            );
        };

        if r.is_zero() || &r >= p || s.is_zero() || &s >= q {
            return Ok(false);
        }

        let z = leftmost_bits(message, group.order_bits()) % q;
        let lhs = group.exponentiate(&z);
        let rhs = (key.public_value().modpow(&r, p) * r.modpow(&s, p)) % p;
        Ok(lhs == rhs)
    }
}

/// Encryption to `(c1, c2) = (g^k, m * y^k)`
pub struct ElgamalEncryptor;

impl Encryptor for ElgamalEncryptor {
    fn encrypt(
        &self,
        key: &PublicKey,
        message: &[u8],
        _options: &OperationOptions,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<u8>> {
        let key = key.material::<GroupPublicKey>()?;
        let group = key.group();
        let p = group.p();

        let m = BigUint::from_bytes_be(message);
        if &m >= p {
            return invalid_params!("message representative must be smaller than the group modulus");
        }

        let k = group.random_exponent(rng);
        let c1 = group.exponentiate(&k);
        let c2 = (m * key.public_value().modpow(&k, p)) % p;
        Ok(encode_pair_at(&c1, &c2, group.modulus_bits()))
    }
}

pub struct ElgamalDecryptor;

impl Decryptor for ElgamalDecryptor {
    fn decrypt(&self, key: &PrivateKey, message: &[u8], options: &OperationOptions) -> Result<Vec<u8>> {
        let key = key.material::<GroupPrivateKey>()?;
        let group = key.group();
        let (p, q) = (group.p(), group.q());

        let Some((c1, c2)) = split_pair(message) else {
            return malformed_message!(
                "ElGamal message must be a non-empty even number of bytes, got {}",
                message.len()
            );
        };
        if c1.is_zero() || &c1 >= p || &c2 >= p {
            return malformed_message!("ElGamal message components are outside the group");
        }

        // c1 has order q, so c1^(q - x) is the inverse of the shared mask
        let mask_inverse = c1.modpow(&(q - key.secret_exponent()), p);
        let m = (c2 * mask_inverse) % p;
        Ok(integer_to_octets(&m, options.n_bits, Endian::Big))
    }
}

/// Signature layout `r || s`
pub struct ElgamalSignatureCodec;

impl SignatureCodec for ElgamalSignatureCodec {
    fn make_signature(&self, components: &Components) -> Result<Vec<u8>> {
        encode_pair(components, "r", "s")
    }

    fn destructure_signature(&self, signature: &[u8]) -> Result<Components> {
        match decode_pair(signature, "r", "s") {
            Some(components) => Ok(components),
            None => malformed_signature!(
                "ElGamal signature must be a non-empty even number of bytes, got {}",
                signature.len()
            ),
        }
    }
}

/// Message layout `c1 || c2`
pub struct ElgamalMessageCodec;

impl MessageCodec for ElgamalMessageCodec {
    fn make_message(&self, components: &Components) -> Result<Vec<u8>> {
        encode_pair(components, "c1", "c2")
    }

    fn destructure_message(&self, message: &[u8]) -> Result<Components> {
        match decode_pair(message, "c1", "c2") {
            Some(components) => Ok(components),
            None => malformed_message!(
                "ElGamal message must be a non-empty even number of bytes, got {}",
                message.len()
            ),
        }
    }
}

/// All ElGamal capabilities
pub fn bundle() -> AlgorithmBundle {
    AlgorithmBundle::new()
        .with_key_factory(GroupKeyFactory::new(Kind::Elgamal))
        .with_key_pair_generator(GroupKeyPairGenerator::new(Kind::Elgamal, true))
        .with_signer(ElgamalSigner)
        .with_verifier(ElgamalVerifier)
        .with_encryptor(ElgamalEncryptor)
        .with_decryptor(ElgamalDecryptor)
        .with_key_exchange(GroupKeyExchange)
        .with_signature_codec(ElgamalSignatureCodec)
        .with_message_codec(ElgamalMessageCodec)
}
