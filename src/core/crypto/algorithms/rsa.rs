/*!
Textbook RSA.

Raw modular exponentiation over the modulus with no padding: callers apply
their own padding scheme or sign a digest. Signatures and ciphertexts are
encoded big-endian at the modulus width.
*/

use std::any::Any;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::RngCore;

use crate::core::constants::{DEFAULT_RSA_PUBLIC_EXPONENT, MAX_GENERATION_ATTEMPTS, MIN_RSA_MODULUS_BITS};
use crate::core::crypto::algorithms::codec::{decode_single, encode_single};
use crate::core::crypto::registry::AlgorithmBundle;
use crate::core::crypto::traits::{
    Decryptor, Encryptor, KeyFactory, KeyMaterial, KeyPairGenerator, MessageCodec, PrivateKey,
    PublicKey, SignatureCodec, Signer, Verifier,
};
use crate::core::crypto::types::algorithms::Kind;
use crate::core::crypto::types::components::Components;
use crate::core::crypto::types::config::{GenerationOptions, KeyConfig, OperationOptions, RsaKeyConfig};
use crate::core::error::{Error, Result};
use crate::core::numeric::arith::{generate_prime, mod_inverse};
use crate::core::numeric::{Endian, bit_length, integer_to_octets};
use crate::{invalid_params, malformed_message, malformed_signature};

/// RSA public key `(n, e)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    n: BigUint,
    e: BigUint,
}

impl RsaPublicKey {
    /// Create a public key, checking `n` is odd and `1 < e < n`
    pub fn new(n: BigUint, e: BigUint) -> Result<Self> {
        if n < BigUint::from(3u32) || n.is_even() {
            return invalid_params!("RSA modulus must be an odd integer greater than 2");
        }
        if e <= BigUint::one() || e >= n {
            return invalid_params!("RSA public exponent must satisfy 1 < e < n");
        }
        Ok(Self { n, e })
    }

    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    pub fn exponent(&self) -> &BigUint {
        &self.e
    }

    pub fn modulus_bits(&self) -> usize {
        bit_length(&self.n)
    }
}

impl KeyMaterial for RsaPublicKey {
    fn kind(&self) -> Kind {
        Kind::Rsa
    }

    fn components(&self) -> Components {
        Components::new().with("n", &self.n).with("e", &self.e)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// RSA private key `(n, d)`, optionally carrying `e` and the prime factors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    n: BigUint,
    d: BigUint,
    e: Option<BigUint>,
    primes: Option<(BigUint, BigUint)>,
}

impl RsaPrivateKey {
    /// Create a private key, checking `n` is odd and `0 < d < n`
    pub fn new(n: BigUint, d: BigUint) -> Result<Self> {
        if n < BigUint::from(3u32) || n.is_even() {
            return invalid_params!("RSA modulus must be an odd integer greater than 2");
        }
        if d.is_zero() || d >= n {
            return invalid_params!("RSA private exponent must satisfy 0 < d < n");
        }
        Ok(Self {
            n,
            d,
            e: None,
            primes: None,
        })
    }

    /// Attach the public exponent
    pub fn with_public_exponent(mut self, e: BigUint) -> Self {
        self.e = Some(e);
        self
    }

    /// Attach the prime factors; they must multiply to the modulus
    pub fn with_primes(mut self, p: BigUint, q: BigUint) -> Result<Self> {
        if &p * &q != self.n {
            return invalid_params!("RSA primes do not multiply to the modulus");
        }
        self.primes = Some((p, q));
        Ok(self)
    }

    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    pub fn private_exponent(&self) -> &BigUint {
        &self.d
    }

    pub fn public_exponent(&self) -> Option<&BigUint> {
        self.e.as_ref()
    }

    pub fn primes(&self) -> Option<(&BigUint, &BigUint)> {
        self.primes.as_ref().map(|(p, q)| (p, q))
    }

    pub fn modulus_bits(&self) -> usize {
        bit_length(&self.n)
    }
}

impl KeyMaterial for RsaPrivateKey {
    fn kind(&self) -> Kind {
        Kind::Rsa
    }

    fn components(&self) -> Components {
        let mut components = Components::new().with("n", &self.n).with("d", &self.d);
        if let Some(e) = &self.e {
            components.insert("e", e);
        }
        if let Some((p, q)) = &self.primes {
            components.insert("p", p);
            components.insert("q", q);
        }
        components
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn rsa_options(config: &KeyConfig) -> Result<&RsaKeyConfig> {
    match config {
        KeyConfig::Rsa(options) => Ok(options),
        _ => invalid_params!("RSA keys need RSA key options"),
    }
}

fn required<'a>(value: &'a Option<BigUint>, name: &str) -> Result<&'a BigUint> {
    value.as_ref().ok_or_else(|| Error::missing(name))
}

/// Builds RSA keys from [`RsaKeyConfig`]
pub struct RsaKeyFactory;

impl KeyFactory for RsaKeyFactory {
    fn make_public_key(&self, config: &KeyConfig) -> Result<PublicKey> {
        let options = rsa_options(config)?;
        let n = required(&options.modulus, "modulus")?;
        let e = required(&options.public_exponent, "public_exponent")?;
        Ok(PublicKey::new(RsaPublicKey::new(n.clone(), e.clone())?))
    }

    fn make_private_key(&self, config: &KeyConfig) -> Result<PrivateKey> {
        let options = rsa_options(config)?;
        let n = required(&options.modulus, "modulus")?;
        let d = required(&options.private_exponent, "private_exponent")?;

        let mut key = RsaPrivateKey::new(n.clone(), d.clone())?;
        if let Some(e) = &options.public_exponent {
            key = key.with_public_exponent(e.clone());
        }
        if let Some((p, q)) = &options.primes {
            key = key.with_primes(p.clone(), q.clone())?;
        }
        Ok(PrivateKey::new(key))
    }
}

/// Generates RSA key pairs with a modulus of exactly `num_bits` bits
pub struct RsaKeyPairGenerator;

impl KeyPairGenerator for RsaKeyPairGenerator {
    fn generate_key_pair(
        &self,
        num_bits: Option<usize>,
        options: &GenerationOptions,
        rng: &mut dyn RngCore,
    ) -> Result<(PrivateKey, PublicKey)> {
        let num_bits = num_bits.ok_or_else(|| Error::missing("num_bits"))?;
        if num_bits < MIN_RSA_MODULUS_BITS {
            return invalid_params!(
                "RSA modulus must have at least {} bits, got {}",
                MIN_RSA_MODULUS_BITS,
                num_bits
            );
        }

        let e = options
            .public_exponent
            .clone()
            .unwrap_or_else(|| BigUint::from(DEFAULT_RSA_PUBLIC_EXPONENT));
        if e < BigUint::from(3u32) || e.is_even() {
            return invalid_params!("RSA public exponent must be odd and at least 3");
        }

        let p_bits = num_bits.div_ceil(2);
        let q_bits = num_bits - p_bits;
        let one = BigUint::one();

        for attempt in 0..MAX_GENERATION_ATTEMPTS {
            let p = generate_prime(p_bits, rng)?;
            let q = generate_prime(q_bits, rng)?;
            if p == q {
                continue;
            }

            let p_minus_one = &p - &one;
            let q_minus_one = &q - &one;
            if !e.gcd(&p_minus_one).is_one() || !e.gcd(&q_minus_one).is_one() {
                continue;
            }

            let lambda = p_minus_one.lcm(&q_minus_one);
            let Some(d) = mod_inverse(&e, &lambda) else {
                continue;
            };
            let n = &p * &q;
            log::trace!("generated {}-bit RSA modulus after {} prime pairs", num_bits, attempt + 1);

            let public = RsaPublicKey::new(n.clone(), e.clone())?;
            let private = RsaPrivateKey::new(n, d)?
                .with_public_exponent(e)
                .with_primes(p, q)?;
            return Ok((PrivateKey::new(private), PublicKey::new(public)));
        }

        invalid_params!("no RSA key found in {} attempts", MAX_GENERATION_ATTEMPTS)
    }
}

fn message_representative(message: &[u8], n: &BigUint) -> Result<BigUint> {
    let m = BigUint::from_bytes_be(message);
    if &m >= n {
        return invalid_params!("message representative must be smaller than the RSA modulus");
    }
    Ok(m)
}

/// Raw RSA signatures, `s = m^d mod n`
pub struct RsaSigner;

impl Signer for RsaSigner {
    fn sign(
        &self,
        key: &PrivateKey,
        message: &[u8],
        _options: &OperationOptions,
        _rng: &mut dyn RngCore,
    ) -> Result<Vec<u8>> {
        let key = key.material::<RsaPrivateKey>()?;
        let m = message_representative(message, &key.n)?;
        let s = m.modpow(&key.d, &key.n);
        Ok(integer_to_octets(&s, Some(key.modulus_bits()), Endian::Big))
    }
}

pub struct RsaVerifier;

impl Verifier for RsaVerifier {
    fn verify(
        &self,
        key: &PublicKey,
        message: &[u8],
        signature: &[u8],
        _options: &OperationOptions,
    ) -> Result<bool> {
        let key = key.material::<RsaPublicKey>()?;
        if signature.is_empty() {
            return malformed_signature!("RSA signature is empty");
        }

        let s = BigUint::from_bytes_be(signature);
        if s >= key.n {
            return Ok(false);
        }
        let m = BigUint::from_bytes_be(message);
        Ok(s.modpow(&key.e, &key.n) == m)
    }
}

/// Raw RSA encryption, `c = m^e mod n`
pub struct RsaEncryptor;

impl Encryptor for RsaEncryptor {
    fn encrypt(
        &self,
        key: &PublicKey,
        message: &[u8],
        _options: &OperationOptions,
        _rng: &mut dyn RngCore,
    ) -> Result<Vec<u8>> {
        let key = key.material::<RsaPublicKey>()?;
        let m = message_representative(message, &key.n)?;
        let c = m.modpow(&key.e, &key.n);
        Ok(integer_to_octets(&c, Some(key.modulus_bits()), Endian::Big))
    }
}

pub struct RsaDecryptor;

impl Decryptor for RsaDecryptor {
    fn decrypt(&self, key: &PrivateKey, message: &[u8], options: &OperationOptions) -> Result<Vec<u8>> {
        let key = key.material::<RsaPrivateKey>()?;
        let c = BigUint::from_bytes_be(message);
        if c >= key.n {
            return malformed_message!("RSA ciphertext must be smaller than the modulus");
        }
        let m = c.modpow(&key.d, &key.n);
        Ok(integer_to_octets(&m, options.n_bits, Endian::Big))
    }
}

/// Signature layout: the single integer `s`
pub struct RsaSignatureCodec;

impl SignatureCodec for RsaSignatureCodec {
    fn make_signature(&self, components: &Components) -> Result<Vec<u8>> {
        encode_single(components, "s")
    }

    fn destructure_signature(&self, signature: &[u8]) -> Result<Components> {
        match decode_single(signature, "s") {
            Some(components) => Ok(components),
            None => malformed_signature!("RSA signature is empty"),
        }
    }
}

/// Message layout: the single integer `c`
pub struct RsaMessageCodec;

impl MessageCodec for RsaMessageCodec {
    fn make_message(&self, components: &Components) -> Result<Vec<u8>> {
        encode_single(components, "c")
    }

    fn destructure_message(&self, message: &[u8]) -> Result<Components> {
        match decode_single(message, "c") {
            Some(components) => Ok(components),
            None => malformed_message!("RSA message is empty"),
        }
    }
}

/// All RSA capabilities
pub fn bundle() -> AlgorithmBundle {
    AlgorithmBundle::new()
        .with_key_factory(RsaKeyFactory)
        .with_key_pair_generator(RsaKeyPairGenerator)
        .with_signer(RsaSigner)
        .with_verifier(RsaVerifier)
        .with_encryptor(RsaEncryptor)
        .with_decryptor(RsaDecryptor)
        .with_signature_codec(RsaSignatureCodec)
        .with_message_codec(RsaMessageCodec)
}
