/*!
Public API for the key protocol.

Every operation looks up the bundle registered for a kind and forwards to
the matching capability. Key operations dispatch on the kind the key
declares; constructors and codecs take the kind explicitly. The registry
lock is released before any arithmetic runs.
*/

use hkdf::Hkdf;
use rand::RngCore;
use sha2::Sha256;

use crate::core::constants::{DERIVED_KEY_BYTES, HKDF_SALT};
use crate::core::crypto::registry::require_bundle;
use crate::core::crypto::traits::{PrivateKey, PublicKey};
use crate::core::crypto::types::algorithms::Kind;
use crate::core::crypto::types::components::Components;
use crate::core::crypto::types::config::{GenerationOptions, KeyConfig, OperationOptions};
use crate::core::error::{Error, Result};
use crate::core::numeric::select_range;

/// Build a public key of `kind` from its configuration
pub fn make_public_key(kind: Kind, config: &KeyConfig) -> Result<PublicKey> {
    log::debug!("make_public_key: {}", kind);
    let bundle = require_bundle(kind)?;
    bundle.key_factory(kind)?.make_public_key(config)
}

/// Build a private key of `kind` from its configuration
pub fn make_private_key(kind: Kind, config: &KeyConfig) -> Result<PrivateKey> {
    log::debug!("make_private_key: {}", kind);
    let bundle = require_bundle(kind)?;
    bundle.key_factory(kind)?.make_private_key(config)
}

/// Generate a fresh key pair using the thread-local generator.
///
/// Returns `(private, public)`.
pub fn generate_key_pair(
    kind: Kind,
    num_bits: Option<usize>,
    options: &GenerationOptions,
) -> Result<(PrivateKey, PublicKey)> {
    generate_key_pair_with_rng(kind, num_bits, options, &mut rand::rng())
}

/// Generate a fresh key pair from an explicit randomness source
pub fn generate_key_pair_with_rng(
    kind: Kind,
    num_bits: Option<usize>,
    options: &GenerationOptions,
    rng: &mut dyn RngCore,
) -> Result<(PrivateKey, PublicKey)> {
    log::debug!("generate_key_pair: {} ({:?} bits)", kind, num_bits);
    let bundle = require_bundle(kind)?;
    bundle
        .key_pair_generator(kind)?
        .generate_key_pair(num_bits, options, rng)
}

/// Sign `message[start..end]` with a private key
pub fn sign_message(
    key: &PrivateKey,
    message: &[u8],
    start: usize,
    end: Option<usize>,
    options: &OperationOptions,
) -> Result<Vec<u8>> {
    let kind = key.kind();
    log::debug!("sign_message: {}", kind);
    let bundle = require_bundle(kind)?;
    let signer = bundle.signer(kind)?;
    let range = select_range(message, start, end)?;
    signer.sign(key, range, options, &mut rand::rng())
}

/// Verify a signature over `message[start..end]`.
///
/// A well-formed signature that does not match yields `Ok(false)`.
pub fn verify_signature(
    key: &PublicKey,
    message: &[u8],
    signature: &[u8],
    start: usize,
    end: Option<usize>,
    options: &OperationOptions,
) -> Result<bool> {
    let kind = key.kind();
    log::debug!("verify_signature: {}", kind);
    let bundle = require_bundle(kind)?;
    let verifier = bundle.verifier(kind)?;
    let range = select_range(message, start, end)?;
    verifier.verify(key, range, signature, options)
}

/// Encrypt `message[start..end]` to a public key
pub fn encrypt_message(
    key: &PublicKey,
    message: &[u8],
    start: usize,
    end: Option<usize>,
    options: &OperationOptions,
) -> Result<Vec<u8>> {
    let kind = key.kind();
    log::debug!("encrypt_message: {}", kind);
    let bundle = require_bundle(kind)?;
    let encryptor = bundle.encryptor(kind)?;
    let range = select_range(message, start, end)?;
    encryptor.encrypt(key, range, options, &mut rand::rng())
}

/// Decrypt `message[start..end]` with a private key
pub fn decrypt_message(
    key: &PrivateKey,
    message: &[u8],
    start: usize,
    end: Option<usize>,
    options: &OperationOptions,
) -> Result<Vec<u8>> {
    let kind = key.kind();
    log::debug!("decrypt_message: {}", kind);
    let bundle = require_bundle(kind)?;
    let decryptor = bundle.decryptor(kind)?;
    let range = select_range(message, start, end)?;
    decryptor.decrypt(key, range, options)
}

/// Encode signature components in the layout of `kind`
pub fn make_signature(kind: Kind, components: &Components) -> Result<Vec<u8>> {
    log::debug!("make_signature: {}", kind);
    let bundle = require_bundle(kind)?;
    bundle.signature_codec(kind)?.make_signature(components)
}

/// Split a signature of `kind` into its components
pub fn destructure_signature(kind: Kind, signature: &[u8]) -> Result<Components> {
    log::debug!("destructure_signature: {}", kind);
    let bundle = require_bundle(kind)?;
    bundle.signature_codec(kind)?.destructure_signature(signature)
}

/// Encode message components in the layout of `kind`
pub fn make_message(kind: Kind, components: &Components) -> Result<Vec<u8>> {
    log::debug!("make_message: {}", kind);
    let bundle = require_bundle(kind)?;
    bundle.message_codec(kind)?.make_message(components)
}

/// Split a message of `kind` into its components
pub fn destructure_message(kind: Kind, message: &[u8]) -> Result<Components> {
    log::debug!("destructure_message: {}", kind);
    let bundle = require_bundle(kind)?;
    bundle.message_codec(kind)?.destructure_message(message)
}

/// Compute the shared secret between a private key and a peer's public key
pub fn diffie_hellman(private_key: &PrivateKey, public_key: &PublicKey) -> Result<Vec<u8>> {
    let kind = private_key.kind();
    log::debug!("diffie_hellman: {} with {}", kind, public_key.kind());
    let bundle = require_bundle(kind)?;
    bundle.key_exchange(kind)?.diffie_hellman(private_key, public_key)
}

/// Derive a 32-byte symmetric key from a Diffie-Hellman exchange.
///
/// The shared secret is expanded with HKDF-SHA256 under [`HKDF_SALT`];
/// `info` binds the key to its context.
pub fn derive_shared_key(
    private_key: &PrivateKey,
    public_key: &PublicKey,
    info: &[u8],
) -> Result<[u8; DERIVED_KEY_BYTES]> {
    let secret = diffie_hellman(private_key, public_key)?;
    let hkdf = Hkdf::<Sha256>::new(Some(HKDF_SALT), &secret);

    let mut key = [0u8; DERIVED_KEY_BYTES];
    hkdf.expand(info, &mut key)
        .map_err(|_| Error::InvalidParameters("HKDF expansion failed".to_string()))?;
    Ok(key)
}

/// Named integer components of a public key
pub fn destructure_public_key(key: &PublicKey) -> Components {
    key.components()
}

/// Named integer components of a private key
pub fn destructure_private_key(key: &PrivateKey) -> Components {
    key.components()
}
