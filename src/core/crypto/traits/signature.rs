/*!
Traits for signature operations.

This module defines the interfaces for signing, verification and the
signature byte layout of a kind.
*/

use rand::RngCore;

use crate::core::crypto::traits::keys::{PrivateKey, PublicKey};
use crate::core::crypto::types::components::Components;
use crate::core::crypto::types::config::OperationOptions;
use crate::core::error::Result;

/// Trait for signing with a private key
pub trait Signer: Send + Sync {
    /// Sign `message`, already narrowed to the signed range
    fn sign(
        &self,
        key: &PrivateKey,
        message: &[u8],
        options: &OperationOptions,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<u8>>;
}

/// Trait for verifying signatures with a public key
pub trait Verifier: Send + Sync {
    /// `Ok(false)` for a well-formed signature that does not match;
    /// errors are reserved for signatures that cannot be parsed.
    fn verify(
        &self,
        key: &PublicKey,
        message: &[u8],
        signature: &[u8],
        options: &OperationOptions,
    ) -> Result<bool>;
}

/// Trait for converting between signature bytes and components
pub trait SignatureCodec: Send + Sync {
    /// Encode components into signature bytes
    fn make_signature(&self, components: &Components) -> Result<Vec<u8>>;

    /// Decode signature bytes into components
    fn destructure_signature(&self, signature: &[u8]) -> Result<Components>;
}
