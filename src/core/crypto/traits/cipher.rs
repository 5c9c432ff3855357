/*!
Traits for public-key encryption and decryption.

This module defines the interfaces for message encryption and the
ciphertext container layout of a kind.
*/

use rand::RngCore;

use crate::core::crypto::traits::keys::{PrivateKey, PublicKey};
use crate::core::crypto::types::components::Components;
use crate::core::crypto::types::config::OperationOptions;
use crate::core::error::Result;

/// Trait for encrypting to a public key
pub trait Encryptor: Send + Sync {
    /// Encrypt `message`, already narrowed to the requested range
    fn encrypt(
        &self,
        key: &PublicKey,
        message: &[u8],
        options: &OperationOptions,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<u8>>;
}

/// Trait for decrypting with a private key
pub trait Decryptor: Send + Sync {
    /// Decrypt `message`, already narrowed to the requested range
    fn decrypt(&self, key: &PrivateKey, message: &[u8], options: &OperationOptions) -> Result<Vec<u8>>;
}

/// Trait for converting between ciphertext bytes and components
pub trait MessageCodec: Send + Sync {
    fn make_message(&self, components: &Components) -> Result<Vec<u8>>;

    fn destructure_message(&self, message: &[u8]) -> Result<Components>;
}
