/*!
Core traits for cryptographic operations.

This module defines one interface per protocol capability. An algorithm
family implements whichever of them it supports and registers the set as an
[`AlgorithmBundle`](crate::core::crypto::registry::AlgorithmBundle).
*/

pub mod cipher;
pub mod factory;
pub mod kex;
pub mod keys;
pub mod signature;

// Re-export core traits for easier access
pub use cipher::{Decryptor, Encryptor, MessageCodec};
pub use factory::{KeyFactory, KeyPairGenerator};
pub use kex::KeyExchangeParticipant;
pub use keys::{KeyMaterial, PrivateKey, PublicKey};
pub use signature::{SignatureCodec, Signer, Verifier};
