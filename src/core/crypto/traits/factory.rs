/*!
Traits for key construction and key-pair generation.
*/

use rand::RngCore;

use crate::core::crypto::traits::keys::{PrivateKey, PublicKey};
use crate::core::crypto::types::config::{GenerationOptions, KeyConfig};
use crate::core::error::Result;

/// Builds keys purely from configuration
pub trait KeyFactory: Send + Sync {
    /// Build a public key
    fn make_public_key(&self, config: &KeyConfig) -> Result<PublicKey>;

    /// Build a private key
    fn make_private_key(&self, config: &KeyConfig) -> Result<PrivateKey>;
}

/// Generates fresh key pairs
pub trait KeyPairGenerator: Send + Sync {
    /// Generate a key pair, private key first
    fn generate_key_pair(
        &self,
        num_bits: Option<usize>,
        options: &GenerationOptions,
        rng: &mut dyn RngCore,
    ) -> Result<(PrivateKey, PublicKey)>;
}
