/*!
Traits for key exchange operations.
*/

use crate::core::crypto::traits::keys::{PrivateKey, PublicKey};
use crate::core::error::Result;

/// Trait for Diffie-Hellman style key agreement
pub trait KeyExchangeParticipant: Send + Sync {
    /// Compute the shared secret between `private_key` and a peer's `public_key`.
    ///
    /// Must be symmetric: A's private with B's public yields the same secret
    /// as B's private with A's public.
    fn diffie_hellman(&self, private_key: &PrivateKey, public_key: &PublicKey) -> Result<Vec<u8>>;
}
