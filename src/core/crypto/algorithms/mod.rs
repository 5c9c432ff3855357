/*!
Implementations of the built-in algorithm families.

Each family module exposes a `bundle()` with the capabilities it supports;
[`create_bundle`] maps a built-in kind to that bundle.
*/

pub mod codec;
pub mod group_keys;

// Integer-factoring family
pub mod rsa;

// Discrete-logarithm families
pub mod dh;
pub mod dsa;
pub mod elgamal;

use crate::core::crypto::registry::AlgorithmBundle;
use crate::core::crypto::types::algorithms::Kind;

pub use group_keys::{GroupKeyFactory, GroupKeyPairGenerator, GroupPrivateKey, GroupPublicKey};
pub use rsa::{RsaPrivateKey, RsaPublicKey};

/// Create the implementation bundle for a built-in kind
pub fn create_bundle(kind: Kind) -> Option<AlgorithmBundle> {
    match kind {
        Kind::Rsa => Some(rsa::bundle()),
        Kind::Dsa => Some(dsa::bundle()),
        Kind::Elgamal => Some(elgamal::bundle()),
        Kind::DiffieHellman => Some(dh::bundle()),
        Kind::Custom(_) => None,
    }
}
