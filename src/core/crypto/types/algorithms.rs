/*!
Algorithm type definitions.

This module defines the kind tags that select an algorithm family and the
capabilities a family may provide.
*/

use std::fmt;

/// Algorithm family identifier used for dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    /// RSA (textbook, no padding)
    Rsa,
    /// Digital Signature Algorithm
    Dsa,
    /// ElGamal signatures and encryption over a Schnorr group
    Elgamal,
    /// Finite-field Diffie-Hellman
    DiffieHellman,
    /// A family registered from outside this crate
    Custom(&'static str),
}

impl Kind {
    /// Get the name of the algorithm as a string
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Rsa => "RSA",
            Kind::Dsa => "DSA",
            Kind::Elgamal => "ElGamal",
            Kind::DiffieHellman => "Diffie-Hellman",
            Kind::Custom(name) => *name,
        }
    }

    /// The kinds registered by default
    pub fn builtin() -> [Kind; 4] {
        [Kind::Rsa, Kind::Dsa, Kind::Elgamal, Kind::DiffieHellman]
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One protocol operation a kind may or may not support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    KeyConstruction,
    KeyGeneration,
    Sign,
    Verify,
    Encrypt,
    Decrypt,
    KeyExchange,
    SignatureCodec,
    MessageCodec,
}

impl Capability {
    /// Human-readable name of the capability
    pub fn name(&self) -> &'static str {
        match self {
            Capability::KeyConstruction => "key construction",
            Capability::KeyGeneration => "key-pair generation",
            Capability::Sign => "signing",
            Capability::Verify => "verification",
            Capability::Encrypt => "encryption",
            Capability::Decrypt => "decryption",
            Capability::KeyExchange => "key exchange",
            Capability::SignatureCodec => "signature encoding",
            Capability::MessageCodec => "message encoding",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
