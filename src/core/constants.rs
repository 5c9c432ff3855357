/*!
Constants for the public-key protocol.

This module contains key-size limits, key-generation tuning values and the
fixed inputs used for key derivation.
*/

/// Public exponent used for RSA key generation unless overridden (F4)
pub const DEFAULT_RSA_PUBLIC_EXPONENT: u32 = 65537;

/// Smallest RSA modulus accepted by key generation
pub const MIN_RSA_MODULUS_BITS: usize = 128;

/// Smallest discrete-logarithm group modulus accepted by key generation
pub const MIN_GROUP_MODULUS_BITS: usize = 64;

/// Number of Miller-Rabin rounds applied to prime candidates
pub const MILLER_RABIN_ROUNDS: usize = 32;

/// Upper bound on candidate draws before a generation step gives up
pub const MAX_GENERATION_ATTEMPTS: usize = 100_000;

/// Salt for deriving symmetric keys from a Diffie-Hellman secret
pub const HKDF_SALT: &[u8] = b"pkc-protocol-v1";

/// Size of a derived symmetric key in bytes
pub const DERIVED_KEY_BYTES: usize = 32;

/// Subgroup order sizes for generated discrete-logarithm groups
pub mod subgroup {
    /// Subgroup bits for moduli of at least 3072 bits
    pub const BITS_3072: usize = 256;

    /// Subgroup bits for moduli of at least 2048 bits
    pub const BITS_2048: usize = 224;

    /// Subgroup bits for moduli of at least 1024 bits
    pub const BITS_1024: usize = 160;
}
