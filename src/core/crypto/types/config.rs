/*!
Key and operation configuration.

Each algorithm family has an explicit configuration structure listing the
options it recognizes. Integer options accept either integers or big-endian
octets, see [`maybe_integerize`].
*/

use std::sync::Arc;

use num_bigint::BigUint;

use crate::core::crypto::types::algorithms::Kind;
use crate::core::crypto::types::components::Components;
use crate::core::error::{Error, Result};
use crate::core::group::DiscreteLogarithmGroup;
use crate::core::numeric::{Numeric, maybe_integerize};

/// Configuration for building an RSA key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RsaKeyConfig {
    /// Modulus `n`
    pub modulus: Option<BigUint>,
    /// Public exponent `e`
    pub public_exponent: Option<BigUint>,
    /// Private exponent `d`
    pub private_exponent: Option<BigUint>,
    /// Prime factors `(p, q)` of the modulus
    pub primes: Option<(BigUint, BigUint)>,
}

impl RsaKeyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modulus(mut self, n: impl Into<Numeric>) -> Self {
        self.modulus = Some(maybe_integerize(n));
        self
    }

    pub fn public_exponent(mut self, e: impl Into<Numeric>) -> Self {
        self.public_exponent = Some(maybe_integerize(e));
        self
    }

    pub fn private_exponent(mut self, d: impl Into<Numeric>) -> Self {
        self.private_exponent = Some(maybe_integerize(d));
        self
    }

    pub fn primes(mut self, p: impl Into<Numeric>, q: impl Into<Numeric>) -> Self {
        self.primes = Some((maybe_integerize(p), maybe_integerize(q)));
        self
    }
}

/// Configuration for building a DSA, ElGamal or Diffie-Hellman key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupKeyConfig {
    /// Shared domain parameters
    pub group: Option<Arc<DiscreteLogarithmGroup>>,
    /// Public value `y = g^x mod p`
    pub public_value: Option<BigUint>,
    /// Secret exponent `x`
    pub secret_exponent: Option<BigUint>,
}

impl GroupKeyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, group: Arc<DiscreteLogarithmGroup>) -> Self {
        self.group = Some(group);
        self
    }

    pub fn public_value(mut self, y: impl Into<Numeric>) -> Self {
        self.public_value = Some(maybe_integerize(y));
        self
    }

    pub fn secret_exponent(mut self, x: impl Into<Numeric>) -> Self {
        self.secret_exponent = Some(maybe_integerize(x));
        self
    }

    /// The group, or [`Error::MissingParameter`]
    pub fn require_group(&self) -> Result<&Arc<DiscreteLogarithmGroup>> {
        self.group.as_ref().ok_or_else(|| Error::missing("group"))
    }
}

/// Per-kind key construction options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyConfig {
    Rsa(RsaKeyConfig),
    Dsa(GroupKeyConfig),
    Elgamal(GroupKeyConfig),
    DiffieHellman(GroupKeyConfig),
    /// Options for a kind registered from outside this crate
    Custom(Components),
}

impl KeyConfig {
    /// The kind this configuration is written for, `None` for custom options
    pub fn kind(&self) -> Option<Kind> {
        match self {
            KeyConfig::Rsa(_) => Some(Kind::Rsa),
            KeyConfig::Dsa(_) => Some(Kind::Dsa),
            KeyConfig::Elgamal(_) => Some(Kind::Elgamal),
            KeyConfig::DiffieHellman(_) => Some(Kind::DiffieHellman),
            KeyConfig::Custom(_) => None,
        }
    }

    /// Group options, if this configuration is for a group-based kind
    pub fn as_group(&self) -> Option<&GroupKeyConfig> {
        match self {
            KeyConfig::Dsa(config) | KeyConfig::Elgamal(config) | KeyConfig::DiffieHellman(config) => {
                Some(config)
            }
            _ => None,
        }
    }
}

/// Options for key-pair generation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Existing group to generate the key pair in
    pub group: Option<Arc<DiscreteLogarithmGroup>>,
    /// RSA public exponent, defaults to 65537
    pub public_exponent: Option<BigUint>,
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate in the given group, e.g. to be compatible with a peer's key
    pub fn with_group(mut self, group: Arc<DiscreteLogarithmGroup>) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_public_exponent(mut self, e: impl Into<Numeric>) -> Self {
        self.public_exponent = Some(maybe_integerize(e));
        self
    }
}

/// Options for sign, verify, encrypt and decrypt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationOptions {
    /// Bit width of the produced octets; natural width when absent
    pub n_bits: Option<usize>,
}

impl OperationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_n_bits(mut self, n_bits: usize) -> Self {
        self.n_bits = Some(n_bits);
        self
    }
}
