/*!
# PKC Protocol

A uniform, algorithm-agnostic public-key protocol over arbitrary-precision
integers.

## Overview

This library provides:

- A single integer/octet wire contract with explicit bit width and
  endianness
- Discrete-logarithm groups `(p, q, g)` shared between keys
- Kind-tagged public and private keys with capability dispatch
- Reference RSA, DSA, ElGamal and Diffie-Hellman implementations
- HKDF-SHA256 key derivation from a Diffie-Hellman exchange
- A registry through which additional algorithm families plug in

## Example

```no_run
use pkc_protocol::{GenerationOptions, Kind, OperationOptions, generate_key_pair, sign_message, verify_signature};

let (private, public) = generate_key_pair(Kind::Dsa, Some(1024), &GenerationOptions::default())?;
let digest = [0x42u8; 20];
let options = OperationOptions::default();
let signature = sign_message(&private, &digest, 0, None, &options)?;
assert!(verify_signature(&public, &digest, &signature, 0, None, &options)?);
# Ok::<(), pkc_protocol::Error>(())
```
*/

// Core protocol components
pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::constants::{DEFAULT_RSA_PUBLIC_EXPONENT, HKDF_SALT};
pub use crate::core::error::{Error, Result};
pub use crate::core::group::{DiscreteLogarithmGroup, subgroup_bits};
pub use crate::core::numeric::{
    Endian, Numeric, bit_length, byte_length, integer_to_octets, maybe_integerize,
    octets_to_integer, select_range,
};

// Re-export the key protocol
pub use crate::core::crypto::api::{
    decrypt_message, derive_shared_key, destructure_message, destructure_private_key,
    destructure_public_key, destructure_signature, diffie_hellman, encrypt_message,
    generate_key_pair, generate_key_pair_with_rng, make_message, make_private_key,
    make_public_key, make_signature, sign_message, verify_signature,
};
pub use crate::core::crypto::traits::{
    Decryptor, Encryptor, KeyExchangeParticipant, KeyFactory, KeyMaterial, KeyPairGenerator,
    MessageCodec, PrivateKey, PublicKey, SignatureCodec, Signer, Verifier,
};
pub use crate::core::crypto::types::{
    Capability, Components, GenerationOptions, GroupKeyConfig, Kind, KeyConfig,
    OperationOptions, RsaKeyConfig,
};

// Re-export registry management
pub use crate::core::crypto::registry::{
    AlgorithmBundle, get_bundle, is_registered, list_kinds, register_kind,
};
