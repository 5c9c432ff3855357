/*!
Key protocol for the public-key library.

This module provides the capability traits, the kind-tag registry, the
reference algorithm families and the free-function API that dispatches
between them.
*/

// Built-in algorithm families
pub mod algorithms;

// Dispatching operations
pub mod api;

// Registry for algorithm management
pub mod registry;

// Capability interfaces
pub mod traits;

// Kind tags, components and configuration
pub mod types;

// Re-export frequently used types
pub use api::*;
pub use registry::{
    AlgorithmBundle, get_bundle, is_registered, list_kinds, register_kind,
};
pub use traits::{KeyMaterial, PrivateKey, PublicKey};
pub use types::{
    Capability, Components, GenerationOptions, GroupKeyConfig, Kind, KeyConfig,
    OperationOptions, RsaKeyConfig,
};
