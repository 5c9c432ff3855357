/*!
Core types for the key protocol.

This module provides the kind tags, labeled components and per-kind
configuration structures used throughout the crypto subsystem.
*/

pub mod algorithms;
pub mod components;
pub mod config;

// Re-export core types for easier access
pub use algorithms::{Capability, Kind};
pub use components::Components;
pub use config::{
    GenerationOptions, GroupKeyConfig, KeyConfig, OperationOptions, RsaKeyConfig,
};
