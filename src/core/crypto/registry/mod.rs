/*!
Registry for algorithm families.

This module provides the kind -> implementation bundle table used to
dispatch every protocol operation.
*/

pub mod bundle;
pub mod manager;

pub use bundle::AlgorithmBundle;

// Re-export registry manager functions
pub use manager::{
    KeyRegistry, get_bundle, get_registry, is_registered, list_kinds, register_kind,
    require_bundle,
};
