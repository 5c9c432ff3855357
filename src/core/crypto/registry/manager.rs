/*!
Registry manager for algorithm families.

This module provides the process-wide registry mapping each kind tag to its
implementation bundle. Built-in families are registered on first use;
[`register_kind`] is the extension point for additional ones.
*/

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use once_cell::sync::Lazy;

use crate::core::crypto::algorithms::create_bundle;
use crate::core::crypto::registry::bundle::AlgorithmBundle;
use crate::core::crypto::types::algorithms::Kind;
use crate::core::error::{Error, Result};

/// Registry of algorithm implementations keyed by kind
pub struct KeyRegistry {
    bundles: HashMap<Kind, Arc<AlgorithmBundle>>,
}

impl KeyRegistry {
    /// Create a new registry with the built-in families
    fn new() -> Self {
        let mut registry = Self {
            bundles: HashMap::new(),
        };

        for kind in Kind::builtin() {
            if let Some(bundle) = create_bundle(kind) {
                registry.register(kind, bundle);
            }
        }

        registry
    }

    fn register(&mut self, kind: Kind, bundle: AlgorithmBundle) -> Option<Arc<AlgorithmBundle>> {
        self.bundles.insert(kind, Arc::new(bundle))
    }

    /// Look up the bundle for a kind
    pub fn get(&self, kind: Kind) -> Option<Arc<AlgorithmBundle>> {
        self.bundles.get(&kind).cloned()
    }

    /// List registered kinds
    pub fn kinds(&self) -> Vec<Kind> {
        let mut kinds: Vec<Kind> = self.bundles.keys().copied().collect();
        kinds.sort();
        kinds
    }
}

// Global registry instance
static REGISTRY: Lazy<RwLock<KeyRegistry>> = Lazy::new(|| RwLock::new(KeyRegistry::new()));

// Public API

/// Get a read-only reference to the global registry
pub fn get_registry() -> RwLockReadGuard<'static, KeyRegistry> {
    // Entries are replaced whole, so a poisoned lock still holds a consistent map
    REGISTRY.read().unwrap_or_else(PoisonError::into_inner)
}

/// Register (or replace) the implementation bundle for a kind.
///
/// Returns the bundle previously registered for `kind`, if any.
pub fn register_kind(kind: Kind, bundle: AlgorithmBundle) -> Option<Arc<AlgorithmBundle>> {
    let mut registry = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    let previous = registry.register(kind, bundle);
    if previous.is_some() {
        log::warn!("replaced registered implementation for {}", kind);
    } else {
        log::debug!("registered implementation for {}", kind);
    }
    previous
}

/// Get the bundle registered for a kind
pub fn get_bundle(kind: Kind) -> Option<Arc<AlgorithmBundle>> {
    get_registry().get(kind)
}

/// Get the bundle registered for a kind, or [`Error::UnsupportedKind`]
pub fn require_bundle(kind: Kind) -> Result<Arc<AlgorithmBundle>> {
    get_bundle(kind).ok_or(Error::UnsupportedKind(kind))
}

/// Whether an implementation is registered for `kind`
pub fn is_registered(kind: Kind) -> bool {
    get_registry().get(kind).is_some()
}

/// List all registered kinds
pub fn list_kinds() -> Vec<Kind> {
    get_registry().kinds()
}
