/*!
Labeled integer components.

Signatures, messages and keys are built from and destructured into an
ordered collection of named integers, e.g. `r` and `s` for a DSA signature.
*/

use num_bigint::BigUint;

use crate::core::error::{Error, Result};
use crate::core::numeric::{Numeric, bit_length, maybe_integerize};

/// Ordered, named integer components with an optional encoding width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Components {
    entries: Vec<(String, BigUint)>,
    width_bits: Option<usize>,
}

impl Components {
    /// Create an empty component set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a component, builder style
    pub fn with(mut self, name: &str, value: impl Into<Numeric>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a component
    pub fn insert(&mut self, name: &str, value: impl Into<Numeric>) {
        let value = maybe_integerize(value);
        match self.entries.iter_mut().find(|(existing, _)| existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Fix the bit width each component is encoded at
    pub fn with_width(mut self, width_bits: usize) -> Self {
        self.width_bits = Some(width_bits);
        self
    }

    pub fn width_bits(&self) -> Option<usize> {
        self.width_bits
    }

    pub fn get(&self, name: &str) -> Option<&BigUint> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Like [`Components::get`], failing with [`Error::MissingParameter`]
    pub fn require(&self, name: &str) -> Result<&BigUint> {
        self.get(name).ok_or_else(|| Error::missing(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BigUint)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Explicit width, or the bit length of the widest component.
    ///
    /// The implicit width is at least one octet, so all-zero components
    /// still encode to a non-empty layout.
    pub fn effective_width(&self) -> usize {
        self.width_bits.unwrap_or_else(|| {
            self.entries
                .iter()
                .map(|(_, value)| bit_length(value))
                .max()
                .unwrap_or(0)
                .max(8)
        })
    }
}
