//! Core components for the public-key protocol.
//!
//! This module contains the numeric wire contract, discrete-logarithm
//! groups, the key protocol and error handling.

// Key protocol and algorithm families
pub mod crypto;

// Integer/octet transcoding and arithmetic helpers
pub mod numeric;

// Discrete-logarithm domain parameters
pub mod group;

// Protocol constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::error::{Error, Result};
pub use self::group::DiscreteLogarithmGroup;
