/*!
Error handling for the public-key protocol.

Every protocol operation reports failures through a single [`Error`] enum.
Errors are never recovered internally; they propagate synchronously to the
caller. A signature that parses but does not match is *not* an error, see
[`crate::verify_signature`].
*/

use thiserror::Error;

use crate::core::crypto::types::algorithms::{Capability, Kind};

/// Result type for the public-key protocol
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the public-key protocol
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No implementation is registered for the requested kind
    #[error("Unsupported key kind: {0}")]
    UnsupportedKind(Kind),

    /// The kind is registered but lacks the requested capability
    #[error("{kind} does not support {capability}")]
    UnsupportedOperation {
        kind: Kind,
        capability: Capability,
    },

    /// Structurally inconsistent configuration or operands
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// A required option or component was not supplied
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// `start`/`end` do not describe a sub-range of the buffer
    #[error("Range {start}..{end} is out of bounds for a buffer of {len} bytes")]
    RangeError {
        start: usize,
        end: usize,
        len: usize,
    },

    /// Signature bytes do not match the layout expected for the kind
    #[error("Malformed signature: {0}")]
    MalformedSignature(String),

    /// Message bytes do not match the layout expected for the kind
    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    /// Keys do not share compatible parameters (kind or group)
    #[error("Incompatible parameters: {0}")]
    IncompatibleParameters(String),
}

impl Error {
    /// Shorthand for [`Error::UnsupportedOperation`]
    pub fn unsupported(kind: Kind, capability: Capability) -> Self {
        Error::UnsupportedOperation { kind, capability }
    }

    /// Shorthand for [`Error::MissingParameter`]
    pub fn missing(name: &str) -> Self {
        Error::MissingParameter(name.to_string())
    }
}

/// Create an invalid parameters error
#[macro_export]
macro_rules! invalid_params {
    ($msg:expr) => {
        Err($crate::core::error::Error::InvalidParameters($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        Err($crate::core::error::Error::InvalidParameters(format!($fmt, $($arg)*)))
    };
}

/// Create a malformed signature error
#[macro_export]
macro_rules! malformed_signature {
    ($msg:expr) => {
        Err($crate::core::error::Error::MalformedSignature($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        Err($crate::core::error::Error::MalformedSignature(format!($fmt, $($arg)*)))
    };
}

/// Create a malformed message error
#[macro_export]
macro_rules! malformed_message {
    ($msg:expr) => {
        Err($crate::core::error::Error::MalformedMessage($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        Err($crate::core::error::Error::MalformedMessage(format!($fmt, $($arg)*)))
    };
}
