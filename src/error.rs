//! Defines the custom error type for the `confkit` crate.

use crate::encryption::EncryptionError;
use thiserror::Error;

/// The main error type for the `confkit` crate.
///
/// Variants map one-to-one onto the failure categories a caller can
/// meaningfully branch on: validation, filesystem, JSON encode/decode,
/// and cryptography. No failure is retried or swallowed internally.
#[derive(Debug, Error)]
pub enum Error {
    /// The deserialized value was rejected by the caller-supplied validator.
    #[error("Invalid config")]
    InvalidConfig,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    #[error("encryption or decryption failed: {0}")]
    Crypto(#[from] EncryptionError),
}
