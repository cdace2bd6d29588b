//! Error types for the address codec.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while encoding or decoding an address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A character outside the base58 alphabet, a malformed encoded length,
    /// or a decoded payload that does not fit the address layout.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// The trailing checksum bytes do not match the recomputed hash of the
    /// payload.
    #[error("address checksum does not match its payload")]
    ChecksumMismatch,

    /// The address prefix is not a parseable varint.
    #[error("address prefix is not a valid varint")]
    InvalidPrefix,

    /// A public key was not exactly 32 bytes.
    #[error("public key is {0} bytes, expected 32")]
    InvalidKeyLength(usize),
}
