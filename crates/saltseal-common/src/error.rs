//! Common error types for saltseal.

use thiserror::Error;

/// Result type alias using saltseal's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for saltseal operations.
///
/// Every variant is terminal for the process; nothing in the tool retries.
#[derive(Debug, Error)]
pub enum Error {
    /// A `-k` or `-p` value was not valid hex.
    #[error("invalid hex encoding for {field}: {source}")]
    InvalidHexEncoding {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    /// A key decoded to the wrong number of bytes.
    #[error("{field} must be {expected} bytes long, got {actual}")]
    InvalidKeyLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Input too short to carry a nonce.
    #[error("malformed ciphertext: {len} bytes is shorter than the nonce")]
    MalformedCiphertext { len: usize },

    /// Authentication failed. Wrong key and tampered data are reported alike.
    #[error("decryption failed")]
    DecryptionFailed,

    /// The seal primitive refused the input.
    #[error("encryption failed")]
    EncryptionFailed,

    /// The OS entropy source could not be read.
    #[error("random source failure: {0}")]
    RandomSourceFailure(String),

    /// Reading the message from stdin failed.
    #[error("error reading message from stdin: {0}")]
    StdinReadFailure(#[source] std::io::Error),

    /// No mode, or an ambiguous mode, was selected.
    #[error("usage error: {0}")]
    UsageError(String),

    /// I/O error while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a random source error from any displayable type.
    pub fn random_source(msg: impl std::fmt::Display) -> Self {
        Self::RandomSourceFailure(msg.to_string())
    }

    /// Create a usage error from any displayable type.
    pub fn usage(msg: impl std::fmt::Display) -> Self {
        Self::UsageError(msg.to_string())
    }
}
