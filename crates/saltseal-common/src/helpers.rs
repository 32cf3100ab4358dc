//! Hex helpers for key material passed on the command line.

use crate::error::{Error, Result};
use zeroize::Zeroizing;

/// Decode a hex string (either case) into bytes.
///
/// An empty string decodes to an empty buffer, which callers treat as
/// "not supplied".
pub fn decode_hex(field: &'static str, value: &str) -> Result<Zeroizing<Vec<u8>>> {
    hex::decode(value)
        .map(Zeroizing::new)
        .map_err(|source| Error::InvalidHexEncoding { field, source })
}

/// Copy a decoded key into a fixed-size array, rejecting any other length.
pub fn to_key_array<const N: usize>(field: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| Error::InvalidKeyLength {
        field,
        expected: N,
        actual: bytes.len(),
    })
}

/// Render bytes as uppercase hex.
pub fn encode_upper(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}
