//! Curve25519 key pairs for box mode.
//!
//! A key pair is generated fresh from the OS CSPRNG, printed as uppercase
//! hex and never stored.
//!
//! # Example
//!
//! ```
//! use saltseal_crypto::keys::KeyPair;
//!
//! let keypair = KeyPair::generate().unwrap();
//! assert_eq!(keypair.private_key_hex().len(), 64);
//! assert_eq!(keypair.public_key_hex().len(), 64);
//! ```

use crate::KEY_SIZE;
use crypto_box::SecretKey;
use rand::rngs::OsRng;
use rand::RngCore;
use saltseal_common::helpers::encode_upper;
use saltseal_common::{Error, Result};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Curve25519 key pair.
///
/// The private half is zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    #[zeroize(skip)]
    public: [u8; KEY_SIZE],
    private: [u8; KEY_SIZE],
}

impl KeyPair {
    /// Generate a new random key pair using the OS CSPRNG.
    ///
    /// Fails with `RandomSourceFailure` if the entropy source is unavailable.
    pub fn generate() -> Result<Self> {
        let mut private = [0u8; KEY_SIZE];
        OsRng
            .try_fill_bytes(&mut private)
            .map_err(Error::random_source)?;

        let keypair = Self::from_private_bytes(&private);
        private.zeroize();
        Ok(keypair)
    }

    /// Rebuild a key pair from raw private key bytes.
    pub fn from_private_bytes(bytes: &[u8; KEY_SIZE]) -> Self {
        let public = *SecretKey::from(*bytes).public_key().as_bytes();
        Self {
            public,
            private: *bytes,
        }
    }

    /// Get the public key bytes.
    pub fn public_key_bytes(&self) -> [u8; KEY_SIZE] {
        self.public
    }

    /// Get the private key bytes.
    ///
    /// # Security
    /// Handle with care! These bytes can decrypt everything sent to this key.
    pub fn private_key_bytes(&self) -> [u8; KEY_SIZE] {
        self.private
    }

    /// Public key as 64 uppercase hex characters.
    pub fn public_key_hex(&self) -> String {
        encode_upper(&self.public)
    }

    /// Private key as 64 uppercase hex characters.
    pub fn private_key_hex(&self) -> String {
        encode_upper(&self.private)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public_key_hex())
            .finish_non_exhaustive()
    }
}
