//! Message framing for box and secret-box modes.
//!
//! Every ciphertext on the wire is laid out as:
//!
//! ```text
//! +-----------------+----------------------------------------+
//! | nonce (24 B)    | sealed payload (16 B tag + ciphertext)  |
//! +-----------------+----------------------------------------+
//! ```
//!
//! The sealed payload is exactly what NaCl `crypto_box` / `crypto_secretbox`
//! produce, so output interoperates with other NaCl tools.
//!
//! The mode is chosen by the peer key length: 32 bytes selects box mode
//! (Curve25519 + XSalsa20-Poly1305), an empty key selects secret-box mode
//! (XSalsa20-Poly1305 with the shared key), anything else is rejected.

use crate::{KEY_SIZE, NONCE_SIZE};
use crypto_box::{PublicKey, SalsaBox, SecretKey};
use crypto_secretbox::aead::generic_array::GenericArray;
use crypto_secretbox::aead::{Aead, KeyInit};
use crypto_secretbox::XSalsa20Poly1305;
use rand::rngs::OsRng;
use rand::RngCore;
use saltseal_common::helpers::to_key_array;
use saltseal_common::{Error, Result};
use tracing::debug;

/// Which construction a peer key selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Shared 32-byte key, XSalsa20-Poly1305.
    Symmetric,
    /// Curve25519 key agreement, then XSalsa20-Poly1305.
    Asymmetric([u8; KEY_SIZE]),
}

impl Mode {
    /// Select the mode from the peer public key bytes.
    pub fn from_peer_key(peer: &[u8]) -> Result<Self> {
        if peer.is_empty() {
            return Ok(Mode::Symmetric);
        }
        to_key_array("public key", peer).map(Mode::Asymmetric)
    }

    fn kind(&self) -> &'static str {
        match self {
            Mode::Symmetric => "secretbox",
            Mode::Asymmetric(_) => "box",
        }
    }
}

/// Encrypt `message` under `key`, optionally boxed to `peer`.
///
/// `key` is the shared secret (secret-box mode) or the sender's private key
/// (box mode, `peer` is the recipient's public key). Returns
/// `nonce || sealed` with a fresh random nonce.
pub fn encrypt(key: &[u8; KEY_SIZE], peer: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let mut nonce = [0u8; NONCE_SIZE];
    OsRng
        .try_fill_bytes(&mut nonce)
        .map_err(Error::random_source)?;

    seal_with_nonce(key, peer, &nonce, message)
}

/// Seal `message` under a caller-supplied nonce and frame it as
/// `nonce || sealed`.
///
/// The nonce must never be reused with the same key; [`encrypt`] is the
/// entry point for real traffic.
pub fn seal_with_nonce(
    key: &[u8; KEY_SIZE],
    peer: &[u8],
    nonce: &[u8; NONCE_SIZE],
    message: &[u8],
) -> Result<Vec<u8>> {
    let mode = Mode::from_peer_key(peer)?;
    debug!(mode = mode.kind(), len = message.len(), "sealing message");

    let sealed = match mode {
        Mode::Asymmetric(recipient) => {
            let salsa_box = SalsaBox::new(&PublicKey::from(recipient), &SecretKey::from(*key));
            salsa_box.encrypt(GenericArray::from_slice(nonce), message)
        }
        Mode::Symmetric => {
            let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(key));
            cipher.encrypt(GenericArray::from_slice(nonce), message)
        }
    }
    .map_err(|_| Error::EncryptionFailed)?;

    let mut out = Vec::with_capacity(NONCE_SIZE + sealed.len());
    out.extend_from_slice(nonce);
    out.extend_from_slice(&sealed);
    Ok(out)
}

/// Decrypt a `nonce || sealed` frame produced by [`encrypt`].
///
/// In box mode `peer` is the sender's public key and `key` the local private
/// key. Any authentication failure is reported as `DecryptionFailed`.
pub fn decrypt(key: &[u8; KEY_SIZE], peer: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let mode = Mode::from_peer_key(peer)?;

    if ciphertext.len() < NONCE_SIZE {
        return Err(Error::MalformedCiphertext {
            len: ciphertext.len(),
        });
    }
    let (nonce, sealed) = ciphertext.split_at(NONCE_SIZE);
    let nonce = GenericArray::from_slice(nonce);

    debug!(mode = mode.kind(), len = sealed.len(), "opening message");

    let opened = match mode {
        Mode::Asymmetric(sender) => {
            let salsa_box = SalsaBox::new(&PublicKey::from(sender), &SecretKey::from(*key));
            salsa_box.decrypt(nonce, sealed)
        }
        Mode::Symmetric => {
            let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(key));
            cipher.decrypt(nonce, sealed)
        }
    };
    opened.map_err(|_| Error::DecryptionFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeyPair, TAG_SIZE};

    #[test]
    fn test_mode_selection() {
        assert_eq!(Mode::from_peer_key(&[]).unwrap(), Mode::Symmetric);
        assert_eq!(
            Mode::from_peer_key(&[7u8; 32]).unwrap(),
            Mode::Asymmetric([7u8; 32])
        );
        assert!(matches!(
            Mode::from_peer_key(&[0u8; 10]),
            Err(Error::InvalidKeyLength { actual: 10, .. })
        ));
    }

    #[test]
    fn test_symmetric_roundtrip() {
        let key = [0x42u8; KEY_SIZE];
        let ciphertext = encrypt(&key, &[], b"attack at dawn").unwrap();
        let plaintext = decrypt(&key, &[], &ciphertext).unwrap();
        assert_eq!(plaintext, b"attack at dawn");
    }

    #[test]
    fn test_asymmetric_roundtrip() {
        let alice = KeyPair::generate().unwrap();
        let bob = KeyPair::generate().unwrap();

        let ciphertext = encrypt(
            &alice.private_key_bytes(),
            &bob.public_key_bytes(),
            b"hello bob",
        )
        .unwrap();
        let plaintext = decrypt(
            &bob.private_key_bytes(),
            &alice.public_key_bytes(),
            &ciphertext,
        )
        .unwrap();
        assert_eq!(plaintext, b"hello bob");
    }

    #[test]
    fn test_zero_key_hi_example() {
        let key = [0u8; KEY_SIZE];
        let first = encrypt(&key, &[], b"hi").unwrap();
        let second = encrypt(&key, &[], b"hi").unwrap();

        assert_eq!(first.len(), NONCE_SIZE + 2 + TAG_SIZE);
        assert_eq!(first.len(), 42);
        assert_ne!(&first[..NONCE_SIZE], &second[..NONCE_SIZE]);
        assert_eq!(decrypt(&key, &[], &first).unwrap(), b"hi");
    }

    #[test]
    fn test_empty_message() {
        let key = [9u8; KEY_SIZE];
        let ciphertext = encrypt(&key, &[], b"").unwrap();
        assert_eq!(ciphertext.len(), NONCE_SIZE + TAG_SIZE);
        assert!(decrypt(&key, &[], &ciphertext).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_peer_key_length() {
        let key = [1u8; KEY_SIZE];
        assert!(matches!(
            encrypt(&key, &[0u8; 10], b"msg"),
            Err(Error::InvalidKeyLength { .. })
        ));

        let ciphertext = encrypt(&key, &[], b"msg").unwrap();
        assert!(matches!(
            decrypt(&key, &[0u8; 10], &ciphertext),
            Err(Error::InvalidKeyLength { .. })
        ));
    }

    #[test]
    fn test_short_ciphertext() {
        let key = [1u8; KEY_SIZE];
        assert!(matches!(
            decrypt(&key, &[], &[0u8; 23]),
            Err(Error::MalformedCiphertext { len: 23 })
        ));
        assert!(matches!(
            decrypt(&key, &[], &[]),
            Err(Error::MalformedCiphertext { len: 0 })
        ));
    }

    #[test]
    fn test_nonce_only_fails_authentication() {
        let key = [1u8; KEY_SIZE];
        assert!(matches!(
            decrypt(&key, &[], &[0u8; NONCE_SIZE]),
            Err(Error::DecryptionFailed)
        ));
    }

    #[test]
    fn test_wrong_symmetric_key() {
        let ciphertext = encrypt(&[1u8; KEY_SIZE], &[], b"secret").unwrap();
        assert!(matches!(
            decrypt(&[2u8; KEY_SIZE], &[], &ciphertext),
            Err(Error::DecryptionFailed)
        ));
    }

    #[test]
    fn test_box_output_is_not_secretbox_output() {
        let alice = KeyPair::generate().unwrap();
        let bob = KeyPair::generate().unwrap();

        let ciphertext = encrypt(&alice.private_key_bytes(), &bob.public_key_bytes(), b"x").unwrap();

        // Opening a box frame in secret-box mode must not succeed
        assert!(matches!(
            decrypt(&bob.private_key_bytes(), &[], &ciphertext),
            Err(Error::DecryptionFailed)
        ));
    }
}
