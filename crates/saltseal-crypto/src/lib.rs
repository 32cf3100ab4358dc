//! Cryptographic core for saltseal.
//!
//! This crate provides:
//! - Curve25519 key pair generation
//! - Sealing and opening of short messages in NaCl box or secret-box mode
//!
//! # Design
//!
//! All primitives come from the RustCrypto `crypto_box` and
//! `crypto_secretbox` crates. What lives here is the framing: a fresh random
//! 24-byte nonce is prepended to each sealed payload, and the presence of a
//! 32-byte peer public key switches from secret-box to box mode.

#![forbid(unsafe_code)]

pub mod codec;
pub mod keys;

pub use codec::{decrypt, encrypt, seal_with_nonce, Mode};
pub use keys::KeyPair;

/// Size of secret, private and public keys.
pub const KEY_SIZE: usize = 32;

/// Size of the random nonce prepended to every ciphertext.
pub const NONCE_SIZE: usize = 24;

/// Size of the Poly1305 authentication tag inside the sealed payload.
pub const TAG_SIZE: usize = 16;
