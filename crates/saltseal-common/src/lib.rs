//! Shared utilities for saltseal: logging, error types, hex helpers.
//!
//! This crate provides common infrastructure used by the crypto library and
//! the command-line tool.

#![forbid(unsafe_code)]

pub mod error;
pub mod helpers;

pub use error::{Error, Result};

/// Initialize tracing with a specific default level.
///
/// Log level is controlled by the `RUST_LOG` environment variable, falling
/// back to `default_level` when unset. Logs go to stderr; stdout is reserved
/// for ciphertext, plaintext and generated keys.
pub fn init_tracing_with_default(default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
