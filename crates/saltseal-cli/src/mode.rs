//! Mode selection and the immutable run configuration.

use std::ffi::OsString;

use saltseal_common::{Error, Result};
use tracing::warn;

use crate::Args;

/// What a single invocation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
    GenerateKeys,
}

impl Mode {
    /// Pick the mode from the three mode flags.
    ///
    /// Key generation wins over everything else. Otherwise exactly one of
    /// encrypt and decrypt must be set.
    pub fn select(encrypt: bool, decrypt: bool, generate: bool) -> Result<Self> {
        match (encrypt, decrypt, generate) {
            (_, _, true) => Ok(Mode::GenerateKeys),
            (true, false, false) => Ok(Mode::Encrypt),
            (false, true, false) => Ok(Mode::Decrypt),
            (true, true, false) => Err(Error::usage("-e and -d are mutually exclusive")),
            (false, false, false) => Err(Error::usage("no mode selected")),
        }
    }
}

/// Where the message or ciphertext comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Literal bytes of the single positional argument.
    Argument(Vec<u8>),
    /// Everything on standard input.
    Stdin,
}

/// Validated configuration, built once at startup.
#[derive(Debug)]
pub struct Config {
    pub mode: Mode,
    /// Secret key (secret-box) or private key (box), hex.
    pub key: String,
    /// Peer public key, hex. Empty selects secret-box mode.
    pub public_key: String,
    pub input: Input,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let mode = Mode::select(args.encrypt, args.decrypt, args.generate)?;

        Ok(Self {
            mode,
            key: args.key.unwrap_or_default(),
            public_key: args.public_key.unwrap_or_default(),
            input: select_input(args.message),
        })
    }
}

fn select_input(mut message: Vec<OsString>) -> Input {
    match message.len() {
        1 => Input::Argument(message.remove(0).into_encoded_bytes()),
        0 => Input::Stdin,
        n => {
            warn!("{} positional arguments given, reading message from stdin", n);
            Input::Stdin
        }
    }
}
