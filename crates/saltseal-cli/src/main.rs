//! saltseal: encrypt or decrypt a short message with NaCl box / secret box.
//!
//! Ciphertext is written to stdout as `nonce(24) || sealed`. Passing a
//! public key with `-p` switches from shared-key to public-key mode.

#![forbid(unsafe_code)]

mod mode;

use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use mode::{Config, Input, Mode};
use saltseal_common::helpers::{decode_hex, to_key_array};
use saltseal_common::Error;
use saltseal_crypto::{KeyPair, KEY_SIZE};
use tracing::{debug, warn};
use zeroize::Zeroizing;

#[derive(Parser, Debug)]
#[command(name = "saltseal")]
#[command(about = "Encrypt or decrypt a message with NaCl box or secret box")]
#[command(override_usage = "saltseal [options] [message]")]
#[command(version)]
pub struct Args {
    /// encrypt contents of message
    #[arg(short = 'e')]
    encrypt: bool,

    /// decrypt contents of message
    #[arg(short = 'd')]
    decrypt: bool,

    /// generate public/private key pair
    #[arg(short = 'g')]
    generate: bool,

    /// secret key | private key (hex, exactly 32 bytes)
    #[arg(short = 'k', value_name = "HEX", env = "SALTSEAL_KEY", hide_env_values = true)]
    key: Option<String>,

    /// recipient/sender key | public key (hex); omit for secret-box mode
    #[arg(
        short = 'p',
        value_name = "HEX",
        env = "SALTSEAL_PUBLIC_KEY",
        hide_env_values = true
    )]
    public_key: Option<String>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Message to process; read from stdin unless exactly one is given.
    /// Option parsing stops at the first message argument.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 1..)]
    message: Vec<OsString>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    saltseal_common::init_tracing_with_default(&args.log_level);

    execute(args, io::stdin().lock(), io::stdout().lock())
}

/// Validate the arguments and dispatch. With no usable mode the help text
/// goes to `output` and the exit status is non-zero.
fn execute(args: Args, input: impl Read, mut output: impl Write) -> Result<ExitCode> {
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(Error::UsageError(reason)) => {
            warn!("{}", reason);
            write!(output, "{}", Args::command().render_help()).map_err(Error::from)?;
            output.flush().map_err(Error::from)?;
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    run(&config, input, output)?;
    Ok(ExitCode::SUCCESS)
}

/// Execute one invocation. Nothing is written to `output` unless the whole
/// operation succeeded.
fn run(config: &Config, input: impl Read, mut output: impl Write) -> Result<()> {
    let produced = match config.mode {
        Mode::GenerateKeys => {
            let keypair =
                KeyPair::generate().context("error generating public/private key pair")?;
            format!(
                "Private Key: {}\nPublic Key: {}\n",
                keypair.private_key_hex(),
                keypair.public_key_hex()
            )
            .into_bytes()
        }
        Mode::Encrypt | Mode::Decrypt => {
            let key = decode_hex("secret key", &config.key)
                .context("error decoding secret/private key")?;
            let key: Zeroizing<[u8; KEY_SIZE]> = Zeroizing::new(
                to_key_array("secret key", &key).context("error decoding secret/private key")?,
            );
            let peer = decode_hex("public key", &config.public_key)
                .context("error decoding public key")?;

            let message = read_input(&config.input, input)?;
            debug!(mode = ?config.mode, len = message.len(), "input read");

            if config.mode == Mode::Encrypt {
                saltseal_crypto::encrypt(&key, &peer, &message)
                    .context("error encrypting source")?
            } else {
                saltseal_crypto::decrypt(&key, &peer, &message)
                    .context("error decrypting source")?
            }
        }
    };

    output.write_all(&produced).map_err(Error::from)?;
    output.flush().map_err(Error::from)?;
    Ok(())
}

fn read_input(source: &Input, mut stdin: impl Read) -> Result<Vec<u8>> {
    match source {
        Input::Argument(bytes) => Ok(bytes.clone()),
        Input::Stdin => {
            let mut buf = Vec::new();
            stdin
                .read_to_end(&mut buf)
                .map_err(Error::StdinReadFailure)?;
            Ok(buf)
        }
    }
}
