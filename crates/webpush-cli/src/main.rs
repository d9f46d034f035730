//! `webpush` binary.
//!
//! # Usage
//!
//! ```bash
//! # Create a receiver identity (refuses to overwrite an existing file)
//! webpush keygen --out keys.json
//!
//! # Decrypt a raw message, standard base64
//! webpush decrypt --keys keys.json --message 'DGv6ra1nlYgDCS1FRnbz...'
//!
//! # Decrypt a relay envelope and pretty-print the JSON body
//! webpush decrypt --keys keys.json --relay push.json --json
//! ```
//!
//! Results go to stdout; logs go to stderr.

use std::{
    error::Error,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use webpush_receiver::{PushError, PushKeys, RelayMessage};

/// Web Push receiver tool
#[derive(Parser, Debug)]
#[command(name = "webpush")]
#[command(about = "Generate Web Push receiver keys and decrypt aes128gcm push messages")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a key pair and auth secret as a JSON key bundle
    Keygen {
        /// Write the bundle to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Decrypt a push message with a stored key bundle
    Decrypt {
        /// Key bundle written by `keygen`
        #[arg(short, long)]
        keys: PathBuf,

        /// Raw message, standard base64
        #[arg(short, long, conflicts_with = "relay", required_unless_present = "relay")]
        message: Option<String>,

        /// Relay envelope JSON file
        #[arg(short, long)]
        relay: Option<PathBuf>,

        /// Parse the plaintext as JSON and pretty-print it
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    run(args.command, &mut io::stdout().lock())
}

fn run(command: Command, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Keygen { out: path } => keygen(path.as_deref(), out),
        Command::Decrypt { keys, message, relay, json } => {
            let rendered = decrypt(&keys, message.as_deref(), relay.as_deref(), json)?;
            writeln!(out, "{rendered}")?;
            Ok(())
        },
    }
}

fn keygen(path: Option<&Path>, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let keys = PushKeys::generate()?;
    let bundle = serde_json::to_string_pretty(&keys)?;

    match path {
        Some(path) => {
            write_new_file(path, bundle.as_bytes())?;
            info!(path = %path.display(), public_key = %keys.public_key, "wrote key bundle");
        },
        None => writeln!(out, "{bundle}")?,
    }

    Ok(())
}

/// Create `path` and write `contents`, failing if it already exists.
fn write_new_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.write_all(b"\n")
}

fn decrypt(
    keys_path: &Path,
    message: Option<&str>,
    relay_path: Option<&Path>,
    json: bool,
) -> Result<String, Box<dyn Error>> {
    let keys: PushKeys = serde_json::from_str(&fs::read_to_string(keys_path)?)?;

    let (source, plaintext) = match (message, relay_path) {
        (Some(message), _) => (None, keys.decrypt(message).inspect_err(hint)?),
        (None, Some(path)) => {
            let relay: RelayMessage = serde_json::from_str(&fs::read_to_string(path)?)?;
            let opened = relay.open(&keys).inspect_err(hint)?;
            info!(source = %opened.source, "opened relay message");
            (Some(opened.source), opened.plaintext)
        },
        (None, None) => return Err("one of --message or --relay is required".into()),
    };

    if !json {
        return Ok(plaintext);
    }

    let body: serde_json::Value = serde_json::from_str(&plaintext)?;
    let rendered = match source {
        Some(source) => serde_json::json!({ "source": source, "body": body }),
        None => body,
    };
    Ok(serde_json::to_string_pretty(&rendered)?)
}

fn hint(err: &PushError) {
    if err.is_authentication_failure() {
        warn!("message was not encrypted to these keys (or was modified in transit)");
    }
}
