//! BSM CLI
//!
//! Inspect and edit `.bsm` files from the command line.

use std::path::PathBuf;

use bsm::{BsmError, BsmFile, Config, Store};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// BSM CLI
#[derive(Parser, Debug)]
#[command(name = "bsm")]
#[command(about = "Inspect and edit BSM key-value files")]
#[command(version)]
struct Args {
    /// Path to the .bsm file
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every key with its kind and value
    Dump,

    /// Print the value stored under a key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key, creating the file if needed
    Set {
        /// The key to set
        key: String,

        #[command(flatten)]
        value: ValueArgs,
    },

    /// Delete a key
    Delete {
        /// The key to delete
        key: String,
    },
}

#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
struct ValueArgs {
    /// Store a 32-bit integer
    #[arg(long, allow_hyphen_values = true)]
    int: Option<i32>,

    /// Store a 32-bit float
    #[arg(long, allow_hyphen_values = true)]
    float: Option<f32>,

    /// Store a text string
    #[arg(long)]
    string: Option<String>,

    /// Store raw bytes given as hex (e.g. "00010D")
    #[arg(long)]
    raw_hex: Option<String>,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("bsm v{}", bsm::VERSION);

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> bsm::Result<()> {
    let config = Config::builder()
        .create_if_missing(matches!(args.command, Commands::Set { .. }))
        .build();

    let mut file = BsmFile::open(&args.file, config)?;

    match args.command {
        Commands::Dump => dump(file.store()),
        Commands::Get { key } => println!("{}", file.store().try_get(&key)?),
        Commands::Set { key, value } => {
            let store = file.store_mut();
            if let Some(v) = value.int {
                store.set_int(key, v);
            } else if let Some(v) = value.float {
                store.set_float(key, v);
            } else if let Some(v) = value.string {
                store.set_string(key, v);
            } else if let Some(hex) = value.raw_hex {
                store.set_raw(key, parse_hex(&hex)?);
            }
            file.save()?;
        }
        Commands::Delete { key } => {
            if !file.store().exists(&key) {
                tracing::warn!(key = %key, "key not present, nothing to delete");
                return Ok(());
            }
            file.store_mut().delete(&key);
            file.save()?;
        }
    }

    Ok(())
}

fn dump(store: &Store) {
    for (name, value) in store {
        let kind = value.kind().map(|k| k.name()).unwrap_or("null");
        println!("({}) {} = {}", kind, name, value);
    }
}

fn parse_hex(hex: &str) -> bsm::Result<Vec<u8>> {
    let hex: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
    let hex = hex.strip_prefix("0x").unwrap_or(&hex);

    if !hex.is_ascii() || hex.len() % 2 != 0 {
        return Err(BsmError::Config(format!("invalid hex input: {}", hex)));
    }

    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| BsmError::Config(format!("invalid hex byte: {}", &hex[i..i + 2])))
        })
        .collect()
}
