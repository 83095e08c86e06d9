//! blockhash command-line interface.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use blockhash::commands::{self, RecordOptions};
use blockhash::{DigestAlgorithm, FsStore, Hasher, HasherConfig, Payload};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter.
const LOG_ENV: &str = "BLOCKHASH_LOG";

#[derive(Parser)]
#[command(name = "blockhash")]
#[command(version, about = "Deterministic record hashing and hex transcoding", long_about = None)]
struct Cli {
    /// Digest algorithm: sha256 or blake3
    #[arg(short, long, default_value = "sha256", global = true)]
    algorithm: DigestAlgorithm,

    /// Directory that resource names are resolved against
    #[arg(short, long, value_name = "DIR", default_value = ".", global = true)]
    root: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RecordArgs {
    /// Identifier to assign to the record
    #[arg(long)]
    id: Option<u64>,

    /// Override the record salt
    #[arg(long)]
    salt: Option<u64>,
}

impl From<&RecordArgs> for RecordOptions {
    fn from(args: &RecordArgs) -> Self {
        RecordOptions {
            identifier: args.id,
            salt: args.salt,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a record with a text payload
    Record {
        /// Payload text
        text: String,
        #[command(flatten)]
        record: RecordArgs,
    },

    /// Hash a record with a structured JSON payload
    RecordJson {
        /// Payload as JSON
        json: String,
        #[command(flatten)]
        record: RecordArgs,
    },

    /// Print the digest of a JSON value (bare words hash as strings)
    Digest {
        /// Value to hash
        value: String,
    },

    /// Walk through value and record hashing
    Demo,

    /// Print a resource as hex
    HexEncode {
        /// Resource to read
        name: String,
    },

    /// Decode a hex text resource into bytes
    HexDecode {
        /// Resource holding hex text
        hex_name: String,
        /// Resource to write
        out_name: String,
    },

    /// Encode a resource to hex and decode it into another resource
    HexRoundtrip {
        /// Resource to read
        source: String,
        /// Resource to write
        destination: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let hasher = Hasher::new(HasherConfig {
        algorithm: cli.algorithm,
    });
    let store = FsStore::new(&cli.root);

    match cli.command {
        Commands::Record { text, record } => {
            let hashed =
                commands::hash_record(&hasher, Payload::Text(text), (&record).into()).await?;
            print_lines(commands::render_record(&hashed)?);
        }
        Commands::RecordJson { json, record } => {
            let payload = commands::parse_structured(&json).context("payload must be JSON")?;
            let hashed = commands::hash_record(&hasher, payload, (&record).into()).await?;
            print_lines(commands::render_record(&hashed)?);
        }
        Commands::Digest { value } => {
            println!("{}", commands::digest_input(&hasher, &value)?);
        }
        Commands::Demo => {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default();
            print_lines(commands::demo(&hasher, now).await?);
        }
        Commands::HexEncode { name } => {
            println!("{}", commands::hex_encode(&store, &name)?);
        }
        Commands::HexDecode { hex_name, out_name } => {
            let written = commands::hex_decode(&store, &store, &hex_name, &out_name)?;
            println!("wrote {} bytes to {}", written, out_name);
        }
        Commands::HexRoundtrip {
            source,
            destination,
        } => {
            let report = commands::hex_copy(&store, &store, &source, &destination)?;
            println!("{}", report.hex);
            println!(
                "round trip ok: {} bytes from {} to {}",
                report.bytes, report.source, report.destination
            );
        }
    }

    Ok(())
}

fn setup_logging(debug: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("blockhash=debug,blockhash_core=debug,blockhash_io=debug")
        } else {
            EnvFilter::new("blockhash=warn,blockhash_core=warn,blockhash_io=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}
