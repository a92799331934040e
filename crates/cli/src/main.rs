//! docbridge CLI
//!
//! Encode, decode and inspect transportable client errors, and probe the
//! client bootstrap.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docbridge_core::{reconstitute, registry, stringify, DomainError, ReasonEncoding, TransportCodec};
use docbridge_db::{acquire, schema, Engine, Settings};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// docbridge - transport client errors across process boundaries
#[derive(Parser)]
#[command(name = "docbridge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database path (defaults to ~/.docbridge/data)
    #[arg(short, long)]
    db_path: Option<PathBuf>,

    /// Use in-memory database (for testing)
    #[arg(long)]
    memory: bool,

    /// How the `reason` key is encoded: legacy or persist
    #[arg(short, long)]
    reason_encoding: Option<ReasonEncoding>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an error and print its transport string
    Encode {
        /// HTTP-like status code
        #[arg(allow_negative_numbers = true)]
        status: i64,

        /// Machine-readable name, e.g. not_found
        name: String,

        /// Human-readable reason
        reason: String,
    },

    /// Reconstitute an error from its transport string
    Decode {
        /// Transport string (reads from stdin if not provided)
        text: Option<String>,
    },

    /// Convert a raw client failure object into a transport string
    Inspect {
        /// Failure JSON (reads from stdin if not provided)
        json: Option<String>,
    },

    /// Load the client and list its capabilities
    Probe {
        /// Fail unless this capability is available
        #[arg(long)]
        require: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut settings = Settings::from_env();
    if let Some(encoding) = cli.reason_encoding {
        settings = settings.with_reason_encoding(encoding);
    }
    if cli.memory {
        settings = settings.with_engine(Engine::Memory);
    } else if let Some(path) = cli.db_path {
        settings = settings.with_engine(Engine::RocksDb(path));
    }

    registry::install(TransportCodec::new(settings.reason_encoding))?;
    debug!("Transport codec installed: {}", settings.reason_encoding);

    match cli.command {
        Commands::Encode { status, name, reason } => {
            cmd_encode(status, name, reason);
        }
        Commands::Decode { text } => {
            cmd_decode(text)?;
        }
        Commands::Inspect { json } => {
            cmd_inspect(json)?;
        }
        Commands::Probe { require } => {
            cmd_probe(settings, require).await?;
        }
    }

    Ok(())
}

fn read_input(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn cmd_encode(status: i64, name: String, reason: String) {
    let err = DomainError::new(status, name, reason);
    println!("{}", stringify(&err));
}

fn cmd_decode(text: Option<String>) -> Result<()> {
    let text = read_input(text)?;
    let err = reconstitute(text.trim()).context("Failed to reconstitute error")?;

    println!("status:  {}", err.status());
    println!("name:    {}", err.name());
    println!("message: {}", err.message());
    println!("reason:  {}", err.reason().unwrap_or("(none)"));

    Ok(())
}

fn cmd_inspect(json: Option<String>) -> Result<()> {
    let json = read_input(json)?;
    let value: serde_json::Value =
        serde_json::from_str(json.trim()).context("Failed to parse failure object")?;

    match DomainError::from_failure(&value) {
        Some(err) => {
            println!("{}", stringify(&err));
            eprintln!("{}", err.describe());
        }
        None => println!("no error"),
    }

    Ok(())
}

async fn cmd_probe(settings: Settings, require: Option<String>) -> Result<()> {
    if let Engine::RocksDb(path) = &settings.engine {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let db = match acquire(&settings).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("{}", stringify(&e.to_domain()));
            anyhow::bail!("Client bootstrap failed: {}", e);
        }
    };
    info!("Client ready: {}", settings.engine);

    let caps = schema::capabilities(&db).await?;
    if caps.is_empty() {
        println!("No capabilities discovered");
    } else {
        println!("Capabilities:");
        for cap in &caps {
            println!("  • {}", cap);
        }
    }

    if let Some(name) = require {
        if let Err(e) = schema::require_capability(&db, &name).await {
            eprintln!("{}", stringify(&e.to_domain()));
            anyhow::bail!("Required capability missing: {}", name);
        }
        println!("✓ {} available", name);
    }

    Ok(())
}
