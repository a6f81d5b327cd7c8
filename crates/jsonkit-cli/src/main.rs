//! `jsonkit` CLI: format, canonicalize, query and edit JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print (stdin → stdout)
//! echo '{"name":"Tom","age":22}' | jsonkit fmt
//!
//! # Canonical compact text, file to file
//! jsonkit canon -i data.json -o data.min.json
//!
//! # Read the subtree at a dot path
//! jsonkit get students.0.name -i class.json
//!
//! # Write a value at a dot path (invalid JSON is taken as a plain string)
//! jsonkit set students.0.age 23 -i class.json
//!
//! # Round-trip through the Any-Value codec (standard null semantics)
//! jsonkit any -i payload.json
//!
//! # Show parser and mapper decisions
//! jsonkit -v canon -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jsonkit_core::{AnyValue, Value};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jsonkit", version, about = "Inspect and edit JSON documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug events to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct Io {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pretty-print with two-space indentation
    Fmt {
        #[command(flatten)]
        io: Io,
    },
    /// Print the canonical compact text
    Canon {
        #[command(flatten)]
        io: Io,
    },
    /// Print the subtree at a dot path (`null` when missing)
    Get {
        /// Dot path such as `students.0.name`
        path: String,
        #[command(flatten)]
        io: Io,
    },
    /// Write a value at a dot path and print the document
    Set {
        /// Dot path such as `students.0.name`
        path: String,
        /// JSON literal; anything that does not parse is stored as a string
        value: String,
        #[command(flatten)]
        io: Io,
    },
    /// Round-trip through the Any-Value codec
    Any {
        #[command(flatten)]
        io: Io,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Fmt { io } => {
            let doc = parse_document(&io)?;
            write_output(io.output.as_deref(), &doc.to_pretty_text())?;
        }
        Commands::Canon { io } => {
            let doc = parse_document(&io)?;
            write_output(io.output.as_deref(), &doc.to_text())?;
        }
        Commands::Get { path, io } => {
            let doc = parse_document(&io)?;
            let subtree = doc.get_path(&path);
            if subtree.is_null() {
                tracing::debug!(path = %path, "nothing at path");
            }
            write_output(io.output.as_deref(), &subtree.to_text())?;
        }
        Commands::Set { path, value, io } => {
            let mut doc = parse_document(&io)?;
            let value = Value::parse(&value).unwrap_or_else(|err| {
                tracing::debug!(error = %err, "storing value as a plain string");
                Value::String(value)
            });
            doc.set_path(&path, value);
            write_output(io.output.as_deref(), &doc.to_text())?;
        }
        Commands::Any { io } => {
            let text = read_input(io.input.as_deref())?;
            let boxed = AnyValue::from_text(&text).context("Failed to decode JSON input")?;
            let encoded = boxed.to_text().context("Failed to encode JSON output")?;
            write_output(io.output.as_deref(), &encoded)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Strict parse: unlike `Value::from_text`, malformed input is an error here.
fn parse_document(io: &Io) -> Result<Value> {
    let text = read_input(io.input.as_deref())?;
    tracing::debug!(bytes = text.len(), "read input");
    Value::parse(&text).context("Failed to parse JSON input")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
