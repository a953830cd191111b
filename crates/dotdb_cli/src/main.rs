//! DotDB CLI
//!
//! Command-line access to DotDB stores.
//!
//! # Commands
//!
//! - `get`, `has`, `list`, `starts-with` - Read values
//! - `set`, `delete`, `clear` - Write values
//! - `push`, `pull` - Edit arrays
//! - `add`, `sub`, `mul`, `div` - Update numbers
//! - `backup`, `restore` - Copy the store file

mod commands;

use clap::{Parser, Subcommand};
use commands::OutputFormat;
use dotdb_core::{Arithmetic, Config, Store};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// DotDB command-line store tools.
#[derive(Parser)]
#[command(name = "dotdb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the store file (`.json` is appended if missing)
    #[arg(global = true, short, long)]
    path: Option<PathBuf>,

    /// Write the store file indented
    #[arg(global = true, long)]
    pretty: bool,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    /// Output format
    #[arg(global = true, short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at a key
    Get {
        /// Dot-path key
        key: String,
    },

    /// Check whether a key holds a value
    Has {
        /// Dot-path key
        key: String,
    },

    /// Store a value (parsed as JSON, else taken as text)
    Set {
        /// Dot-path key
        key: String,
        /// Value to store
        value: String,
    },

    /// Remove a key
    Delete {
        /// Dot-path key
        key: String,
    },

    /// Remove every key
    Clear,

    /// List stored entries
    List {
        /// List every leaf by its full dot path
        #[arg(long)]
        flat: bool,
    },

    /// List leaf entries whose key starts with a prefix
    StartsWith {
        /// Key prefix
        query: String,
    },

    /// Append values to an array
    Push {
        /// Dot-path key
        key: String,
        /// Values to append
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Remove matching values from an array
    Pull {
        /// Dot-path key
        key: String,
        /// Values to remove
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Add to a number
    Add {
        /// Dot-path key
        key: String,
        /// Operand
        #[arg(allow_negative_numbers = true)]
        operand: f64,
    },

    /// Subtract from a number
    Sub {
        /// Dot-path key
        key: String,
        /// Operand
        #[arg(allow_negative_numbers = true)]
        operand: f64,
    },

    /// Multiply a number
    Mul {
        /// Dot-path key
        key: String,
        /// Operand
        #[arg(allow_negative_numbers = true)]
        operand: f64,
    },

    /// Divide a number
    Div {
        /// Dot-path key
        key: String,
        /// Operand
        #[arg(allow_negative_numbers = true)]
        operand: f64,
    },

    /// Copy the store to another file
    Backup {
        /// Destination file
        dest: PathBuf,
    },

    /// Replace the store's contents with a backup
    Restore {
        /// Backup file
        src: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Commands::Version = cli.command {
        println!("DotDB CLI v{}", env!("CARGO_PKG_VERSION"));
        println!("DotDB Core v{}", dotdb_core::VERSION);
        return Ok(());
    }

    let path = cli.path.ok_or("Store path required (--path)")?;
    let store = Store::open_with_config(path, Config::new().pretty(cli.pretty))?;
    let format = cli.format;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Get { key } => commands::query::get(&store, &key, format, &mut out)?,
        Commands::Has { key } => commands::query::has(&store, &key, format, &mut out)?,
        Commands::List { flat } => commands::query::list(&store, flat, format, &mut out)?,
        Commands::StartsWith { query } => {
            commands::query::starts_with(&store, &query, format, &mut out)?;
        }
        Commands::Set { key, value } => {
            commands::mutate::set(&store, &key, &value, format, &mut out)?;
        }
        Commands::Delete { key } => commands::mutate::delete(&store, &key, format, &mut out)?,
        Commands::Clear => commands::mutate::clear(&store, format, &mut out)?,
        Commands::Push { key, values } => {
            commands::mutate::push(&store, &key, &values, format, &mut out)?;
        }
        Commands::Pull { key, values } => {
            commands::mutate::pull(&store, &key, &values, format, &mut out)?;
        }
        Commands::Add { key, operand } => {
            commands::mutate::arithmetic(&store, &key, Arithmetic::Add, operand, format, &mut out)?;
        }
        Commands::Sub { key, operand } => {
            commands::mutate::arithmetic(
                &store,
                &key,
                Arithmetic::Subtract,
                operand,
                format,
                &mut out,
            )?;
        }
        Commands::Mul { key, operand } => {
            commands::mutate::arithmetic(
                &store,
                &key,
                Arithmetic::Multiply,
                operand,
                format,
                &mut out,
            )?;
        }
        Commands::Div { key, operand } => {
            commands::mutate::arithmetic(
                &store,
                &key,
                Arithmetic::Divide,
                operand,
                format,
                &mut out,
            )?;
        }
        Commands::Backup { dest } => commands::backup::create(&store, &dest, format, &mut out)?,
        Commands::Restore { src } => commands::backup::restore(&store, &src, format, &mut out)?,
        Commands::Version => {}
    }

    out.flush()?;
    Ok(())
}
