//! CLI command implementations.
//!
//! Every command takes an open store and a writer, so output can be
//! captured in tests.

pub mod backup;
pub mod mutate;
pub mod query;

use clap::ValueEnum;
use dotdb_core::{Entry, Value};
use std::io::Write;

/// Result type shared by all commands.
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// One JSON document per command.
    Json,
}

/// Parses a command-line value as JSON, falling back to a plain string.
///
/// `15` is a number, `"15"` and `15x` are strings, `[1,2]` is an array.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .unwrap_or_else(|_| Value::Text(raw.to_string()))
}

pub(crate) fn write_json(out: &mut dyn Write, value: &serde_json::Value) -> CommandResult {
    writeln!(out, "{}", serde_json::to_string(value)?)?;
    Ok(())
}

pub(crate) fn write_entries(
    out: &mut dyn Write,
    entries: &[Entry],
    format: OutputFormat,
) -> CommandResult {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(entries)?)?,
        OutputFormat::Text => {
            for entry in entries {
                writeln!(out, "{} = {}", entry.key, entry.value)?;
            }
        }
    }
    Ok(())
}
