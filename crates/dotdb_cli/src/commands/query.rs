//! Read-only commands: `get`, `has`, `list`, `starts-with`.

use super::{write_entries, write_json, CommandResult, OutputFormat};
use dotdb_core::Store;
use serde_json::json;
use std::io::Write;

/// Prints the value at `key`.
///
/// A missing key is an error so scripts can tell it apart from a stored
/// `null`.
pub fn get(store: &Store, key: &str, format: OutputFormat, out: &mut dyn Write) -> CommandResult {
    let value = store
        .get(key)?
        .ok_or_else(|| format!("no value stored at '{key}'"))?;

    match format {
        OutputFormat::Json => write_json(out, &json!({ "key": key, "value": value }))?,
        OutputFormat::Text => writeln!(out, "{value}")?,
    }
    Ok(())
}

/// Prints whether anything is stored at `key`.
pub fn has(store: &Store, key: &str, format: OutputFormat, out: &mut dyn Write) -> CommandResult {
    let present = store.has(key)?;

    match format {
        OutputFormat::Json => write_json(out, &json!({ "key": key, "present": present }))?,
        OutputFormat::Text => writeln!(out, "{present}")?,
    }
    Ok(())
}

/// Lists top-level entries, or every leaf when `flat` is set.
pub fn list(store: &Store, flat: bool, format: OutputFormat, out: &mut dyn Write) -> CommandResult {
    let entries = store.all(flat)?;
    write_entries(out, &entries, format)
}

/// Lists leaf entries whose key starts with `query`.
pub fn starts_with(
    store: &Store,
    query: &str,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CommandResult {
    let entries = store.starts_with(query)?;
    write_entries(out, &entries, format)
}
