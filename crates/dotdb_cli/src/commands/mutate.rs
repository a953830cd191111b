//! Commands that change the store.

use super::{parse_value, write_json, CommandResult, OutputFormat};
use dotdb_core::{Arithmetic, Store, Value};
use serde_json::json;
use std::io::Write;
use tracing::{info, warn};

/// Stores `raw` (parsed as JSON, else text) at `key`.
pub fn set(
    store: &Store,
    key: &str,
    raw: &str,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CommandResult {
    let value = parse_value(raw);
    store.set(key, value.clone())?;

    match format {
        OutputFormat::Json => write_json(out, &json!({ "key": key, "value": value }))?,
        OutputFormat::Text => writeln!(out, "✓ Set {key} = {value}")?,
    }
    Ok(())
}

/// Removes `key`.
pub fn delete(store: &Store, key: &str, format: OutputFormat, out: &mut dyn Write) -> CommandResult {
    let removed = store.delete(key)?;

    match format {
        OutputFormat::Json => write_json(out, &json!({ "key": key, "removed": removed }))?,
        OutputFormat::Text if removed => writeln!(out, "✓ Deleted {key}")?,
        OutputFormat::Text => writeln!(out, "Nothing stored at {key}")?,
    }
    Ok(())
}

/// Empties the store.
///
/// A store whose old contents no longer decode is still cleared; the output
/// says so instead of reporting a key count.
pub fn clear(store: &Store, format: OutputFormat, out: &mut dyn Write) -> CommandResult {
    let previous = match store.len() {
        Ok(keys) => Some(keys),
        Err(e) => {
            warn!(error = %e, "previous contents could not be read");
            None
        }
    };
    store.delete_all()?;
    info!(keys = ?previous, "cleared store");

    match (format, previous) {
        (OutputFormat::Json, _) => write_json(out, &json!({ "cleared": previous }))?,
        (OutputFormat::Text, Some(keys)) => writeln!(out, "✓ Cleared {keys} top-level keys")?,
        (OutputFormat::Text, None) => {
            writeln!(out, "✓ Cleared store (previous contents were unreadable)")?;
        }
    }
    Ok(())
}

/// Appends values to the array at `key`.
pub fn push(
    store: &Store,
    key: &str,
    raw: &[String],
    format: OutputFormat,
    out: &mut dyn Write,
) -> CommandResult {
    let length = store.push(key, parse_all(raw))?;

    match format {
        OutputFormat::Json => write_json(out, &json!({ "key": key, "length": length }))?,
        OutputFormat::Text => writeln!(out, "✓ {key} now holds {length} items")?,
    }
    Ok(())
}

/// Removes matching values from the array at `key`.
pub fn pull(
    store: &Store,
    key: &str,
    raw: &[String],
    format: OutputFormat,
    out: &mut dyn Write,
) -> CommandResult {
    let removed = store.pull(key, parse_all(raw))?;

    match format {
        OutputFormat::Json => write_json(out, &json!({ "key": key, "removed": removed }))?,
        OutputFormat::Text => writeln!(out, "✓ Removed {removed} items from {key}")?,
    }
    Ok(())
}

/// Applies `op` with `operand` to the number at `key`.
pub fn arithmetic(
    store: &Store,
    key: &str,
    op: Arithmetic,
    operand: f64,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CommandResult {
    let result = Value::Number(store.apply_arithmetic(key, op, operand)?);

    match format {
        OutputFormat::Json => write_json(out, &json!({ "key": key, "value": result }))?,
        OutputFormat::Text => writeln!(out, "{result}")?,
    }
    Ok(())
}

fn parse_all(raw: &[String]) -> Vec<Value> {
    raw.iter().map(|item| parse_value(item)).collect()
}
