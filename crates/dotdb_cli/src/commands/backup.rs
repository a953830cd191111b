//! Backup and restore commands.
//!
//! Both go through the store API, so `SamePath` and corruption checks apply
//! exactly as they do for library callers.

use super::{write_json, CommandResult, OutputFormat};
use dotdb_core::Store;
use serde_json::json;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Copies the store to `dest`.
pub fn create(store: &Store, dest: &Path, format: OutputFormat, out: &mut dyn Write) -> CommandResult {
    info!("Creating backup at {:?}", dest);
    let written = store.backup(dest)?;
    let keys = store.len()?;

    match format {
        OutputFormat::Json => write_json(
            out,
            &json!({ "path": written.display().to_string(), "keys": keys }),
        )?,
        OutputFormat::Text => {
            writeln!(out, "✓ Backup created successfully")?;
            writeln!(out, "  Path: {}", written.display())?;
            writeln!(out, "  Keys: {keys}")?;
        }
    }
    Ok(())
}

/// Replaces the store's contents with the backup at `src`.
pub fn restore(store: &Store, src: &Path, format: OutputFormat, out: &mut dyn Write) -> CommandResult {
    info!("Restoring store from {:?}", src);
    let keys = store.restore(src)?;

    match format {
        OutputFormat::Json => write_json(out, &json!({ "restored": keys }))?,
        OutputFormat::Text => {
            writeln!(out, "✓ Restore completed successfully")?;
            writeln!(out, "  Keys: {keys}")?;
        }
    }
    Ok(())
}
