// src/io/checkpoint.rs
//! The inverted index between the indexing and similarity jobs, as JSON lines.

use std::fs;
use std::path::Path;

use tracing::info;

use super::writer::write_file;
use crate::error::{Result, WtfError};
use crate::types::InvertedList;

/// Serializes one entry per line.
///
/// # Errors
/// Returns error if serialization fails.
pub fn encode(entries: &[InvertedList]) -> Result<String> {
    let mut out = String::new();
    for entry in entries {
        let line = serde_json::to_string(entry)
            .map_err(|e| WtfError::Other(format!("cannot encode index entry: {e}")))?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Parses JSON lines, skipping blank ones.
///
/// # Errors
/// Returns a `Checkpoint` error naming the first malformed line (1-based).
pub fn decode(content: &str) -> Result<Vec<InvertedList>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|source| WtfError::Checkpoint { line: i + 1, source })
        })
        .collect()
}

/// # Errors
/// Returns error if the file exists and `force` is false, or on write failure.
pub fn write_index(path: &Path, entries: &[InvertedList], force: bool) -> Result<()> {
    write_file(path, encode(entries)?.as_bytes(), force)?;
    info!(path = %path.display(), users = entries.len(), "wrote index checkpoint");
    Ok(())
}

/// # Errors
/// Returns error if the file cannot be read or holds a malformed line.
pub fn read_index(path: &Path) -> Result<Vec<InvertedList>> {
    let content = fs::read_to_string(path).map_err(|e| WtfError::io(e, path))?;
    let entries = decode(&content)?;
    info!(path = %path.display(), users = entries.len(), "read index checkpoint");
    Ok(entries)
}
