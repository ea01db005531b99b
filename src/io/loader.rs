// src/io/loader.rs
//! Adjacency input: `<follower> <followee1> <followee2> ...` per line.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Result, WtfError};
use crate::types::{Adjacency, UserId};

/// Parses one line. Blank lines yield `None`.
#[must_use]
pub fn parse_line(line: &str) -> Option<Adjacency> {
    let mut tokens = line.split_whitespace();
    let follower = tokens.next()?;
    let followees = tokens.map(UserId::from).collect();
    Some(Adjacency::new(follower, followees))
}

#[must_use]
pub fn parse_str(content: &str) -> Vec<Adjacency> {
    content.lines().filter_map(parse_line).collect()
}

/// Resolves `path` to the files to read.
///
/// A file is returned as-is. A directory is walked up to `input.max_depth`,
/// skipping excluded file names, in file-name order. Depth 1 reads the
/// directory's own files; a depth of 0 finds nothing and so is `EmptyInput`.
/// Takes the whole [`Config`] because the compiled exclude patterns live there.
///
/// # Errors
/// Returns error if the path is missing, unreadable, or a directory with no eligible files.
pub fn discover(path: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let meta = fs::metadata(path).map_err(|e| WtfError::io(e, path))?;
    if meta.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(path)
        .max_depth(config.input.max_depth)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if config.is_excluded(&name) {
            debug!(file = %entry.path().display(), "skipping excluded input file");
            continue;
        }
        files.push(entry.into_path());
    }

    if files.is_empty() {
        return Err(WtfError::EmptyInput(path.to_path_buf()));
    }
    Ok(files)
}

/// Reads every adjacency record under `path`.
///
/// # Errors
/// Returns error if discovery fails or any file cannot be read.
pub fn load(path: &Path, config: &Config) -> Result<Vec<Adjacency>> {
    let files = discover(path, config)?;
    let mut records = Vec::new();
    for file in &files {
        let content = fs::read_to_string(file).map_err(|e| WtfError::io(e, file))?;
        let before = records.len();
        records.extend(parse_str(&content));
        debug!(file = %file.display(), records = records.len() - before, "read input file");
    }
    info!(files = files.len(), records = records.len(), "loaded graph");
    Ok(records)
}
