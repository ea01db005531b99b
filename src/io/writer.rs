// src/io/writer.rs
//! Recommendation output: one `<user> <cand>(<score>) ...` line per user.

use std::fmt::Write as _;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::info;

use crate::error::{Result, WtfError};
use crate::types::RecommendationList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    #[must_use]
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p != Path::new("-") => Self::File(p.to_path_buf()),
            _ => Self::Stdout,
        }
    }

    /// The file this destination writes, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdout => None,
            Self::File(path) => Some(path),
        }
    }
}

/// Renders all lists, newline-terminated, in the given order.
#[must_use]
pub fn render(lists: &[RecommendationList]) -> String {
    let mut out = String::new();
    for list in lists {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{list}");
    }
    out
}

/// SHA-256 of the rendered output, hex encoded.
#[must_use]
pub fn digest(lists: &[RecommendationList]) -> String {
    let hash = Sha256::digest(render(lists).as_bytes());
    format!("{hash:x}")
}

/// Writes rendered lists to `dest`.
///
/// # Errors
/// Returns error if the file exists and `force` is false, or on write failure.
pub fn write(lists: &[RecommendationList], dest: &Destination, force: bool) -> Result<()> {
    let rendered = render(lists);
    match dest {
        Destination::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
        Destination::File(path) => {
            write_file(path, rendered.as_bytes(), force)?;
            info!(path = %path.display(), users = lists.len(), "wrote recommendations");
        }
    }
    Ok(())
}

/// Fails fast if `path` already exists and `force` is false.
///
/// Lets a job refuse before it writes anything else.
///
/// # Errors
/// Returns `OutputExists` for an existing path without `force`.
pub fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        return Err(WtfError::OutputExists(path.to_path_buf()));
    }
    Ok(())
}

/// Creates parent directories and writes `bytes`, refusing to clobber unless `force`.
///
/// # Errors
/// Returns error if the file exists and `force` is false, or on I/O failure.
pub fn write_file(path: &Path, bytes: &[u8], force: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| WtfError::io(e, parent))?;
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            WtfError::OutputExists(path.to_path_buf())
        } else {
            WtfError::io(e, path)
        }
    })?;
    file.write_all(bytes).map_err(|e| WtfError::io(e, path))?;
    Ok(())
}
