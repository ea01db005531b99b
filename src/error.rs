// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WtfError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid setting: {0}")]
    Setting(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Malformed checkpoint at line {line}: {source}")]
    Checkpoint {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("No input records found under {0}")]
    EmptyInput(PathBuf),

    #[error("Output already exists: {0} (use --force to overwrite)")]
    OutputExists(PathBuf),

    #[error("Generic error: {0}")]
    Other(String),
}

impl WtfError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        WtfError::Io {
            source,
            path: path.into(),
        }
    }

    /// True when the failure is caused by what the user handed us rather than the environment.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            WtfError::Config(_)
                | WtfError::Setting(_)
                | WtfError::Regex(_)
                | WtfError::Checkpoint { .. }
                | WtfError::EmptyInput(_)
                | WtfError::OutputExists(_)
        ) || matches!(
            self,
            WtfError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

pub type Result<T> = std::result::Result<T, WtfError>;

// Allow `?` on std::io::Error by converting to WtfError::Io with unknown path.
impl From<std::io::Error> for WtfError {
    fn from(source: std::io::Error) -> Self {
        WtfError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for WtfError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map(PathBuf::from);
        match (e.into_io_error(), path) {
            (Some(source), Some(path)) => WtfError::Io { source, path },
            (Some(source), None) => WtfError::from(source),
            (None, _) => WtfError::Other("directory walk failed (symlink loop)".to_string()),
        }
    }
}
