// src/config/mod.rs
pub mod types;

pub use self::types::{Config, InputConfig, OutputConfig, PipelineConfig, WtfToml};

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::error::{Result, WtfError};

pub const CONFIG_FILE: &str = "wtf.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        // Default patterns are known-good literals.
        Self::from_toml(WtfToml::default()).unwrap_or_default()
    }

    /// Loads `wtf.toml` from the current directory, falling back to defaults when absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::from_path(path)
        } else {
            debug!("no {CONFIG_FILE} found, using defaults");
            Ok(Self::new())
        }
    }

    /// Loads configuration from an explicit file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or holds invalid patterns.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| WtfError::io(e, path))?;
        let config = Self::parse_toml(&content)?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    /// Returns error on malformed TOML, an invalid exclude regex, or a zero depth.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let toml: WtfToml = toml::from_str(content)?;
        Self::from_toml(toml)
    }

    /// # Errors
    /// Returns error if an exclude pattern is not a valid regex or `input.max_depth` is 0.
    pub fn from_toml(toml: WtfToml) -> Result<Self> {
        if toml.input.max_depth == 0 {
            return Err(WtfError::Setting(
                "input.max_depth must be at least 1".to_string(),
            ));
        }
        let exclude_patterns = compile_patterns(&toml.input.exclude)?;
        Ok(Self {
            pipeline: toml.pipeline,
            input: toml.input,
            output: toml.output,
            exclude_patterns,
        })
    }

    /// Worker count to request, `None` meaning the rayon default.
    #[must_use]
    pub fn threads(&self) -> Option<usize> {
        (self.pipeline.threads > 0).then_some(self.pipeline.threads)
    }

    /// True if a directory entry with this file name should be skipped.
    #[must_use]
    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.exclude_patterns.iter().any(|re| re.is_match(file_name))
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(WtfError::from))
        .collect()
}
