// src/config/types.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Worker threads; 0 means one per core.
    #[serde(default)]
    pub threads: usize,
    #[serde(default)]
    pub sequential: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// File-name regexes skipped when the input is a directory.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            exclude: default_exclude(),
            max_depth: default_max_depth(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Recommendations kept per user; 0 means all.
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub force: bool,
}

// Hidden files (.crc side files) and job markers (_SUCCESS, _logs).
fn default_exclude() -> Vec<String> {
    vec![r"^\.".into(), "^_".into()]
}
const fn default_max_depth() -> usize { 1 }

/// On-disk shape of `wtf.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WtfToml {
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub pipeline: PipelineConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
    pub exclude_patterns: Vec<regex::Regex>,
}
