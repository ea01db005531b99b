// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands, ExecArgs, RankArgs};
pub use handlers::{dispatch, handle_index, handle_run, handle_similarity, RunOptions};
