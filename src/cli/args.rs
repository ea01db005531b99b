// src/cli/args.rs
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wtf", version, about = "Who-to-follow recommendations from shared followees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Suppress the run summary and warnings
    #[arg(long, short, global = true)]
    pub quiet: bool,
    /// Configuration file (defaults to ./wtf.toml when present)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Index the graph and compute recommendations in one go
    Run {
        /// Adjacency file or directory of part files
        input: PathBuf,
        /// Recommendations file (stdout when omitted or "-")
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Also persist the intermediate index here
        #[arg(long, value_name = "FILE")]
        checkpoint: Option<PathBuf>,
        #[command(flatten)]
        rank: RankArgs,
        #[command(flatten)]
        exec: ExecArgs,
    },
    /// Build the inverted follower index only
    Index {
        /// Adjacency file or directory of part files
        input: PathBuf,
        /// Index checkpoint to write
        output: PathBuf,
        #[command(flatten)]
        exec: ExecArgs,
    },
    /// Compute recommendations from a previously written index
    Similarity {
        /// Index checkpoint produced by `wtf index`
        index: PathBuf,
        /// Recommendations file (stdout when omitted or "-")
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        #[command(flatten)]
        rank: RankArgs,
        #[command(flatten)]
        exec: ExecArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct RankArgs {
    /// Keep at most N recommendations per user (0 = all)
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExecArgs {
    /// Worker threads (0 = one per core)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,
    /// Run on a single thread
    #[arg(long)]
    pub sequential: bool,
    /// Overwrite existing output files
    #[arg(long, short)]
    pub force: bool,
}
