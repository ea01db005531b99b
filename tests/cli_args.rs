// tests/cli_args.rs - Command line parsing
use std::path::PathBuf;

use clap::Parser;
use whotofollow_core::cli::{Cli, Commands};

#[test]
fn test_run_with_flags() {
    let cli = Cli::try_parse_from([
        "wtf", "-vv", "run", "edges", "-o", "out.txt", "--limit", "5", "--threads", "2", "--force",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 2);
    match cli.command {
        Commands::Run {
            input,
            output,
            checkpoint,
            rank,
            exec,
        } => {
            assert_eq!(input, PathBuf::from("edges"));
            assert_eq!(output, Some(PathBuf::from("out.txt")));
            assert!(checkpoint.is_none());
            assert_eq!(rank.limit, Some(5));
            assert_eq!(exec.threads, Some(2));
            assert!(exec.force);
            assert!(!exec.sequential);
        }
        _ => panic!("expected run"),
    }
}

#[test]
fn test_index_requires_output() {
    assert!(Cli::try_parse_from(["wtf", "index", "edges"]).is_err());
    let cli = Cli::try_parse_from(["wtf", "index", "edges", "index.jsonl", "--sequential"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Index { ref exec, .. } if exec.sequential
    ));
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["wtf", "similarity", "index.jsonl", "-q", "--config", "c.toml"]).unwrap();
    assert!(cli.quiet);
    assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
}
