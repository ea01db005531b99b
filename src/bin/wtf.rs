// src/bin/wtf.rs
use clap::Parser;
use colored::Colorize;

use whotofollow_core::cli::{self, Cli};
use whotofollow_core::exit::WtfExit;
use whotofollow_core::logging;

fn main() -> WtfExit {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match cli::dispatch(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            WtfExit::for_error(&e)
        }
    }
}
