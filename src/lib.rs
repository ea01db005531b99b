pub mod cli;
pub mod config;
pub mod dataflow;
pub mod error;
pub mod exit;
pub mod graph;
pub mod io;
pub mod logging;
pub mod reporting;
pub mod types;
