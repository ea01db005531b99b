// src/reporting.rs
//! Console summary of a pipeline run, written to stderr.

use std::time::Duration;

use colored::Colorize;

use crate::graph::PipelineStats;

/// What the summary line reports besides the stage counts.
pub struct RunReport<'a> {
    pub stats: &'a PipelineStats,
    pub digest: Option<&'a str>,
    pub threads: usize,
}

pub fn print_summary(report: &RunReport<'_>) {
    eprintln!("{}", summary_lines(report).join("\n"));
}

#[must_use]
pub fn summary_lines(report: &RunReport<'_>) -> Vec<String> {
    let s = report.stats;
    let mut lines = vec![format!(
        "{} {} {} from {} {} in {}",
        "OK".green().bold(),
        s.users,
        pluralize("user", s.users),
        s.edges,
        pluralize("edge", s.edges),
        format_duration(s.elapsed),
    )];
    lines.push(format!(
        "   {} signals, {} candidate records, {} recommendations on {} {}",
        s.signals,
        s.candidates,
        s.recommendations,
        report.threads,
        pluralize("worker", report.threads),
    ));
    if let Some(digest) = report.digest {
        lines.push(format!("   sha256 {}", digest.dimmed()));
    }
    lines
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

fn format_duration(d: Duration) -> String {
    if d.as_secs() > 0 {
        format!("{:.2}s", d.as_secs_f64())
    } else {
        format!("{}ms", d.as_millis())
    }
}
