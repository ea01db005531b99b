// src/cli/handlers.rs
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::args::{Cli, Commands, ExecArgs, RankArgs};
use crate::config::Config;
use crate::dataflow::{ParallelSubstrate, SequentialSubstrate, Substrate};
use crate::exit::WtfExit;
use crate::graph::{PipelineStats, RecommendationBuilder, RecommendationEngine};
use crate::io::{checkpoint, loader, writer, Destination};
use crate::reporting::{self, RunReport};
use crate::types::{Adjacency, RecommendationList};

/// Effective settings for one invocation: the config file with CLI overrides applied.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config: Config,
    pub quiet: bool,
}

impl RunOptions {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            quiet: false,
        }
    }

    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Applies command-line flags on top of the loaded configuration.
    pub fn apply_exec(&mut self, exec: &ExecArgs) {
        if let Some(threads) = exec.threads {
            self.config.pipeline.threads = threads;
        }
        self.config.pipeline.sequential |= exec.sequential;
        self.config.output.force |= exec.force;
    }

    pub fn apply_rank(&mut self, rank: &RankArgs) {
        if let Some(limit) = rank.limit {
            self.config.output.limit = limit;
        }
    }

    fn builder(&self) -> RecommendationBuilder {
        RecommendationBuilder::new().with_limit(self.config.output.limit)
    }
}

enum Job<'a> {
    Run {
        input: &'a Path,
        output: &'a Destination,
        checkpoint: Option<&'a Path>,
    },
    Index {
        input: &'a Path,
        output: &'a Path,
    },
    Similarity {
        index: &'a Path,
        output: &'a Destination,
    },
}

/// Routes a parsed command line to its handler.
///
/// # Errors
/// Returns error if configuration loading or the selected job fails.
pub fn dispatch(cli: &Cli) -> Result<WtfExit> {
    let config = match &cli.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().context("loading wtf.toml")?,
    };
    let mut opts = RunOptions::new(config).quiet(cli.quiet);

    match &cli.command {
        Commands::Run {
            input,
            output,
            checkpoint,
            rank,
            exec,
        } => {
            opts.apply_exec(exec);
            opts.apply_rank(rank);
            let dest = Destination::from_arg(output.as_deref());
            handle_run(input, &dest, checkpoint.as_deref(), &opts)
        }
        Commands::Index {
            input,
            output,
            exec,
        } => {
            opts.apply_exec(exec);
            handle_index(input, output, &opts)
        }
        Commands::Similarity {
            index,
            output,
            rank,
            exec,
        } => {
            opts.apply_exec(exec);
            opts.apply_rank(rank);
            let dest = Destination::from_arg(output.as_deref());
            handle_similarity(index, &dest, &opts)
        }
    }
}

/// Handles the run command: both jobs chained, optionally persisting the index.
///
/// # Errors
/// Returns error if loading, writing, or worker pool setup fails.
pub fn handle_run(
    input: &Path,
    output: &Destination,
    checkpoint: Option<&Path>,
    opts: &RunOptions,
) -> Result<WtfExit> {
    execute(
        &Job::Run {
            input,
            output,
            checkpoint,
        },
        opts,
    )
}

/// Handles the index command.
///
/// # Errors
/// Returns error if loading, writing, or worker pool setup fails.
pub fn handle_index(input: &Path, output: &Path, opts: &RunOptions) -> Result<WtfExit> {
    execute(&Job::Index { input, output }, opts)
}

/// Handles the similarity command.
///
/// # Errors
/// Returns error if the index cannot be read, output cannot be written, or pool setup fails.
pub fn handle_similarity(index: &Path, output: &Destination, opts: &RunOptions) -> Result<WtfExit> {
    execute(&Job::Similarity { index, output }, opts)
}

fn execute(job: &Job<'_>, opts: &RunOptions) -> Result<WtfExit> {
    let builder = opts.builder();
    if opts.config.pipeline.sequential {
        debug!("using sequential substrate");
        let engine = RecommendationEngine::new(SequentialSubstrate).with_builder(builder);
        execute_on(job, &engine, 1, opts)
    } else {
        let substrate = ParallelSubstrate::with_threads(opts.config.threads())
            .context("starting worker pool")?;
        let threads = substrate.threads();
        debug!(threads, "using parallel substrate");
        let engine = RecommendationEngine::new(substrate).with_builder(builder);
        execute_on(job, &engine, threads, opts)
    }
}

fn execute_on<S: Substrate>(
    job: &Job<'_>,
    engine: &RecommendationEngine<S>,
    threads: usize,
    opts: &RunOptions,
) -> Result<WtfExit> {
    let force = opts.config.output.force;
    match job {
        Job::Run {
            input,
            output,
            checkpoint: index_path,
        } => {
            let targets = output.path().into_iter().chain(*index_path);
            ensure_writable(targets, force)?;
            let graph = load_graph(input, &opts.config)?;

            let out = engine.run_with(graph, |indexed| match index_path {
                Some(path) => checkpoint::write_index(path, &indexed.entries, force)
                    .with_context(|| format!("writing index {}", path.display())),
                None => Ok(()),
            })?;
            emit(&out.lists, output, &out.stats, threads, opts)
        }
        Job::Index { input, output } => {
            ensure_writable([*output], force)?;
            let graph = load_graph(input, &opts.config)?;
            let start = Instant::now();
            let records = graph.len();
            let edges = graph.iter().map(Adjacency::edge_count).sum();

            let indexed = engine.index(graph);
            checkpoint::write_index(output, &indexed.entries, force)
                .with_context(|| format!("writing index {}", output.display()))?;

            let stats = PipelineStats {
                records,
                edges,
                signals: indexed.signals,
                users: indexed.entries.len(),
                elapsed: start.elapsed(),
                ..PipelineStats::default()
            };
            report(&stats, None, threads, opts);
            Ok(WtfExit::Success)
        }
        Job::Similarity { index, output } => {
            ensure_writable(output.path(), force)?;
            let entries = checkpoint::read_index(index)
                .with_context(|| format!("reading index {}", index.display()))?;
            let start = Instant::now();
            let signals = entries.iter().map(|e| e.signals.len()).sum();

            let recommended = engine.recommend(entries);
            let stats = PipelineStats {
                signals,
                users: recommended.lists.len(),
                candidates: recommended.candidates,
                recommendations: count_recommendations(&recommended.lists),
                elapsed: start.elapsed(),
                ..PipelineStats::default()
            };
            emit(&recommended.lists, output, &stats, threads, opts)
        }
    }
}

fn ensure_writable<'p>(targets: impl IntoIterator<Item = &'p Path>, force: bool) -> Result<()> {
    for path in targets {
        writer::ensure_writable(path, force)
            .with_context(|| format!("checking output {}", path.display()))?;
    }
    Ok(())
}

fn load_graph(input: &Path, config: &Config) -> Result<Vec<Adjacency>> {
    loader::load(input, config).with_context(|| format!("reading input {}", input.display()))
}

fn emit(
    lists: &[RecommendationList],
    output: &Destination,
    stats: &PipelineStats,
    threads: usize,
    opts: &RunOptions,
) -> Result<WtfExit> {
    writer::write(lists, output, opts.config.output.force).with_context(|| match output {
        Destination::Stdout => "writing recommendations to stdout".to_string(),
        Destination::File(path) => format!("writing recommendations {}", path.display()),
    })?;
    let digest = writer::digest(lists);
    info!(digest = %digest, "output digest");
    report(stats, Some(&digest), threads, opts);
    Ok(WtfExit::Success)
}

fn report(stats: &PipelineStats, digest: Option<&str>, threads: usize, opts: &RunOptions) {
    if opts.quiet {
        return;
    }
    reporting::print_summary(&RunReport {
        stats,
        digest,
        threads,
    });
}

fn count_recommendations(lists: &[RecommendationList]) -> usize {
    lists.iter().map(RecommendationList::len).sum()
}
