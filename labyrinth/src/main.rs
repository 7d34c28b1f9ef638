//! labyrinth: find the ways out of a maze.

mod config;

use std::io::{self, IsTerminal, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use labyrinth_core::{Maze, Point};
use labyrinth_crossterm::TerminalTracer;
use labyrinth_paths::{Backtracker, Report, Tracer};

use config::{Args, Config, TraceConfig};

/// JSON form of a run.
#[derive(Debug, Serialize)]
struct Output<'a> {
    #[serde(flatten)]
    report: Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path_list: Option<&'a [Vec<Point>]>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = Config::from(Args::parse());
    log::debug!("{config:?}");
    let styled = io::stdout().is_terminal();
    run(&config, &mut io::stdout(), styled)
}

/// Run the configured search and write the result to `out`. `styled` says
/// whether `out` is a terminal that trace frames may clear and colour.
fn run(config: &Config, out: &mut impl Write, styled: bool) -> Result<()> {
    let mut maze = config
        .source
        .load()
        .with_context(|| format!("Failed to load labyrinth from {}.", config.source))?;
    let start = config.start;
    if !maze.contains(start) {
        bail!(
            "Start {start} is outside the {}x{} labyrinth.",
            maze.width(),
            maze.height()
        );
    }

    if !config.json {
        writeln!(out, "{maze}")?;
        out.flush()?;
    }

    // Trace frames never share stdout with JSON.
    let (report, counted_in) = match config.trace {
        None => search(&mut maze, config, &mut ()),
        Some(trace) if config.json => {
            let stderr = io::stderr();
            let styled = stderr.is_terminal();
            search_drawn(&mut maze, config, trace, stderr, styled)
        }
        Some(trace) => search_drawn(&mut maze, config, trace, &mut *out, styled),
    };
    let elapsed_ms = counted_in.as_secs_f64() * 1000.0;

    if config.json {
        let paths = config
            .list_paths
            .then(|| Backtracker::new().paths(&mut maze, start));
        let output = Output {
            report,
            elapsed_ms: config.timing.then_some(elapsed_ms),
            path_list: paths.as_deref(),
        };
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "Exit reachable: {}",
        if report.reachable { "yes" } else { "no" }
    )?;
    write!(out, "Number of paths: {}", report.paths)?;
    if config.timing {
        write!(out, " in {elapsed_ms:.3} milliseconds")?;
    }
    writeln!(out)?;

    if config.list_paths {
        let mut written = Ok(());
        Backtracker::new().for_each_path(&mut maze, start, |path| {
            if written.is_ok() {
                written = write_path(&mut *out, path);
            }
        });
        written?;
    }
    Ok(())
}

/// Reachability, then the path count. Only the count is timed.
fn search<T: Tracer>(maze: &mut Maze, config: &Config, tracer: &mut T) -> (Report, Duration) {
    let start = config.start;
    let strategy = config.strategy;
    let reachable = strategy.exists_path_traced(maze, start, tracer);
    let started = Instant::now();
    let paths = strategy.count_paths_traced(maze, start, tracer);
    let counted_in = started.elapsed();
    log::info!("{strategy:?} search from {start}: reachable={reachable} paths={paths}");
    let report = Report {
        start,
        strategy,
        reachable,
        paths,
    };
    (report, counted_in)
}

/// [`search`] with every step drawn to `sink`.
fn search_drawn<W: Write>(
    maze: &mut Maze,
    config: &Config,
    trace: TraceConfig,
    sink: W,
    styled: bool,
) -> (Report, Duration) {
    let mut tracer = TerminalTracer::with_writer(sink)
        .with_delay(trace.delay)
        .with_clear(styled)
        .with_color(styled);
    let result = search(maze, config, &mut tracer);
    log::info!("drew {} trace frames", tracer.frames());
    result
}

fn write_path<W: Write + ?Sized>(out: &mut W, path: &[Point]) -> io::Result<()> {
    for (i, p) in path.iter().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        write!(out, "{p}")?;
    }
    writeln!(out)
}
