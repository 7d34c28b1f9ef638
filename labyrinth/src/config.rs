//! Command-line arguments and the run configuration built from them.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use labyrinth_core::{Maze, MazeError, Point, builtin};
use labyrinth_paths::Strategy;

#[derive(Debug, Parser)]
#[command(name = "labyrinth", version, about = "Calculate the number of ways through a labyrinth")]
pub struct Args {
    /// File containing the labyrinth to solve
    #[arg(required_unless_present = "map", conflicts_with = "map")]
    pub file: Option<PathBuf>,

    /// Solve a built-in labyrinth instead of a file
    #[arg(short, long, value_name = "INDEX")]
    pub map: Option<usize>,

    /// Column to start from
    #[arg(short = 'x', long = "xstart", default_value_t = 1, allow_negative_numbers = true)]
    pub xstart: i32,

    /// Row to start from
    #[arg(short = 'y', long = "ystart", default_value_t = 1, allow_negative_numbers = true)]
    pub ystart: i32,

    /// Traversal implementation
    #[arg(long, value_enum, default_value_t = StrategyArg::Iterative)]
    pub strategy: StrategyArg,

    /// Print the labyrinth after every step
    #[arg(short, long)]
    pub print: bool,

    /// Delay after printing a step (in milliseconds)
    #[arg(short, long, default_value_t = 500, value_name = "MS")]
    pub delay: u64,

    /// Print total calculation time (in milliseconds)
    #[arg(short, long)]
    pub time: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// List every path found
    #[arg(long)]
    pub paths: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Recursive,
    Iterative,
}

impl From<StrategyArg> for Strategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Recursive => Strategy::Recursive,
            StrategyArg::Iterative => Strategy::Iterative,
        }
    }
}

/// Where the maze comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeSource {
    File(PathBuf),
    Builtin(usize),
}

impl MazeSource {
    pub fn load(&self) -> Result<Maze, MazeError> {
        match self {
            MazeSource::File(path) => Maze::load(path),
            MazeSource::Builtin(index) => builtin::map(*index),
        }
    }
}

impl fmt::Display for MazeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeSource::File(path) => write!(f, "{}", path.display()),
            MazeSource::Builtin(index) => write!(f, "built-in map {index}"),
        }
    }
}

/// Step-by-step printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceConfig {
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: MazeSource,
    pub start: Point,
    pub strategy: Strategy,
    pub trace: Option<TraceConfig>,
    pub timing: bool,
    pub json: bool,
    pub list_paths: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        // clap guarantees exactly one of the two is present.
        let source = match (args.file, args.map) {
            (Some(path), _) => MazeSource::File(path),
            (None, index) => MazeSource::Builtin(index.unwrap_or_default()),
        };
        Self {
            source,
            start: Point::new(args.xstart, args.ystart),
            strategy: args.strategy.into(),
            trace: args.print.then(|| TraceConfig {
                delay: Duration::from_millis(args.delay),
            }),
            timing: args.time,
            json: args.json,
            list_paths: args.paths,
        }
    }
}
