//! One-shot search: reachability and path count in a single [`Report`].

use labyrinth_core::{Maze, Point};

use crate::backtrack::Backtracker;
use crate::recursive;
use crate::traits::Tracer;

/// Which traversal implementation to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Call-stack recursion.
    Recursive,
    /// Explicit frame stack ([`Backtracker`]).
    #[default]
    Iterative,
}

impl Strategy {
    /// Whether any exit can be reached from `start`, searched with this
    /// strategy.
    pub fn exists_path_traced<T: Tracer>(
        self,
        maze: &mut Maze,
        start: Point,
        tracer: &mut T,
    ) -> bool {
        match self {
            Strategy::Recursive => recursive::exists_path_traced(maze, start, tracer),
            Strategy::Iterative => Backtracker::new().exists_path_traced(maze, start, tracer),
        }
    }

    /// Number of simple paths from `start` to any exit, counted with this
    /// strategy.
    pub fn count_paths_traced<T: Tracer>(
        self,
        maze: &mut Maze,
        start: Point,
        tracer: &mut T,
    ) -> u64 {
        match self {
            Strategy::Recursive => recursive::count_paths_traced(maze, start, tracer),
            Strategy::Iterative => Backtracker::new().count_paths_traced(maze, start, tracer),
        }
    }
}

/// Result of [`solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub start: Point,
    pub strategy: Strategy,
    pub reachable: bool,
    pub paths: u64,
}

/// Run both queries from `start`: first reachability, then the path count.
///
/// # Panics
///
/// Panics if `start` is outside the maze.
pub fn solve(maze: &mut Maze, start: Point, strategy: Strategy) -> Report {
    solve_traced(maze, start, strategy, &mut ())
}

/// [`solve`], reporting every step of both searches to `tracer`.
pub fn solve_traced<T: Tracer>(
    maze: &mut Maze,
    start: Point,
    strategy: Strategy,
    tracer: &mut T,
) -> Report {
    let reachable = strategy.exists_path_traced(maze, start, tracer);
    let paths = strategy.count_paths_traced(maze, start, tracer);
    debug_assert_eq!(reachable, paths > 0);
    log::info!("{strategy:?} search from {start}: reachable={reachable} paths={paths}");
    Report {
        start,
        strategy,
        reachable,
        paths,
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn report_json_shape() {
        let r = Report {
            start: Point::new(1, 2),
            strategy: Strategy::Recursive,
            reachable: true,
            paths: 7,
        };
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["start"]["x"], 1);
        assert_eq!(json["start"]["y"], 2);
        assert_eq!(json["strategy"], "recursive");
        assert_eq!(json["reachable"], true);
        assert_eq!(json["paths"], 7);

        let back: Report = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }
}
