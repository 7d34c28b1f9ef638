//! Recursive backtracking search.
//!
//! Each call marks its cell, probes the neighbours east, south, west and
//! north, then unmarks the cell again. Recursion depth grows with the
//! number of open cells; see [`Backtracker`](crate::Backtracker) for the
//! stack-based equivalent.

use labyrinth_core::{Maze, Point, Tile};

use crate::traits::Tracer;

/// Whether any exit can be reached from `start` without revisiting a cell.
///
/// The maze is left exactly as it was found.
///
/// # Panics
///
/// Panics if `start` is outside the maze.
pub fn exists_path(maze: &mut Maze, start: Point) -> bool {
    exists_path_traced(maze, start, &mut ())
}

/// [`exists_path`], reporting every step to `tracer`.
pub fn exists_path_traced<T: Tracer>(maze: &mut Maze, start: Point, tracer: &mut T) -> bool {
    check_start(maze, start);
    let found = exists_from(maze, start, tracer);
    log::debug!("recursive exists_path from {start}: {found}");
    found
}

/// Number of distinct simple paths from `start` to any exit.
///
/// A path ends at the first exit it reaches. The maze is left exactly as it
/// was found.
///
/// # Panics
///
/// Panics if `start` is outside the maze.
pub fn count_paths(maze: &mut Maze, start: Point) -> u64 {
    count_paths_traced(maze, start, &mut ())
}

/// [`count_paths`], reporting every step to `tracer`.
pub fn count_paths_traced<T: Tracer>(maze: &mut Maze, start: Point, tracer: &mut T) -> u64 {
    check_start(maze, start);
    let n = count_from(maze, start, tracer);
    log::debug!("recursive count_paths from {start}: {n}");
    n
}

fn exists_from<T: Tracer>(maze: &mut Maze, p: Point, tracer: &mut T) -> bool {
    match maze[p] {
        Tile::Exit => return true,
        Tile::Wall | Tile::Visited => return false,
        Tile::Open => {}
    }
    maze.mark(p);
    tracer.visit(maze, p);
    let hit = p
        .neighbors_4()
        .into_iter()
        .any(|n| exists_from(maze, n, tracer));
    maze.unmark(p);
    hit
}

fn count_from<T: Tracer>(maze: &mut Maze, p: Point, tracer: &mut T) -> u64 {
    match maze[p] {
        Tile::Exit => return 1,
        Tile::Wall | Tile::Visited => return 0,
        Tile::Open => {}
    }
    maze.mark(p);
    tracer.visit(maze, p);
    let hits = p
        .neighbors_4()
        .into_iter()
        .map(|n| count_from(maze, n, tracer))
        .sum();
    maze.unmark(p);
    hits
}

pub(crate) fn check_start(maze: &Maze, start: Point) {
    assert!(
        maze.contains(start),
        "start {start} outside maze of size {}x{}",
        maze.width(),
        maze.height()
    );
}
