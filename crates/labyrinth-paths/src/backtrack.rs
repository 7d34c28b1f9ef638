//! Stack-based backtracking search.

use std::ops::ControlFlow;

use labyrinth_core::{Direction, Maze, Point, Tile};

use crate::recursive::check_start;
use crate::traits::Tracer;

/// One entry of the explicit search stack: a cell on the active path and
/// the index into [`Direction::ORDER`] of the next neighbour to probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame {
    pub(crate) pos: Point,
    pub(crate) next: u8,
}

impl Frame {
    #[inline]
    fn new(pos: Point) -> Self {
        Self { pos, next: 0 }
    }
}

/// Iterative counterpart of the [`recursive`](crate::recursive) search.
///
/// Produces the same results in the same exploration order (east, south,
/// west, north) with the same mark/unmark discipline, but keeps the active
/// path on a heap-allocated stack instead of the call stack, so search depth
/// is not limited by thread stack size.
///
/// The stack is kept between queries; repeated searches on mazes of similar
/// size do not reallocate.
#[derive(Debug, Default)]
pub struct Backtracker {
    stack: Vec<Frame>,
}

impl Backtracker {
    /// Create a new `Backtracker`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any exit can be reached from `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is outside the maze.
    pub fn exists_path(&mut self, maze: &mut Maze, start: Point) -> bool {
        self.exists_path_traced(maze, start, &mut ())
    }

    /// [`exists_path`](Self::exists_path), reporting every step to `tracer`.
    pub fn exists_path_traced<T: Tracer>(
        &mut self,
        maze: &mut Maze,
        start: Point,
        tracer: &mut T,
    ) -> bool {
        let found = self.walk(maze, start, tracer, |_, _| ControlFlow::Break(())) > 0;
        log::debug!("iterative exists_path from {start}: {found}");
        found
    }

    /// Number of distinct simple paths from `start` to any exit.
    ///
    /// # Panics
    ///
    /// Panics if `start` is outside the maze.
    pub fn count_paths(&mut self, maze: &mut Maze, start: Point) -> u64 {
        self.count_paths_traced(maze, start, &mut ())
    }

    /// [`count_paths`](Self::count_paths), reporting every step to `tracer`.
    pub fn count_paths_traced<T: Tracer>(
        &mut self,
        maze: &mut Maze,
        start: Point,
        tracer: &mut T,
    ) -> u64 {
        let n = self.walk(maze, start, tracer, |_, _| ControlFlow::Continue(()));
        log::debug!("iterative count_paths from {start}: {n}");
        n
    }

    /// Call `f` with every simple path from `start` to an exit, in discovery
    /// order. Each path starts with `start` and ends with the exit reached.
    ///
    /// Returns the number of paths.
    pub fn for_each_path<F>(&mut self, maze: &mut Maze, start: Point, mut f: F) -> u64
    where
        F: FnMut(&[Point]),
    {
        let mut path = Vec::new();
        self.walk(maze, start, &mut (), |frames, exit| {
            path.clear();
            path.extend(frames.iter().map(|fr| fr.pos));
            path.push(exit);
            f(&path);
            ControlFlow::Continue(())
        })
    }

    /// Collect every simple path from `start` to an exit.
    pub fn paths(&mut self, maze: &mut Maze, start: Point) -> Vec<Vec<Point>> {
        let mut all = Vec::new();
        self.for_each_path(maze, start, |p| all.push(p.to_vec()));
        all
    }

    /// Depth-first walk shared by every query. `on_exit` receives the active
    /// path and the exit just reached; breaking stops the walk early and
    /// restores the maze. Returns the number of exits reached.
    fn walk<T, F>(&mut self, maze: &mut Maze, start: Point, tracer: &mut T, mut on_exit: F) -> u64
    where
        T: Tracer,
        F: FnMut(&[Frame], Point) -> ControlFlow<()>,
    {
        check_start(maze, start);
        self.stack.clear();

        match maze[start] {
            Tile::Exit => {
                let _ = on_exit(&[], start);
                return 1;
            }
            Tile::Wall | Tile::Visited => return 0,
            Tile::Open => {}
        }
        maze.mark(start);
        tracer.visit(maze, start);
        self.stack.push(Frame::new(start));

        let mut reached = 0;
        while let Some(top) = self.stack.last_mut() {
            let Some(&dir) = Direction::ORDER.get(top.next as usize) else {
                maze.unmark(top.pos);
                self.stack.pop();
                continue;
            };
            top.next += 1;
            let n = top.pos.step(dir);

            match maze[n] {
                Tile::Exit => {
                    reached += 1;
                    if on_exit(&self.stack, n).is_break() {
                        self.unwind(maze);
                        break;
                    }
                }
                Tile::Wall | Tile::Visited => {}
                Tile::Open => {
                    maze.mark(n);
                    tracer.visit(maze, n);
                    self.stack.push(Frame::new(n));
                    log::trace!("push {n} at depth {}", self.stack.len());
                }
            }
        }
        reached
    }

    /// Pop every remaining frame, restoring its cell to open.
    fn unwind(&mut self, maze: &mut Maze) {
        for frame in self.stack.drain(..).rev() {
            maze.unmark(frame.pos);
        }
    }
}
