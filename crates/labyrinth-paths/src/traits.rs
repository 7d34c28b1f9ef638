use labyrinth_core::{Maze, Point};

/// Observer of a running search.
///
/// `visit` is called each time a cell is put on the active path, after it
/// has been marked, so `maze` shows the whole path explored so far.
pub trait Tracer {
    fn visit(&mut self, maze: &Maze, pos: Point);
}

/// The no-op tracer.
impl Tracer for () {
    #[inline]
    fn visit(&mut self, _maze: &Maze, _pos: Point) {}
}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    #[inline]
    fn visit(&mut self, maze: &Maze, pos: Point) {
        (**self).visit(maze, pos);
    }
}

/// Counts the cells a search steps onto.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCount(pub u64);

impl Tracer for StepCount {
    #[inline]
    fn visit(&mut self, _maze: &Maze, _pos: Point) {
        self.0 += 1;
    }
}
