//! Crossterm trace renderer for labyrinth.
//!
//! Provides a [`TerminalTracer`] that implements [`labyrinth_paths::Tracer`]
//! and redraws the maze after every search step, pausing between frames so
//! the backtracking can be followed by eye.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use labyrinth_core::{Maze, Point, Tile};
use labyrinth_paths::Tracer;

/// Default pause after each frame.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Foreground colour for a tile, or `None` to print it unstyled.
fn tile_color(tile: Tile) -> Option<Color> {
    match tile {
        Tile::Visited => Some(Color::Yellow),
        Tile::Exit => Some(Color::Green),
        Tile::Wall => Some(Color::DarkGrey),
        Tile::Open => None,
    }
}

/// A [`Tracer`] that draws each step of a search to a terminal.
pub struct TerminalTracer<W: Write> {
    out: W,
    delay: Duration,
    clear: bool,
    color: bool,
    frames: u64,
    failed: bool,
}

impl<W: Write> TerminalTracer<W> {
    /// Create a tracer drawing to `out`.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            delay: DEFAULT_DELAY,
            clear: true,
            color: true,
            frames: 0,
            failed: false,
        }
    }

    /// Pause for `delay` after every frame.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Configure whether each frame clears the screen and redraws from the
    /// top-left corner. When off, frames are printed one after another.
    pub fn with_clear(mut self, enabled: bool) -> Self {
        self.clear = enabled;
        self
    }

    /// Configure whether tiles are coloured.
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Consume the tracer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, maze: &Maze, pos: Point) -> io::Result<()> {
        if self.clear {
            queue!(
                self.out,
                cursor::MoveTo(0, 0),
                terminal::Clear(ClearType::All)
            )?;
        }
        for row in maze.rows() {
            for &tile in row {
                match tile_color(tile).filter(|_| self.color) {
                    Some(c) => queue!(
                        self.out,
                        SetForegroundColor(c),
                        Print(tile.to_char()),
                        ResetColor
                    )?,
                    None => queue!(self.out, Print(tile.to_char()))?,
                }
            }
            queue!(self.out, Print("\n"))?;
        }
        queue!(
            self.out,
            Print(format!("step {} at {pos}\n", self.frames + 1))
        )?;
        self.out.flush()
    }
}

impl<W: Write> Tracer for TerminalTracer<W> {
    fn visit(&mut self, maze: &Maze, pos: Point) {
        if self.failed {
            return;
        }
        if let Err(e) = self.draw(maze, pos) {
            log::warn!("trace output failed, disabling: {e}");
            self.failed = true;
            return;
        }
        self.frames += 1;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_paths::Backtracker;

    fn plain() -> TerminalTracer<Vec<u8>> {
        TerminalTracer::with_writer(Vec::new())
            .with_delay(Duration::ZERO)
            .with_clear(false)
            .with_color(false)
    }

    #[test]
    fn draws_one_frame_per_step() {
        let mut m = Maze::from_lines(["#####", "#   #", "###A#"]).unwrap();
        let mut t = plain();
        assert!(Backtracker::new().exists_path_traced(&mut m, Point::new(1, 1), &mut t));
        assert_eq!(t.frames(), 3);

        let text = String::from_utf8(t.into_inner()).unwrap();
        assert!(text.contains("#.  #\n"));
        assert!(text.contains("#.. #\n"));
        assert!(text.contains("#...#\n"));
        assert!(text.contains("step 3 at (3, 1)\n"));
    }

    #[test]
    fn clear_emits_escape_codes() {
        let mut m = Maze::from_lines(["###", "# #", "#A#"]).unwrap();
        let mut t = TerminalTracer::with_writer(Vec::new())
            .with_delay(Duration::ZERO)
            .with_color(false);
        Backtracker::new().count_paths_traced(&mut m, Point::new(1, 1), &mut t);
        let out = t.into_inner();
        assert!(out.starts_with(b"\x1b["));
    }

    #[test]
    fn color_wraps_visited_cells() {
        let mut m = Maze::from_lines(["###", "# #", "#A#"]).unwrap();
        let mut t = plain().with_color(true);
        Backtracker::new().count_paths_traced(&mut m, Point::new(1, 1), &mut t);
        let text = String::from_utf8(t.into_inner()).unwrap();
        assert!(text.contains('.'));
        assert!(text.contains("\x1b["));
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_disables_tracing() {
        let mut m = Maze::from_lines(["#####", "#   #", "###A#"]).unwrap();
        let mut t = TerminalTracer::with_writer(Broken).with_delay(Duration::ZERO);
        assert_eq!(
            Backtracker::new().count_paths_traced(&mut m, Point::new(1, 1), &mut t),
            1
        );
        assert_eq!(t.frames(), 0);
    }
}
