//! The [`Maze`] type: a validated 2D grid of [`Tile`]s.
//!
//! A maze is built from text, one row per line, and is checked on
//! construction: rows must have equal widths, only wall, open and exit
//! characters are allowed, and the outer ring must be walls or exits. A
//! search that never expands an exit can therefore never leave the grid.

use std::fmt;
use std::fs;
use std::ops::Index;
use std::path::Path;
use std::str::FromStr;

use crate::error::MazeError;
use crate::geom::{Point, Range};
use crate::tile::Tile;

/// A rectangular maze owning its tiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Maze {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
}

impl Maze {
    /// Build a maze from its rows.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, MazeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tiles = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;

        for (y, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let mut found = 0usize;
            for (x, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or(MazeError::InvalidChar {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                tiles.push(tile);
                found += 1;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(MazeError::InconsistentRow {
                        row: y,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(MazeError::Empty);
        }

        let maze = Self {
            tiles,
            width: width as i32,
            height: height as i32,
        };
        maze.check_perimeter()?;
        if maze.count(Tile::Exit) == 0 {
            log::warn!("maze {}x{} has no exit", maze.width, maze.height);
        }
        Ok(maze)
    }

    /// Read a maze from a text file, one row per line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded maze file {}", path.display());
        text.parse()
    }

    fn check_perimeter(&self) -> Result<(), MazeError> {
        let bounds = self.bounds();
        for p in bounds.iter().filter(|&p| bounds.on_border(p)) {
            if !matches!(self[p], Tile::Wall | Tile::Exit) {
                return Err(MazeError::OpenPerimeter { pos: p });
            }
        }
        Ok(())
    }

    /// The bounding range of the maze, starting at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Size as a `Point` (columns, rows).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` is inside the maze.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn offset(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Get the tile at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.contains(p) {
            return None;
        }
        Some(self.tiles[self.offset(p)])
    }

    /// Get the tile at `(row, col)`, or `None` if out of bounds.
    pub fn at_row_col(&self, row: i32, col: i32) -> Option<Tile> {
        self.at(Point::from_row_col(row, col))
    }

    /// Put an open cell on the active search path.
    ///
    /// Only `Open` cells may be marked; the outer ring never holds one, so
    /// marking cannot break the border invariant.
    #[inline]
    pub fn mark(&mut self, p: Point) {
        let i = self.offset(p);
        debug_assert_eq!(self.tiles[i], Tile::Open, "mark on non-open cell {p}");
        self.tiles[i] = Tile::Visited;
    }

    /// Take a cell off the active search path.
    #[inline]
    pub fn unmark(&mut self, p: Point) {
        let i = self.offset(p);
        debug_assert_eq!(self.tiles[i], Tile::Visited, "unmark on unvisited cell {p}");
        self.tiles[i] = Tile::Open;
    }

    /// Count how many tiles equal `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Positions of every exit, in row-major order.
    pub fn exits(&self) -> Vec<Point> {
        self.iter()
            .filter(|&(_, t)| t == Tile::Exit)
            .map(|(p, _)| p)
            .collect()
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds().iter().map(|p| (p, self[p]))
    }

    /// The rows of the maze as slices of tiles.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.tiles.chunks(self.width as usize)
    }
}

impl Index<Point> for Maze {
    type Output = Tile;

    /// Panics if `p` is outside the maze.
    fn index(&self, p: Point) -> &Tile {
        assert!(
            self.contains(p),
            "point {p} outside maze of size {}x{}",
            self.width,
            self.height
        );
        &self.tiles[self.offset(p)]
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Parse a maze from text. `\n` and `\r\n` line endings are accepted;
    /// trailing blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, MazeError> {
        let mut lines: Vec<&str> = s.lines().collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Self::from_lines(lines)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
#####
#   #
#   #
###A#";

    #[test]
    fn parse_and_size() {
        let m: Maze = ROOM.parse().unwrap();
        assert_eq!(m.size(), Point::new(5, 4));
        assert_eq!(m.at(Point::new(0, 0)), Some(Tile::Wall));
        assert_eq!(m.at(Point::new(1, 1)), Some(Tile::Open));
        assert_eq!(m.at_row_col(3, 3), Some(Tile::Exit));
        assert_eq!(m.at(Point::new(5, 0)), None);
        assert_eq!(m.at(Point::new(-1, 0)), None);
    }

    #[test]
    fn display_round_trips_text() {
        let m: Maze = ROOM.parse().unwrap();
        assert_eq!(m.to_string(), ROOM);
    }

    #[test]
    fn crlf_and_trailing_blank_lines() {
        let m: Maze = "###\r\n#A#\r\n###\r\n\r\n".parse().unwrap();
        assert_eq!(m.size(), Point::new(3, 3));
        assert_eq!(m.exits(), vec![Point::new(1, 1)]);
    }

    #[test]
    fn from_lines_accepts_literals() {
        let m = Maze::from_lines(["###", "#A#", "###"]).unwrap();
        assert_eq!(m.count(Tile::Wall), 8);
        assert_eq!(m.count(Tile::Exit), 1);
    }

    #[test]
    fn empty_input() {
        assert!(matches!("".parse::<Maze>(), Err(MazeError::Empty)));
        assert!(matches!(Maze::from_lines(Vec::<&str>::new()), Err(MazeError::Empty)));
    }

    #[test]
    fn inconsistent_rows() {
        let err = Maze::from_lines(["####", "# #", "####"]).unwrap_err();
        assert!(matches!(
            err,
            MazeError::InconsistentRow {
                row: 1,
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn invalid_char() {
        let err = Maze::from_lines(["###", "#.#", "###"]).unwrap_err();
        match err {
            MazeError::InvalidChar { ch, pos } => {
                assert_eq!(ch, '.');
                assert_eq!(pos, Point::new(1, 1));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn open_border_rejected() {
        let err = Maze::from_lines(["#####", "#    ", "#####"]).unwrap_err();
        assert!(matches!(
            err,
            MazeError::OpenPerimeter {
                pos: Point { x: 4, y: 1 }
            }
        ));

        let err = Maze::from_lines(["## ##", "#   #", "#####"]).unwrap_err();
        assert!(matches!(
            err,
            MazeError::OpenPerimeter {
                pos: Point { x: 2, y: 0 }
            }
        ));
    }

    #[test]
    fn exits_on_border_allowed() {
        let m = Maze::from_lines(["##A##", "#   #", "###A#"]).unwrap();
        assert_eq!(m.exits(), vec![Point::new(2, 0), Point::new(3, 2)]);
    }

    #[test]
    fn missing_exit_is_not_an_error() {
        let m = Maze::from_lines(["###", "# #", "###"]).unwrap();
        assert!(m.exits().is_empty());
    }

    #[test]
    fn mark_and_unmark() {
        let mut m: Maze = ROOM.parse().unwrap();
        let before = m.clone();
        let p = Point::new(2, 1);
        m.mark(p);
        assert_eq!(m[p], Tile::Visited);
        assert!(m.to_string().contains('.'));
        m.unmark(p);
        assert_eq!(m, before);
    }

    #[test]
    #[should_panic(expected = "outside maze")]
    fn index_out_of_bounds_panics() {
        let m: Maze = ROOM.parse().unwrap();
        let _ = m[Point::new(9, 9)];
    }

    #[test]
    fn load_missing_file() {
        let err = Maze::load("/nonexistent/labyrinth/maze.txt").unwrap_err();
        assert!(matches!(err, MazeError::Io { .. }));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("labyrinth-core-{}.txt", std::process::id()));
        fs::write(&path, format!("{ROOM}\n")).unwrap();
        let m = Maze::load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(m.to_string(), ROOM);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_serializes_tiles() {
        let m = Maze::from_lines(["###", "#A#", "###"]).unwrap();
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["width"], 3);
        assert_eq!(json["height"], 3);
        assert_eq!(json["tiles"][4], "Exit");
    }
}
