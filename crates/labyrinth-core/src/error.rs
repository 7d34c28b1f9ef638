use std::io;
use std::path::PathBuf;

use crate::geom::Point;

/// Errors that can occur while building a [`Maze`](crate::Maze).
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    /// The input has no rows.
    #[error("maze is empty")]
    Empty,
    /// Rows have inconsistent widths.
    #[error("maze row {row} has {found} cells, expected {expected}")]
    InconsistentRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than wall, open or exit was found.
    #[error("maze contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    /// A border cell is passable, so a search could walk off the grid.
    #[error("maze border is open at {pos}; the outer ring must be walls or exits")]
    OpenPerimeter { pos: Point },
    /// The maze file could not be read.
    #[error("cannot read maze file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// No built-in map with this index.
    #[error("no built-in map {index} (available: 0..{available})")]
    UnknownMap { index: usize, available: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_position() {
        let e = MazeError::InvalidChar {
            ch: 'x',
            pos: Point::new(3, 1),
        };
        assert_eq!(
            e.to_string(),
            "maze contains invalid character \u{201c}x\u{201d} at (3, 1)"
        );

        let e = MazeError::InconsistentRow {
            row: 2,
            expected: 5,
            found: 4,
        };
        assert_eq!(e.to_string(), "maze row 2 has 4 cells, expected 5");
    }

    #[test]
    fn io_error_keeps_source() {
        let e = MazeError::Io {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(e.to_string(), "cannot read maze file missing.txt");
        assert!(std::error::Error::source(&e).is_some());
    }
}
