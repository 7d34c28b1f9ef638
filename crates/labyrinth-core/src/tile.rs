//! The [`Tile`] type: the state of a single maze cell.

use std::fmt;

/// State of one maze cell.
///
/// `Visited` only exists while a search is running: it marks the cells on
/// the active path and is restored to `Open` when the search backs out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Wall,
    #[default]
    Open,
    Visited,
    Exit,
}

impl Tile {
    pub const WALL_CHAR: char = '#';
    pub const OPEN_CHAR: char = ' ';
    pub const VISITED_CHAR: char = '.';
    pub const EXIT_CHAR: char = 'A';

    /// Parse a map character. `Visited` is never produced: a `.` in the
    /// input is rejected like any other unknown character.
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            Self::WALL_CHAR => Some(Tile::Wall),
            Self::OPEN_CHAR => Some(Tile::Open),
            Self::EXIT_CHAR => Some(Tile::Exit),
            _ => None,
        }
    }

    /// The character used when rendering the tile.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Tile::Wall => Self::WALL_CHAR,
            Tile::Open => Self::OPEN_CHAR,
            Tile::Visited => Self::VISITED_CHAR,
            Tile::Exit => Self::EXIT_CHAR,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_map_both_ways() {
        for tile in [Tile::Wall, Tile::Open, Tile::Exit] {
            assert_eq!(Tile::from_char(tile.to_char()), Some(tile));
        }
        assert_eq!(Tile::Visited.to_char(), '.');
    }

    #[test]
    fn visited_marker_is_not_parsed() {
        assert_eq!(Tile::from_char('.'), None);
        assert_eq!(Tile::from_char('x'), None);
    }
}
