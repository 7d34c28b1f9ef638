//! **labyrinth-core**: maze grid types.
//!
//! This crate provides the types shared across the *labyrinth* workspace:
//! geometry primitives, the [`Tile`] cell state, the validated [`Maze`]
//! grid with its text format, and the predefined [`builtin`] mazes.
//!
//! # Text format
//!
//! One row per line. `#` is a wall, a space is open floor and `A` is an
//! exit. All rows must have the same width and the outer ring may only
//! hold walls and exits.

pub mod builtin;
pub mod error;
pub mod geom;
pub mod maze;
pub mod tile;

pub use error::MazeError;
pub use geom::{Direction, Point, Range};
pub use maze::Maze;
pub use tile::Tile;
