//! Exhaustive backtracking path search over [`labyrinth_core::Maze`]s.
//!
//! Two questions are answered from a start cell:
//!
//! - **exists**: can any exit be reached without revisiting a cell?
//! - **count**: how many distinct simple paths lead to an exit?
//!
//! Both walk the maze depth-first, probing neighbours east, south, west,
//! north. A cell is marked [`Visited`](labyrinth_core::Tile::Visited) while
//! it is on the active path and restored to open when the search backs out,
//! so the maze is unchanged once a query returns. Queries take the maze by
//! `&mut`, which rules out two searches sharing one maze at a time.
//!
//! | Entry point | Depth limit |
//! |---|---|
//! | [`recursive::exists_path`], [`recursive::count_paths`] | thread stack |
//! | [`Backtracker`] | heap |

mod backtrack;
pub mod recursive;
mod solve;
mod traits;

pub use backtrack::Backtracker;
pub use recursive::{count_paths, exists_path};
pub use solve::{Report, Strategy, solve, solve_traced};
pub use traits::{StepCount, Tracer};
