//! Randomized maze generation.
//!
//! [`MazeGenerator`] carves a perfect maze into a fresh grid by randomized
//! depth-first wall removal: starting from the top-left cell it repeatedly
//! picks an unvisited neighbor uniformly at random, knocks down the shared
//! wall, and descends; dead ends unwind to the most recent cell that still
//! has unvisited neighbors. The result is a spanning tree over the cells —
//! exactly one simple path between any two of them.
//!
//! Generation is fully deterministic for a given seed, and the effective
//! seed is always carried on the result ([`GeneratedMaze::seed`]) so any
//! maze can be reproduced.
//!
//! # Examples
//!
//! ```
//! use mazeweave_core::{CellLayout, RenderContext};
//! use mazeweave_generator::MazeGenerator;
//!
//! let ctx = RenderContext::headless(CellLayout::default());
//! let maze = MazeGenerator::with_seed(42).generate(5, 5, &ctx)?;
//!
//! // A perfect 5x5 maze has exactly 24 internal walls opened.
//! assert_eq!(maze.grid.open_internal_edges(), 24);
//! # Ok::<(), mazeweave_core::InvalidDimensions>(())
//! ```

mod generator;

pub use self::generator::{GeneratedMaze, MazeGenerator};
