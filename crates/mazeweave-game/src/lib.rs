//! The maze orchestrator: generation and solving in sequence.
//!
//! [`Maze`] is the single entry point external callers use. Building one
//! runs the whole pipeline — allocate the grid, open the boundary entrance
//! and exit, carve a perfect maze, reset the phase state, and solve — with
//! every step reported to an optional renderer for animation. A maze can be
//! re-solved any number of times afterward.
//!
//! # Examples
//!
//! ```
//! use mazeweave_game::{Maze, MazeParams};
//!
//! let params = MazeParams {
//!     x1: 0.0,
//!     y1: 0.0,
//!     num_rows: 5,
//!     num_cols: 5,
//!     cell_width: 10.0,
//!     cell_height: 10.0,
//!     seed: Some(1),
//! };
//! let maze = Maze::build(params, None)?;
//! assert!(maze.solved());
//! assert_eq!(maze.grid().open_internal_edges(), 24);
//! # Ok::<(), mazeweave_core::InvalidDimensions>(())
//! ```

mod maze;

pub use self::maze::{Maze, MazeParams};
