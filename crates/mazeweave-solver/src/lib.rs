//! Exhaustive depth-first maze solving.
//!
//! [`MazeSolver`] searches a carved grid for a path from the top-left cell
//! to the bottom-right cell. The search is a depth-first traversal driven by
//! an explicit loop and an undo stack of single-axis displacement records
//! rather than language recursion, so it can be paused between animation
//! frames and terminates with a defined [`Unsolvable`] error on a grid whose
//! entrance and exit are disconnected.
//!
//! Per cell the solver keeps four tried-wall flags: a side counts as tried
//! once the solver has crossed it or found it blocked. Blocked sides (wall
//! present, or no cell behind the side at the grid boundary) are exhausted
//! up front; among the remaining open sides the solver always takes the
//! first in the fixed right, bottom, left, top order.
//!
//! # Examples
//!
//! ```
//! use mazeweave_core::{CellLayout, RenderContext, testing};
//! use mazeweave_solver::MazeSolver;
//!
//! let mut grid = testing::carved_grid_2x2();
//! let ctx = RenderContext::headless(CellLayout::default());
//! let path = MazeSolver::new().solve(&mut grid, &ctx)?;
//! assert_eq!(path.len(), 2); // right, then bottom
//! # Ok::<(), mazeweave_solver::Unsolvable>(())
//! ```

mod solver;

pub use self::solver::{MazeSolver, Move, Unsolvable};
