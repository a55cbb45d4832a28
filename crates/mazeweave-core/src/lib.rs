//! Core data structures for maze generation and solving.
//!
//! This crate provides the shared data model the generation and solving
//! phases operate on, plus the rendering seam they notify.
//!
//! # Overview
//!
//! - [`cell`]: A single grid cell — wall flags, tried-wall flags, and the
//!   visited flag, kept as compact side sets.
//! - [`direction`]: The four sides of a cell ([`Direction`]) and the grid
//!   axes ([`Axis`]).
//! - [`grid`]: The column-major [`Grid`] of cells, addressed by [`GridPos`].
//!   The grid owns all cells and is the only place wall state is mutated, so
//!   it can keep shared walls mirrored between neighbors.
//! - [`render`]: The [`Render`] capability an animated frontend implements,
//!   and [`RenderContext`], which the phases notify after every mutation.
//!   A headless context makes every notification a no-op.
//! - [`testing`]: A recording renderer and hand-carved fixture grids for
//!   tests in this workspace.
//!
//! # Examples
//!
//! ```
//! use mazeweave_core::{Direction, Grid, GridPos};
//!
//! let mut grid = Grid::new(3, 2)?;
//!
//! // Opening a wall clears both mirrored flags in one operation.
//! grid.open_wall(GridPos::new(0, 0), Direction::Right);
//! assert!(!grid[GridPos::new(0, 0)].has_wall(Direction::Right));
//! assert!(!grid[GridPos::new(1, 0)].has_wall(Direction::Left));
//! # Ok::<(), mazeweave_core::InvalidDimensions>(())
//! ```

pub mod cell;
pub mod direction;
pub mod grid;
pub mod render;
pub mod testing;

pub use self::{
    cell::{Cell, Sides},
    direction::{Axis, Direction},
    grid::{Grid, GridPos, InvalidDimensions},
    render::{BoundingBox, CellLayout, NoopRender, Point, Render, RenderContext},
};
