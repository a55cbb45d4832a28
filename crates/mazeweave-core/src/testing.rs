//! Test utilities: a recording renderer and hand-carved fixture grids.
//!
//! These are used by the tests across the workspace to observe renderer
//! notifications and to exercise the solver against grids with known shape,
//! without involving the randomized generator.

#![allow(clippy::missing_panics_doc)]

use std::cell::RefCell;

use crate::{BoundingBox, Cell, Direction, Grid, GridPos, Point, Render};

/// One recorded renderer call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderEvent {
    /// A `draw_cell` call, with the cell's bounding box.
    Cell(BoundingBox),
    /// A `draw_move` call.
    Move {
        /// Segment start, a cell center.
        from: Point,
        /// Segment end, a cell center.
        to: Point,
        /// Whether this was a backtrack segment.
        backtrack: bool,
    },
    /// A `request_redraw` call.
    Redraw,
}

/// A [`Render`] double that records every call, for asserting on
/// notification content and ordering.
///
/// # Examples
///
/// ```
/// use mazeweave_core::{CellLayout, Grid, GridPos, RenderContext, testing::RecordingRender};
///
/// let grid = Grid::new(2, 2)?;
/// let render = RecordingRender::new();
/// let ctx = RenderContext::new(CellLayout::default(), &render);
/// ctx.draw_cell(&grid, GridPos::ORIGIN);
/// assert_eq!(render.events().len(), 2); // the draw and its redraw
/// # Ok::<(), mazeweave_core::InvalidDimensions>(())
/// ```
#[derive(Debug, Default)]
pub struct RecordingRender {
    events: RefCell<Vec<RenderEvent>>,
}

impl RecordingRender {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.borrow().clone()
    }

    /// Returns the recorded move segments, in order.
    #[must_use]
    pub fn moves(&self) -> Vec<(Point, Point, bool)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match *event {
                RenderEvent::Move {
                    from,
                    to,
                    backtrack,
                } => Some((from, to, backtrack)),
                RenderEvent::Cell(_) | RenderEvent::Redraw => None,
            })
            .collect()
    }
}

impl Render for RecordingRender {
    fn draw_cell(&self, _cell: &Cell, bounds: BoundingBox) {
        self.events.borrow_mut().push(RenderEvent::Cell(bounds));
    }

    fn draw_move(&self, from: Point, to: Point, is_backtrack: bool) {
        self.events.borrow_mut().push(RenderEvent::Move {
            from,
            to,
            backtrack: is_backtrack,
        });
    }

    fn request_redraw(&self) {
        self.events.borrow_mut().push(RenderEvent::Redraw);
    }
}

/// A 2×2 grid with only the boundary entrance and exit opened.
///
/// All four cells are mutually unreachable, so solving must fail with a
/// defined error rather than loop or step off the grid.
#[must_use]
pub fn sealed_grid_2x2() -> Grid {
    let mut grid = Grid::new(2, 2).expect("valid dimensions");
    grid.open_entrance_and_exit();
    grid
}

/// A hand-carved 2×2 perfect maze whose first-priority branch reaches the
/// exit directly.
///
/// Open internal edges: `(0,0)-(1,0)`, `(1,0)-(1,1)`, `(0,0)-(0,1)`. The
/// solver's right-first policy walks right then bottom without backtracking.
#[must_use]
pub fn carved_grid_2x2() -> Grid {
    let mut grid = Grid::new(2, 2).expect("valid dimensions");
    grid.open_entrance_and_exit();
    grid.open_wall(GridPos::ORIGIN, Direction::Right);
    grid.open_wall(GridPos::new(1, 0), Direction::Bottom);
    grid.open_wall(GridPos::ORIGIN, Direction::Bottom);
    grid
}

/// A hand-carved 2×2 perfect maze whose first-priority branch is a dead end.
///
/// Open internal edges: `(0,0)-(1,0)`, `(0,0)-(0,1)`, `(0,1)-(1,1)`. The
/// solver walks right into the dead end at `(1,0)`, backtracks through the
/// start cell (emptying its undo stack), and must then continue through the
/// start's remaining open side rather than give up.
#[must_use]
pub fn detour_grid_2x2() -> Grid {
    let mut grid = Grid::new(2, 2).expect("valid dimensions");
    grid.open_entrance_and_exit();
    grid.open_wall(GridPos::ORIGIN, Direction::Right);
    grid.open_wall(GridPos::ORIGIN, Direction::Bottom);
    grid.open_wall(GridPos::new(0, 1), Direction::Right);
    grid
}

/// A serpentine perfect maze: one corridor snaking through every cell.
///
/// Row 0 runs left to right, row 1 right to left, and so on, with the rows
/// joined at alternating ends. Useful for deterministic solver tests and
/// benches: the path is a single long corridor with no branching.
///
/// # Panics
///
/// Panics if either dimension is zero.
#[must_use]
pub fn serpentine_grid(num_cols: usize, num_rows: usize) -> Grid {
    let mut grid = Grid::new(num_cols, num_rows).expect("valid dimensions");
    grid.open_entrance_and_exit();
    for row in 0..num_rows {
        for col in 0..num_cols - 1 {
            grid.open_wall(GridPos::new(col, row), Direction::Right);
        }
        if row + 1 < num_rows {
            let turn = if row % 2 == 0 { num_cols - 1 } else { 0 };
            grid.open_wall(GridPos::new(turn, row), Direction::Bottom);
        }
    }
    grid
}
