//! Rendering capability consumed by the generation and solving phases.
//!
//! Rendering is a pure side effect: the phases notify a renderer after every
//! mutation and never look at the result, so the algorithms behave
//! identically with [`NoopRender`] or with no renderer attached at all.
//! Pixel geometry lives in [`CellLayout`]; cells themselves are pure state.

use std::fmt;

use crate::{Cell, Grid, GridPos};

/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    /// The top-left corner.
    pub min: Point,
    /// The bottom-right corner.
    pub max: Point,
}

impl BoundingBox {
    /// Creates a bounding box from opposite corners.
    #[must_use]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            f64::midpoint(self.min.x, self.max.x),
            f64::midpoint(self.min.y, self.max.y),
        )
    }
}

/// Pixel layout of a grid: top-left offset and per-cell size.
///
/// # Examples
///
/// ```
/// use mazeweave_core::{CellLayout, GridPos};
///
/// let layout = CellLayout::new(10.0, 10.0, 20.0, 15.0);
/// let bounds = layout.bounds(GridPos::new(2, 1));
/// assert_eq!(bounds.min.x, 50.0);
/// assert_eq!(bounds.min.y, 25.0);
/// assert_eq!(bounds.max.x, 70.0);
/// assert_eq!(bounds.max.y, 40.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellLayout {
    /// X coordinate of the grid's top-left corner.
    pub x1: f64,
    /// Y coordinate of the grid's top-left corner.
    pub y1: f64,
    /// Width of one cell.
    pub cell_width: f64,
    /// Height of one cell.
    pub cell_height: f64,
}

impl CellLayout {
    /// Creates a layout.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, cell_width: f64, cell_height: f64) -> Self {
        Self {
            x1,
            y1,
            cell_width,
            cell_height,
        }
    }

    /// Returns the bounding box of the cell at `pos`.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn bounds(&self, pos: GridPos) -> BoundingBox {
        let min = Point::new(
            self.x1 + pos.col() as f64 * self.cell_width,
            self.y1 + pos.row() as f64 * self.cell_height,
        );
        let max = Point::new(min.x + self.cell_width, min.y + self.cell_height);
        BoundingBox::new(min, max)
    }

    /// Returns the center of the cell at `pos`.
    #[must_use]
    pub fn center(&self, pos: GridPos) -> Point {
        self.bounds(pos).center()
    }
}

/// Drawing capability an animated frontend implements.
///
/// Implementations draw onto whatever surface they own. The core never reads
/// anything back, so a no-op implementation ([`NoopRender`]) runs every phase
/// headless with identical behavior.
pub trait Render {
    /// Draws the walls of `cell` within `bounds`.
    fn draw_cell(&self, cell: &Cell, bounds: BoundingBox);

    /// Draws a move segment between two cell centers.
    ///
    /// Backtrack segments are expected to be drawn distinctly from forward
    /// moves.
    fn draw_move(&self, from: Point, to: Point, is_backtrack: bool);

    /// Requests a redraw of the surface, pacing the animation.
    fn request_redraw(&self);
}

/// A [`Render`] implementation that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRender;

impl Render for NoopRender {
    fn draw_cell(&self, _cell: &Cell, _bounds: BoundingBox) {}

    fn draw_move(&self, _from: Point, _to: Point, _is_backtrack: bool) {}

    fn request_redraw(&self) {}
}

/// A layout plus an optional renderer: what the phases actually notify.
///
/// Every notification is immediately followed by a redraw request, so an
/// attached renderer observes each mutation before the next one happens.
/// With no renderer attached every notification is a strict no-op.
#[derive(Clone, Copy)]
pub struct RenderContext<'r> {
    layout: CellLayout,
    render: Option<&'r dyn Render>,
}

impl<'r> RenderContext<'r> {
    /// Creates a context that notifies `render`.
    #[must_use]
    pub const fn new(layout: CellLayout, render: &'r dyn Render) -> Self {
        Self {
            layout,
            render: Some(render),
        }
    }

    /// Creates a headless context.
    #[must_use]
    pub const fn headless(layout: CellLayout) -> Self {
        Self {
            layout,
            render: None,
        }
    }

    /// Returns the pixel layout.
    #[must_use]
    pub const fn layout(&self) -> CellLayout {
        self.layout
    }

    /// Draws the cell at `pos` and requests a redraw.
    pub fn draw_cell(&self, grid: &Grid, pos: GridPos) {
        if let Some(render) = self.render {
            render.draw_cell(&grid[pos], self.layout.bounds(pos));
            render.request_redraw();
        }
    }

    /// Draws a move (or backtrack) segment between two cells and requests a
    /// redraw.
    pub fn draw_move(&self, from: GridPos, to: GridPos, is_backtrack: bool) {
        if let Some(render) = self.render {
            render.draw_move(
                self.layout.center(from),
                self.layout.center(to),
                is_backtrack,
            );
            render.request_redraw();
        }
    }
}

impl fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("layout", &self.layout)
            .field("render", &self.render.map(|_| "dyn Render"))
            .finish()
    }
}
