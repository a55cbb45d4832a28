//! The maze grid: a rectangular, column-major array of cells.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

use crate::{Cell, Direction};

/// A position on the grid, addressed by `(col, row)`.
///
/// Column 0 is the leftmost column, row 0 the topmost row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridPos {
    col: usize,
    row: usize,
}

impl GridPos {
    /// The top-left cell, `(0, 0)`.
    pub const ORIGIN: Self = Self { col: 0, row: 0 };

    /// Creates a position from column and row indices.
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }
}

impl Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Error: a grid was requested with a zero dimension.
///
/// Construction is the only fallible operation on a grid; there is nothing
/// to recover, the caller's dimensions are simply wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid grid dimensions {num_cols}x{num_rows}: both must be at least 1")]
pub struct InvalidDimensions {
    /// The requested column count.
    pub num_cols: usize,
    /// The requested row count.
    pub num_rows: usize,
}

/// A rectangular grid of [`Cell`]s.
///
/// The grid exclusively owns its cells, allocated once at construction and
/// never resized. Walls shared between adjacent cells are mirrored state:
/// [`Grid::open_wall`] is the only wall mutation primitive, and it clears
/// both mirrored flags in one operation, so for every adjacent pair the
/// shared wall flags always agree.
///
/// # Examples
///
/// ```
/// use mazeweave_core::{Direction, Grid, GridPos};
///
/// let mut grid = Grid::new(2, 2)?;
/// grid.open_entrance_and_exit();
/// assert!(!grid[GridPos::ORIGIN].has_wall(Direction::Top));
/// assert!(!grid[grid.exit()].has_wall(Direction::Bottom));
/// # Ok::<(), mazeweave_core::InvalidDimensions>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    num_cols: usize,
    num_rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a `num_cols × num_rows` grid of fully walled cells.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimensions`] if either dimension is zero.
    pub fn new(num_cols: usize, num_rows: usize) -> Result<Self, InvalidDimensions> {
        if num_cols == 0 || num_rows == 0 {
            return Err(InvalidDimensions { num_cols, num_rows });
        }
        Ok(Self {
            num_cols,
            num_rows,
            cells: vec![Cell::new(); num_cols * num_rows],
        })
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the bottom-right cell, the solving target.
    #[must_use]
    pub const fn exit(&self) -> GridPos {
        GridPos::new(self.num_cols - 1, self.num_rows - 1)
    }

    fn index_of(&self, pos: GridPos) -> usize {
        assert!(
            pos.col < self.num_cols && pos.row < self.num_rows,
            "position {pos} out of bounds for {}x{} grid",
            self.num_cols,
            self.num_rows,
        );
        pos.col * self.num_rows + pos.row
    }

    /// Returns the neighbor of `pos` in `dir`, or `None` at the boundary.
    #[must_use]
    pub fn neighbor(&self, pos: GridPos, dir: Direction) -> Option<GridPos> {
        match dir {
            Direction::Top => (pos.row > 0).then(|| GridPos::new(pos.col, pos.row - 1)),
            Direction::Left => (pos.col > 0).then(|| GridPos::new(pos.col - 1, pos.row)),
            Direction::Right => {
                (pos.col + 1 < self.num_cols).then(|| GridPos::new(pos.col + 1, pos.row))
            }
            Direction::Bottom => {
                (pos.row + 1 < self.num_rows).then(|| GridPos::new(pos.col, pos.row + 1))
            }
        }
    }

    /// Opens the wall on `dir` of the cell at `pos`.
    ///
    /// If a neighbor exists across that wall, its mirrored flag is cleared in
    /// the same operation, preserving the shared-wall invariant. Boundary
    /// sides have no mirror and only the one flag is cleared.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn open_wall(&mut self, pos: GridPos, dir: Direction) {
        self[pos].remove_wall(dir);
        if let Some(next) = self.neighbor(pos, dir) {
            self[next].remove_wall(dir.opposite());
        }
    }

    /// Opens the boundary entrance and exit.
    ///
    /// The entrance is the top wall of the origin cell, the exit the bottom
    /// wall of the bottom-right cell. Both are boundary walls, so no
    /// mirroring is involved. Every maze has these openings regardless of
    /// how the interior is carved.
    pub fn open_entrance_and_exit(&mut self) {
        let exit = self.exit();
        self.open_wall(GridPos::ORIGIN, Direction::Top);
        self.open_wall(exit, Direction::Bottom);
    }

    /// Clears the visited flag on every cell.
    ///
    /// The generator's visited semantics do not carry over to solving, so
    /// this runs between the two phases.
    pub fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            cell.set_visited(false);
        }
    }

    /// Clears the tried-wall flags on every cell, making the grid ready for
    /// a fresh solve.
    pub fn reset_tried(&mut self) {
        for cell in &mut self.cells {
            cell.reset_tried();
        }
    }

    /// Returns an iterator over all positions in column-major order.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + use<> {
        let (num_cols, num_rows) = (self.num_cols, self.num_rows);
        (0..num_cols).flat_map(move |col| (0..num_rows).map(move |row| GridPos::new(col, row)))
    }

    /// Counts the open internal walls, each shared edge counted once.
    ///
    /// A perfect maze over `n` cells has exactly `n - 1` open internal
    /// walls; the boundary entrance and exit are not internal and do not
    /// count.
    #[must_use]
    pub fn open_internal_edges(&self) -> usize {
        self.positions()
            .map(|pos| {
                let mut open = 0;
                if self.neighbor(pos, Direction::Right).is_some()
                    && !self[pos].has_wall(Direction::Right)
                {
                    open += 1;
                }
                if self.neighbor(pos, Direction::Bottom).is_some()
                    && !self[pos].has_wall(Direction::Bottom)
                {
                    open += 1;
                }
                open
            })
            .sum()
    }
}

impl Index<GridPos> for Grid {
    type Output = Cell;

    fn index(&self, pos: GridPos) -> &Cell {
        &self.cells[self.index_of(pos)]
    }
}

impl IndexMut<GridPos> for Grid {
    fn index_mut(&mut self, pos: GridPos) -> &mut Cell {
        let index = self.index_of(pos);
        &mut self.cells[index]
    }
}

impl Display for Grid {
    /// Renders the grid as ASCII art, one `+--+` segment per cell wall.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.num_rows {
            for col in 0..self.num_cols {
                f.write_str("+")?;
                f.write_str(if self[GridPos::new(col, row)].has_wall(Direction::Top) {
                    "--"
                } else {
                    "  "
                })?;
            }
            f.write_str("+\n")?;
            for col in 0..self.num_cols {
                f.write_str(if self[GridPos::new(col, row)].has_wall(Direction::Left) {
                    "|"
                } else {
                    " "
                })?;
                f.write_str("  ")?;
            }
            let last = GridPos::new(self.num_cols - 1, row);
            f.write_str(if self[last].has_wall(Direction::Right) {
                "|\n"
            } else {
                " \n"
            })?;
        }
        for col in 0..self.num_cols {
            f.write_str("+")?;
            let bottom = GridPos::new(col, self.num_rows - 1);
            f.write_str(if self[bottom].has_wall(Direction::Bottom) {
                "--"
            } else {
                "  "
            })?;
        }
        f.write_str("+")
    }
}
