//! A single maze cell and its wall state.

use bitflags::bitflags;

use crate::Direction;

bitflags! {
    /// A set of cell sides.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Sides: u8 {
        /// The top side.
        const TOP = 1;
        /// The right side.
        const RIGHT = 1 << 1;
        /// The bottom side.
        const BOTTOM = 1 << 2;
        /// The left side.
        const LEFT = 1 << 3;
    }
}

impl From<Direction> for Sides {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Top => Self::TOP,
            Direction::Right => Self::RIGHT,
            Direction::Bottom => Self::BOTTOM,
            Direction::Left => Self::LEFT,
        }
    }
}

/// A single grid cell: four wall flags, four tried-wall flags, and a visited
/// flag.
///
/// A freshly created cell is fully walled, with nothing tried or visited.
/// Cells are exclusively owned by their [`Grid`]; wall state shared with a
/// neighbor is kept mirrored by [`Grid::open_wall`], so a cell never removes
/// its own walls outside that operation.
///
/// The visited flag is reused across phases with different meanings: the
/// generator marks cells it has carved from, and must clear the flags before
/// solving begins. The tried-wall flags belong to the solver alone.
///
/// [`Grid`]: crate::Grid
/// [`Grid::open_wall`]: crate::Grid::open_wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: Sides,
    tried: Sides,
    visited: bool,
}

impl Cell {
    /// Creates a fully walled cell with no tried or visited state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            walls: Sides::all(),
            tried: Sides::empty(),
            visited: false,
        }
    }

    /// Returns `true` if the wall on `side` is present.
    #[must_use]
    pub fn has_wall(&self, side: Direction) -> bool {
        self.walls.contains(side.into())
    }

    /// Removes the wall on `side`.
    pub fn remove_wall(&mut self, side: Direction) {
        self.walls.remove(side.into());
    }

    /// Returns the set of present walls.
    #[must_use]
    pub const fn walls(&self) -> Sides {
        self.walls
    }

    /// Returns `true` if the solver has already tried the wall on `side`.
    ///
    /// A wall counts as tried the moment the solver crosses it or discovers
    /// it cannot be crossed.
    #[must_use]
    pub fn wall_tried(&self, side: Direction) -> bool {
        self.tried.contains(side.into())
    }

    /// Marks the wall on `side` as tried.
    pub fn mark_wall_tried(&mut self, side: Direction) {
        self.tried.insert(side.into());
    }

    /// Returns `true` if every side has been tried.
    #[must_use]
    pub fn fully_tried(&self) -> bool {
        self.tried == Sides::all()
    }

    /// Clears all tried-wall flags.
    pub fn reset_tried(&mut self) {
        self.tried = Sides::empty();
    }

    /// Returns the visited flag.
    #[must_use]
    pub const fn visited(&self) -> bool {
        self.visited
    }

    /// Sets the visited flag.
    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_fully_walled() {
        let cell = Cell::new();
        for dir in Direction::ALL {
            assert!(cell.has_wall(dir));
            assert!(!cell.wall_tried(dir));
        }
        assert!(!cell.visited());
    }

    #[test]
    fn test_remove_wall_leaves_other_sides() {
        let mut cell = Cell::new();
        cell.remove_wall(Direction::Right);
        assert!(!cell.has_wall(Direction::Right));
        assert!(cell.has_wall(Direction::Top));
        assert!(cell.has_wall(Direction::Bottom));
        assert!(cell.has_wall(Direction::Left));
    }

    #[test]
    fn test_fully_tried_after_marking_every_side() {
        let mut cell = Cell::new();
        assert!(!cell.fully_tried());
        for dir in Direction::ALL {
            cell.mark_wall_tried(dir);
        }
        assert!(cell.fully_tried());
    }

    #[test]
    fn test_reset_tried_keeps_walls() {
        let mut cell = Cell::new();
        cell.remove_wall(Direction::Bottom);
        cell.mark_wall_tried(Direction::Left);
        cell.reset_tried();
        assert!(!cell.wall_tried(Direction::Left));
        assert!(!cell.has_wall(Direction::Bottom));
    }
}
