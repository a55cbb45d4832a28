//! Directions and axes on the maze grid.

/// One of the four sides of a cell, or equivalently a unit move on the grid.
///
/// The grid's y axis grows downward, so [`Direction::Top`] points toward
/// smaller row indices and [`Direction::Bottom`] toward larger ones.
///
/// # Examples
///
/// ```
/// use mazeweave_core::{Axis, Direction};
///
/// assert_eq!(Direction::Right.opposite(), Direction::Left);
/// assert_eq!(Direction::Right.axis(), Axis::Col);
/// assert_eq!(Direction::Right.delta(), 1);
/// assert_eq!(Direction::Top.delta(), -1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward smaller row indices.
    #[default]
    Top,
    /// Toward larger column indices.
    Right,
    /// Toward larger row indices.
    Bottom,
    /// Toward smaller column indices.
    Left,
}

impl Direction {
    /// All directions, in top, right, bottom, left order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The fixed priority order the solver tries sides in.
    ///
    /// Changing this order changes which branch is explored first, but in a
    /// perfect maze the discovered path is the same for any order, since
    /// exactly one path exists.
    pub const SOLVE_ORDER: [Self; 4] = [Self::Right, Self::Bottom, Self::Left, Self::Top];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Returns the axis this direction moves along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Right | Self::Left => Axis::Col,
            Self::Top | Self::Bottom => Axis::Row,
        }
    }

    /// Returns the displacement along [`Self::axis`], either `1` or `-1`.
    #[must_use]
    pub const fn delta(self) -> i8 {
        match self {
            Self::Right | Self::Bottom => 1,
            Self::Left | Self::Top => -1,
        }
    }
}

/// A grid axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The column (horizontal) axis.
    Col,
    /// The row (vertical) axis.
    Row,
}
