//! The iterative depth-first solver and its undo stack.

use mazeweave_core::{Axis, Direction, Grid, GridPos, RenderContext};

/// Error: the grid has no path from the entrance cell to the exit cell.
///
/// Cannot occur for a perfect maze, where every pair of cells is connected.
/// A grid supplied from elsewhere may disconnect the two; the solver reports
/// that instead of looping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("maze is unsolvable: no path from the entrance to the exit")]
pub struct Unsolvable;

/// One traversal step of the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// The cell the solver moved from.
    pub from: GridPos,
    /// The cell the solver moved to.
    pub to: GridPos,
    /// Whether this step undid an earlier forward move.
    pub backtrack: bool,
}

/// A record of one forward move, kept so it can be undone.
///
/// Only the displacement matters: popping a record moves the solver back by
/// the inverse of `delta` along `axis`.
#[derive(Debug, Clone, Copy)]
struct MoveRecord {
    axis: Axis,
    delta: i8,
}

impl From<Direction> for MoveRecord {
    fn from(dir: Direction) -> Self {
        Self {
            axis: dir.axis(),
            delta: dir.delta(),
        }
    }
}

impl MoveRecord {
    /// The position one inverse displacement back from `pos`.
    ///
    /// The record was pushed when the solver moved forward into `pos`'s
    /// subtree, so stepping back cannot leave the grid.
    fn undone_from(self, pos: GridPos) -> GridPos {
        match (self.axis, self.delta > 0) {
            (Axis::Col, true) => GridPos::new(pos.col() - 1, pos.row()),
            (Axis::Col, false) => GridPos::new(pos.col() + 1, pos.row()),
            (Axis::Row, true) => GridPos::new(pos.col(), pos.row() - 1),
            (Axis::Row, false) => GridPos::new(pos.col(), pos.row() + 1),
        }
    }
}

/// Solves a carved maze by exhaustive depth-first search with explicit
/// backtracking.
///
/// The solver mutates only the tried-wall flags of the grid's cells; walls
/// are never modified, so the same grid can be solved repeatedly.
#[derive(Debug, Default, Clone, Copy)]
pub struct MazeSolver;

impl MazeSolver {
    /// Creates a solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Searches for a path from the top-left cell to the bottom-right cell.
    ///
    /// Tried-wall state from any previous run is cleared first. On success
    /// the returned trace holds every forward and backtrack step in order;
    /// each step is reported to `ctx` as it happens. A start equal to the
    /// target (a 1×1 grid) succeeds immediately with an empty trace.
    ///
    /// # Errors
    ///
    /// Returns [`Unsolvable`] if the exit cannot be reached from the
    /// entrance. For a maze carved by the generator this cannot happen.
    #[expect(clippy::unused_self)]
    pub fn solve(
        &self,
        grid: &mut Grid,
        ctx: &RenderContext<'_>,
    ) -> Result<Vec<Move>, Unsolvable> {
        grid.reset_tried();

        let target = grid.exit();
        let mut pos = GridPos::ORIGIN;
        let mut records: Vec<MoveRecord> = Vec::new();
        let mut trace = Vec::new();

        while pos != target {
            // A present wall can never be crossed, and a boundary side has
            // no cell behind it (the open entrance included). Both count as
            // already tried.
            for dir in Direction::ALL {
                if grid[pos].has_wall(dir) || grid.neighbor(pos, dir).is_none() {
                    grid[pos].mark_wall_tried(dir);
                }
            }

            let step = Direction::SOLVE_ORDER.into_iter().find_map(|dir| {
                if grid[pos].wall_tried(dir) {
                    None
                } else {
                    grid.neighbor(pos, dir).map(|next| (dir, next))
                }
            });

            if let Some((dir, next)) = step {
                grid[pos].mark_wall_tried(dir);
                // The solver never re-enters an edge from the side it just
                // used.
                grid[next].mark_wall_tried(dir.opposite());
                log::debug!("move {dir:?} from {pos} to {next}");
                ctx.draw_move(pos, next, false);
                trace.push(Move {
                    from: pos,
                    to: next,
                    backtrack: false,
                });
                records.push(MoveRecord::from(dir));
                pos = next;
            } else {
                // Every side tried: retreat one move. The restored cell is
                // re-examined by the main loop, so a chain of exhausted
                // cells pops one record per iteration. A pop that empties
                // the stack is not a failure — it may have returned the
                // search to the entrance, which can still hold untried
                // sides. Failure is an exhausted cell with nothing left to
                // undo.
                let Some(record) = records.pop() else {
                    log::debug!("exhausted at {pos} with nothing left to undo");
                    return Err(Unsolvable);
                };
                let back = record.undone_from(pos);
                log::debug!("backtrack from {pos} to {back}");
                ctx.draw_move(pos, back, true);
                trace.push(Move {
                    from: pos,
                    to: back,
                    backtrack: true,
                });
                pos = back;
            }
        }

        Ok(trace)
    }
}

#[cfg(test)]
mod tests {
    use mazeweave_core::{CellLayout, Grid, testing};

    use super::*;

    fn headless() -> RenderContext<'static> {
        RenderContext::headless(CellLayout::default())
    }

    fn forward(from: (usize, usize), to: (usize, usize)) -> Move {
        Move {
            from: GridPos::new(from.0, from.1),
            to: GridPos::new(to.0, to.1),
            backtrack: false,
        }
    }

    fn backward(from: (usize, usize), to: (usize, usize)) -> Move {
        Move {
            from: GridPos::new(from.0, from.1),
            to: GridPos::new(to.0, to.1),
            backtrack: true,
        }
    }

    #[test]
    fn test_single_cell_succeeds_with_zero_moves() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.open_entrance_and_exit();
        let path = MazeSolver::new().solve(&mut grid, &headless()).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_direct_branch_is_taken_without_backtracking() {
        let mut grid = testing::carved_grid_2x2();
        let path = MazeSolver::new().solve(&mut grid, &headless()).unwrap();
        assert_eq!(path, [forward((0, 0), (1, 0)), forward((1, 0), (1, 1))]);
    }

    #[test]
    fn test_dead_end_branch_backtracks_through_the_start() {
        // The right branch is a dead end; the solver must return to the
        // start with an empty undo stack and still continue through the
        // start's open bottom side.
        let mut grid = testing::detour_grid_2x2();
        let path = MazeSolver::new().solve(&mut grid, &headless()).unwrap();
        assert_eq!(
            path,
            [
                forward((0, 0), (1, 0)),
                backward((1, 0), (0, 0)),
                forward((0, 0), (0, 1)),
                forward((0, 1), (1, 1)),
            ]
        );
    }

    #[test]
    fn test_sealed_grid_is_unsolvable() {
        // All internal walls intact; only the boundary entrance and exit are
        // open. The solver must fail without looping or stepping off the
        // grid through the entrance.
        let mut grid = testing::sealed_grid_2x2();
        let result = MazeSolver::new().solve(&mut grid, &headless());
        assert_eq!(result, Err(Unsolvable));
    }

    #[test]
    fn test_serpentine_corridor_is_walked_without_backtracking() {
        let mut grid = testing::serpentine_grid(5, 4);
        let path = MazeSolver::new().solve(&mut grid, &headless()).unwrap();
        assert!(path.iter().all(|step| !step.backtrack));
        // Rows 0 through 2 are walked end to end (5 moves each, counting the
        // turn down); the final turn lands directly on the exit corner.
        assert_eq!(path.len(), 15);
        assert_eq!(path.last().unwrap().to, grid.exit());
    }

    #[test]
    fn test_forward_edges_are_never_retraversed() {
        let mut grid = testing::detour_grid_2x2();
        let path = MazeSolver::new().solve(&mut grid, &headless()).unwrap();
        let mut forward_edges: Vec<_> = path
            .iter()
            .filter(|step| !step.backtrack)
            .map(|step| (step.from, step.to))
            .collect();
        let total = forward_edges.len();
        forward_edges.sort_by_key(|(from, to)| (from.col(), from.row(), to.col(), to.row()));
        forward_edges.dedup();
        assert_eq!(forward_edges.len(), total);
    }

    #[test]
    fn test_resolving_yields_the_same_path() {
        let mut grid = testing::detour_grid_2x2();
        let solver = MazeSolver::new();
        let first = solver.solve(&mut grid, &headless()).unwrap();
        let second = solver.solve(&mut grid, &headless()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_walls_are_not_modified() {
        let mut grid = testing::carved_grid_2x2();
        let before: Vec<_> = grid.positions().map(|pos| grid[pos].walls()).collect();
        MazeSolver::new().solve(&mut grid, &headless()).unwrap();
        let after: Vec<_> = grid.positions().map(|pos| grid[pos].walls()).collect();
        assert_eq!(before, after);
    }
}
