//! The randomized depth-first wall carver.

use mazeweave_core::{Direction, Grid, GridPos, InvalidDimensions, RenderContext};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use tinyvec::ArrayVec;

/// A carved maze together with the seed that produced it.
///
/// Holding the effective seed makes every maze reproducible after the fact:
/// [`MazeGenerator::with_seed`] with the same seed and dimensions rebuilds an
/// identical grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMaze {
    /// The carved grid, visited flags already cleared for solving.
    pub grid: Grid,
    /// The seed the grid was carved with.
    pub seed: u64,
}

/// Generates perfect mazes by randomized depth-first wall carving.
///
/// The carved grid always has its boundary entrance (top of the origin cell)
/// and exit (bottom of the bottom-right cell) opened, regardless of the
/// random interior.
///
/// # Examples
///
/// ```
/// use mazeweave_core::{CellLayout, RenderContext};
/// use mazeweave_generator::MazeGenerator;
///
/// let ctx = RenderContext::headless(CellLayout::default());
/// let generator = MazeGenerator::with_seed(1);
/// let maze = generator.generate(8, 6, &ctx)?;
/// assert_eq!(maze.seed, 1);
/// assert_eq!(maze.grid.open_internal_edges(), 8 * 6 - 1);
/// # Ok::<(), mazeweave_core::InvalidDimensions>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeGenerator {
    seed: u64,
}

impl MazeGenerator {
    /// Creates a generator with a seed drawn from the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }

    /// Creates a generator with a fixed seed.
    ///
    /// Generation is fully deterministic: the same seed and dimensions
    /// produce an identical wall configuration.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Returns the seed this generator carves with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a `num_cols × num_rows` maze.
    ///
    /// Allocates the grid, opens the boundary entrance and exit, carves
    /// until every cell is reachable from the origin, and clears the visited
    /// flags so the grid is ready for solving. Each mutation is reported to
    /// `ctx` before the next one happens.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimensions`] if either dimension is zero.
    pub fn generate(
        &self,
        num_cols: usize,
        num_rows: usize,
        ctx: &RenderContext<'_>,
    ) -> Result<GeneratedMaze, InvalidDimensions> {
        let mut grid = Grid::new(num_cols, num_rows)?;
        for pos in grid.positions() {
            ctx.draw_cell(&grid, pos);
        }

        grid.open_entrance_and_exit();
        ctx.draw_cell(&grid, GridPos::ORIGIN);
        ctx.draw_cell(&grid, grid.exit());

        let mut rng = Pcg64Mcg::seed_from_u64(self.seed);
        carve(&mut grid, &mut rng, ctx);
        grid.reset_visited();

        Ok(GeneratedMaze {
            grid,
            seed: self.seed,
        })
    }
}

impl Default for MazeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first carving over an explicit frontier stack.
///
/// Semantically the recursive form: the stack top is the current cell, a
/// random unvisited neighbor is carved into and pushed, and a dead end pops.
/// The explicit stack bounds memory by the cell count instead of the call
/// stack, so large mazes cannot overflow.
fn carve(grid: &mut Grid, rng: &mut Pcg64Mcg, ctx: &RenderContext<'_>) {
    let mut frontier = vec![GridPos::ORIGIN];
    grid[GridPos::ORIGIN].set_visited(true);

    while let Some(&pos) = frontier.last() {
        let candidates = unvisited_neighbors(grid, pos);
        if candidates.is_empty() {
            // Dead end: this cell's wall state is final.
            ctx.draw_cell(grid, pos);
            frontier.pop();
            continue;
        }

        let (dir, next) = candidates[rng.random_range(0..candidates.len())];
        log::trace!("carve {dir:?} from {pos}");
        grid.open_wall(pos, dir);
        ctx.draw_cell(grid, pos);
        ctx.draw_cell(grid, next);

        grid[next].set_visited(true);
        frontier.push(next);
    }
}

/// In-bounds, not-yet-visited neighbors of `pos`, at most four.
fn unvisited_neighbors(grid: &Grid, pos: GridPos) -> ArrayVec<[(Direction, GridPos); 4]> {
    let mut candidates = ArrayVec::new();
    for dir in Direction::ALL {
        if let Some(next) = grid.neighbor(pos, dir) {
            if !grid[next].visited() {
                candidates.push((dir, next));
            }
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use mazeweave_core::CellLayout;

    fn headless() -> RenderContext<'static> {
        RenderContext::headless(CellLayout::default())
    }

    /// Counts cells reachable from the origin through open walls, verifying
    /// each is visited exactly once.
    fn reachable_from_origin(grid: &Grid) -> usize {
        let mut seen = vec![false; grid.num_cols() * grid.num_rows()];
        let mut stack = vec![GridPos::ORIGIN];
        seen[0] = true;
        let mut count = 0;
        while let Some(pos) = stack.pop() {
            count += 1;
            for dir in Direction::ALL {
                if grid[pos].has_wall(dir) {
                    continue;
                }
                if let Some(next) = grid.neighbor(pos, dir) {
                    let index = next.col() * grid.num_rows() + next.row();
                    if !seen[index] {
                        seen[index] = true;
                        stack.push(next);
                    }
                }
            }
        }
        count
    }

    fn mirror_agrees(grid: &Grid) -> bool {
        grid.positions().all(|pos| {
            Direction::ALL.iter().all(|&dir| {
                grid.neighbor(pos, dir).is_none_or(|next| {
                    grid[pos].has_wall(dir) == grid[next].has_wall(dir.opposite())
                })
            })
        })
    }

    #[test]
    fn test_five_by_five_opens_24_internal_walls() {
        let maze = MazeGenerator::with_seed(1)
            .generate(5, 5, &headless())
            .unwrap();
        assert_eq!(maze.grid.open_internal_edges(), 24);
    }

    #[test]
    fn test_single_cell_maze() {
        let maze = MazeGenerator::with_seed(42)
            .generate(1, 1, &headless())
            .unwrap();
        assert_eq!(maze.grid.open_internal_edges(), 0);
        assert!(!maze.grid[GridPos::ORIGIN].has_wall(Direction::Top));
        assert!(!maze.grid[GridPos::ORIGIN].has_wall(Direction::Bottom));
    }

    #[test]
    fn test_entrance_and_exit_are_open() {
        for seed in [0, 1, 7, 1234] {
            let maze = MazeGenerator::with_seed(seed)
                .generate(6, 4, &headless())
                .unwrap();
            assert!(!maze.grid[GridPos::ORIGIN].has_wall(Direction::Top));
            assert!(!maze.grid[maze.grid.exit()].has_wall(Direction::Bottom));
        }
    }

    #[test]
    fn test_every_cell_reachable() {
        let maze = MazeGenerator::with_seed(9)
            .generate(10, 7, &headless())
            .unwrap();
        assert_eq!(reachable_from_origin(&maze.grid), 70);
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = MazeGenerator::with_seed(5)
            .generate(8, 8, &headless())
            .unwrap();
        let b = MazeGenerator::with_seed(5)
            .generate(8, 8, &headless())
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let a = MazeGenerator::with_seed(1)
            .generate(8, 8, &headless())
            .unwrap();
        let b = MazeGenerator::with_seed(2)
            .generate(8, 8, &headless())
            .unwrap();
        assert_ne!(a.grid, b.grid);
    }

    #[test]
    fn test_visited_flags_cleared_after_generation() {
        let maze = MazeGenerator::with_seed(3)
            .generate(4, 4, &headless())
            .unwrap();
        for pos in maze.grid.positions() {
            assert!(!maze.grid[pos].visited());
        }
    }

    #[test]
    fn test_invalid_dimensions() {
        let result = MazeGenerator::with_seed(0).generate(0, 4, &headless());
        assert_eq!(
            result,
            Err(InvalidDimensions {
                num_cols: 0,
                num_rows: 4
            })
        );
    }

    proptest! {
        #[test]
        fn test_generated_maze_is_spanning_tree(
            num_cols in 1_usize..=8,
            num_rows in 1_usize..=8,
            seed: u64,
        ) {
            let maze = MazeGenerator::with_seed(seed)
                .generate(num_cols, num_rows, &headless())
                .unwrap();
            prop_assert_eq!(maze.grid.open_internal_edges(), num_cols * num_rows - 1);
            prop_assert_eq!(reachable_from_origin(&maze.grid), num_cols * num_rows);
            prop_assert!(mirror_agrees(&maze.grid));
        }
    }
}
