//! The `Maze` orchestrator.

use std::fmt;

use mazeweave_core::{CellLayout, Grid, InvalidDimensions, Render, RenderContext};
use mazeweave_generator::MazeGenerator;
use mazeweave_solver::{MazeSolver, Move};

/// Construction parameters for [`Maze::build`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeParams {
    /// X coordinate of the grid's top-left corner, in pixels.
    pub x1: f64,
    /// Y coordinate of the grid's top-left corner, in pixels.
    pub y1: f64,
    /// Number of rows; must be at least 1.
    pub num_rows: usize,
    /// Number of columns; must be at least 1.
    pub num_cols: usize,
    /// Width of one cell, in pixels.
    pub cell_width: f64,
    /// Height of one cell, in pixels.
    pub cell_height: f64,
    /// Seed for deterministic generation; `None` draws a random one.
    pub seed: Option<u64>,
}

/// A generated and solved maze.
///
/// Owns the grid for its whole lifetime; the generation and solving phases
/// mutate it in place and never run concurrently. All state is in memory and
/// scoped to this instance.
pub struct Maze<'r> {
    grid: Grid,
    layout: CellLayout,
    renderer: Option<&'r dyn Render>,
    seed: u64,
    path: Vec<Move>,
    solved: bool,
}

impl<'r> Maze<'r> {
    /// Builds, carves, and solves a maze.
    ///
    /// Every wall removal, move, and backtrack is reported to `renderer`
    /// before the next step begins; with `None` the run is purely
    /// computational.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimensions`] if either dimension is zero.
    pub fn build(
        params: MazeParams,
        renderer: Option<&'r dyn Render>,
    ) -> Result<Self, InvalidDimensions> {
        let MazeParams {
            x1,
            y1,
            num_rows,
            num_cols,
            cell_width,
            cell_height,
            seed,
        } = params;
        let layout = CellLayout::new(x1, y1, cell_width, cell_height);
        let generator = seed.map_or_else(MazeGenerator::new, MazeGenerator::with_seed);

        let ctx = match renderer {
            Some(render) => RenderContext::new(layout, render),
            None => RenderContext::headless(layout),
        };
        let generated = generator.generate(num_cols, num_rows, &ctx)?;
        log::info!(
            "generated {num_cols}x{num_rows} maze with seed {}",
            generated.seed
        );

        let mut maze = Self {
            grid: generated.grid,
            layout,
            renderer,
            seed: generated.seed,
            path: Vec::new(),
            solved: false,
        };

        maze.solve();
        Ok(maze)
    }

    fn render_context(&self) -> RenderContext<'r> {
        match self.renderer {
            Some(render) => RenderContext::new(self.layout, render),
            None => RenderContext::headless(self.layout),
        }
    }

    /// Re-runs the solving phase and returns whether a path was found.
    ///
    /// The solver's tried-wall state is reset first, so this can be called
    /// any number of times; for a maze built by [`Maze::build`] it always
    /// succeeds. The walls are never modified, so repeated solves find the
    /// same path.
    pub fn solve(&mut self) -> bool {
        let ctx = self.render_context();
        match MazeSolver::new().solve(&mut self.grid, &ctx) {
            Ok(path) => {
                self.path = path;
                self.solved = true;
                true
            }
            Err(err) => {
                log::warn!("{err}");
                self.path.clear();
                self.solved = false;
                false
            }
        }
    }

    /// Returns the carved grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the seed the maze was carved with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns whether the most recent solve found a path.
    #[must_use]
    pub const fn solved(&self) -> bool {
        self.solved
    }

    /// Returns the move trace of the most recent solve, forward and
    /// backtrack steps in order.
    #[must_use]
    pub fn path(&self) -> &[Move] {
        &self.path
    }
}

impl fmt::Debug for Maze<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Maze")
            .field("num_cols", &self.grid.num_cols())
            .field("num_rows", &self.grid.num_rows())
            .field("seed", &self.seed)
            .field("solved", &self.solved)
            .field("renderer", &self.renderer.map(|_| "dyn Render"))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use mazeweave_core::{
        Direction, GridPos,
        testing::{RecordingRender, RenderEvent},
    };
    use proptest::prelude::*;

    use super::*;

    fn params(num_cols: usize, num_rows: usize, seed: u64) -> MazeParams {
        MazeParams {
            x1: 0.0,
            y1: 0.0,
            num_rows,
            num_cols,
            cell_width: 10.0,
            cell_height: 10.0,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_build_generates_and_solves() {
        let maze = Maze::build(params(5, 5, 1), None).unwrap();
        assert!(maze.solved());
        assert_eq!(maze.seed(), 1);
        assert_eq!(maze.grid().open_internal_edges(), 24);
        assert_eq!(maze.path().last().unwrap().to, maze.grid().exit());
    }

    #[test]
    fn test_single_cell_maze_solves_with_zero_moves() {
        let maze = Maze::build(params(1, 1, 42), None).unwrap();
        assert!(maze.solved());
        assert!(maze.path().is_empty());
    }

    #[test]
    fn test_invalid_dimensions_fail_construction() {
        let result = Maze::build(params(5, 0, 1), None);
        assert_eq!(
            result.unwrap_err(),
            InvalidDimensions {
                num_cols: 5,
                num_rows: 0
            }
        );
    }

    #[test]
    fn test_same_seed_reproduces_walls_and_path() {
        let a = Maze::build(params(7, 6, 99), None).unwrap();
        let b = Maze::build(params(7, 6, 99), None).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.path(), b.path());
    }

    #[test]
    fn test_resolving_succeeds_with_the_same_path() {
        let mut maze = Maze::build(params(6, 6, 3), None).unwrap();
        let first = maze.path().to_vec();
        assert!(maze.solve());
        assert_eq!(maze.path(), first);
    }

    #[test]
    fn test_renderer_observes_every_phase() {
        let render = RecordingRender::new();
        let maze = Maze::build(params(3, 3, 5), Some(&render)).unwrap();
        let events = render.events();

        // Every notification is paired with a redraw.
        for pair in events.chunks(2) {
            assert_eq!(pair.len(), 2);
            assert!(!matches!(pair[0], RenderEvent::Redraw));
            assert_eq!(pair[1], RenderEvent::Redraw);
        }

        // The solve phase reported exactly the moves in the trace.
        assert_eq!(render.moves().len(), maze.path().len());
    }

    #[test]
    fn test_rendered_and_headless_runs_agree() {
        let render = RecordingRender::new();
        let rendered = Maze::build(params(4, 4, 11), Some(&render)).unwrap();
        let headless = Maze::build(params(4, 4, 11), None).unwrap();
        assert_eq!(rendered.grid(), headless.grid());
        assert_eq!(rendered.path(), headless.path());
    }

    #[test]
    fn test_entrance_and_exit_invariant() {
        let maze = Maze::build(params(9, 4, 1234), None).unwrap();
        assert!(!maze.grid()[GridPos::ORIGIN].has_wall(Direction::Top));
        assert!(!maze.grid()[maze.grid().exit()].has_wall(Direction::Bottom));
    }

    proptest! {
        #[test]
        fn test_every_built_maze_is_solved(
            num_cols in 1_usize..=10,
            num_rows in 1_usize..=10,
            seed: u64,
        ) {
            let maze = Maze::build(params(num_cols, num_rows, seed), None).unwrap();
            prop_assert!(maze.solved());
            prop_assert_eq!(
                maze.grid().open_internal_edges(),
                num_cols * num_rows - 1
            );
        }
    }
}
