pub mod frontier;
pub mod prim;

use rand::Rng;

use crate::error::MazeError;
use crate::grids::block_grid::BlockGrid;

/// Uniform draws in `0..bound`, `bound` non-zero. The carver only ever needs
/// this one operation; tests script it for reproducible mazes.
pub trait RandomSource {
    fn pick(&mut self, bound: usize) -> usize;
}

/// Adapter over any `rand` generator. `gen_range` does an unbiased range
/// reduction, unlike the modulo draw this replaces.
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, bound: usize) -> usize {
        self.0.gen_range(0, bound)
    }
}

pub trait Generator {
    /// Runs one carve iteration; a no-op once the frontier is drained.
    fn step_generation(&mut self) -> Result<(), MazeError>;

    fn is_done(&self) -> bool;

    fn grid(&self) -> &BlockGrid;

    fn generate_maze(&mut self) -> Result<(), MazeError> {
        while !self.is_done() {
            self.step_generation()?;
        }
        Ok(())
    }
}
