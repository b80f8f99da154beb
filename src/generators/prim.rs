use log::{debug, warn};

use crate::error::MazeError;
use crate::generators::frontier::FrontierSet;
use crate::generators::{Generator, RandomSource};
use crate::grids::block_grid::BlockGrid;
use crate::grids::CellKind;

/// Distance-2 neighbor offsets, scanned in this fixed order (up, down,
/// left, right) so a given draw sequence always yields the same maze.
const STEPS: [(isize, isize); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// Randomized Prim's carver. Seeds one random passage cell, then repeatedly
/// picks a random frontier cell, connects it through the midpoint wall to an
/// already-carved neighbor, and expands the frontier from it.
#[derive(Debug)]
pub struct RandPrims<R: RandomSource> {
    grid: BlockGrid,
    frontier: FrontierSet,
    rng: R,
    done: bool,
}

impl<R: RandomSource> RandPrims<R> {
    pub fn new(
        rows: usize,
        columns: usize,
        frontier_capacity: usize,
        mut rng: R,
    ) -> Result<Self, MazeError> {
        let mut grid = BlockGrid::with_dims(rows, columns)?;

        let seed_row = rng.pick(rows);
        let seed_column = rng.pick(columns);
        grid.set_passage(seed_row, seed_column)?;
        debug!("seeded maze at ({}, {})", seed_row, seed_column);

        let mut frontier = FrontierSet::with_capacity(frontier_capacity);
        add_frontier_cells(&grid, &mut frontier, (seed_row, seed_column))?;

        let done = frontier.is_empty();
        Ok(Self {
            grid,
            frontier,
            rng,
            done,
        })
    }

    pub fn into_grid(self) -> BlockGrid {
        self.grid
    }
}

impl<R: RandomSource> Generator for RandPrims<R> {
    fn step_generation(&mut self) -> Result<(), MazeError> {
        if self.frontier.is_empty() {
            self.done = true;
            return Ok(());
        }

        let index = self.rng.pick(self.frontier.len());
        let cell = self.frontier.get(index);

        connect_to_passage(&mut self.grid, cell)?;

        // Expand before removing, as the original loop does; the chosen
        // entry is then swapped out in O(1).
        add_frontier_cells(&self.grid, &mut self.frontier, cell)?;
        self.frontier.swap_remove(index);

        if self.frontier.is_empty() {
            self.done = true;
        }
        Ok(())
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn grid(&self) -> &BlockGrid {
        &self.grid
    }
}

/// Queues every in-bounds wall cell two steps from `cell`. No dedup: a cell
/// bordering more carved territory gets more entries, hence more weight.
fn add_frontier_cells(
    grid: &BlockGrid,
    frontier: &mut FrontierSet,
    cell: (usize, usize),
) -> Result<(), MazeError> {
    for step in STEPS.iter() {
        if let Some(next) = grid.step_from(cell, *step) {
            if grid.kind_at(next.0, next.1)? == CellKind::Wall {
                frontier.push(next)?;
            }
        }
    }
    Ok(())
}

/// Carves `cell` and the midpoint wall toward the first already-carved
/// distance-2 neighbor in scan order.
fn connect_to_passage(grid: &mut BlockGrid, cell: (usize, usize)) -> Result<(), MazeError> {
    for step in STEPS.iter() {
        if let Some(next) = grid.step_from(cell, *step) {
            if grid.kind_at(next.0, next.1)? == CellKind::Passage {
                let mid = ((cell.0 + next.0) / 2, (cell.1 + next.1) / 2);
                grid.set_passage(mid.0, mid.1)?;
                grid.set_passage(cell.0, cell.1)?;
                return Ok(());
            }
        }
    }

    // Every frontier entry borders carved territory when queued, so the scan
    // above always finds a target; even a stale duplicate entry still sees
    // the passage it was carved toward.
    warn!(
        "frontier cell ({}, {}) has no carved neighbor",
        cell.0, cell.1
    );
    debug_assert!(false, "frontier cell with no carved neighbor");
    Ok(())
}
