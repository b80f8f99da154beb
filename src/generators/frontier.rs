use crate::error::MazeError;

/// Wall cells two steps from carved territory, candidates for the next
/// carve. Duplicates are kept on purpose: a cell queued from several carved
/// neighbors is proportionally more likely to be picked.
#[derive(Debug)]
pub struct FrontierSet {
    cells: Vec<(usize, usize)>,
    capacity: usize,
}

impl FrontierSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, cell: (usize, usize)) -> Result<(), MazeError> {
        if self.cells.len() == self.capacity {
            return Err(MazeError::FrontierCapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.cells.push(cell);
        Ok(())
    }

    pub fn get(&self, index: usize) -> (usize, usize) {
        self.cells[index]
    }

    /// O(1) removal; the last live entry takes the removed slot. Remaining
    /// order is not significant.
    pub fn swap_remove(&mut self, index: usize) -> (usize, usize) {
        self.cells.swap_remove(index)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
