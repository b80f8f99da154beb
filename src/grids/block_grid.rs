use crate::error::MazeError;
use crate::grids::{CellKind, Dimensions};

/// Row-major grid of wall/passage cells. Dimensions are fixed for the
/// lifetime of a generation run and cells only ever go Wall -> Passage.
#[derive(Debug)]
pub struct BlockGrid {
    pub dims: Dimensions,

    cells: Vec<CellKind>,
}

impl BlockGrid {
    pub fn with_dims(rows: usize, columns: usize) -> Result<Self, MazeError> {
        if rows == 0 || columns == 0 {
            return Err(MazeError::InvalidDimensions { rows, columns });
        }
        Ok(Self {
            cells: vec![CellKind::Wall; rows * columns],
            dims: Dimensions { rows, columns },
        })
    }

    pub fn is_within_bounds(&self, row: isize, column: isize) -> bool {
        row >= 0
            && (row as usize) < self.dims.rows
            && column >= 0
            && (column as usize) < self.dims.columns
    }

    fn index_of(&self, row: usize, column: usize) -> Result<usize, MazeError> {
        if row < self.dims.rows && column < self.dims.columns {
            Ok(self.dims.columns * row + column)
        } else {
            Err(MazeError::OutOfBoundsAccess { row, column })
        }
    }

    pub fn kind_at(&self, row: usize, column: usize) -> Result<CellKind, MazeError> {
        let index = self.index_of(row, column)?;
        Ok(self.cells[index])
    }

    /// Carves a cell. Re-carving an already-open cell is a no-op.
    pub fn set_passage(&mut self, row: usize, column: usize) -> Result<(), MazeError> {
        let index = self.index_of(row, column)?;
        self.cells[index] = CellKind::Passage;
        Ok(())
    }

    /// Coordinates of the cell `step` away from `cell`, or `None` when the
    /// step lands off the grid.
    pub fn step_from(&self, cell: (usize, usize), step: (isize, isize)) -> Option<(usize, usize)> {
        let row = cell.0 as isize + step.0;
        let column = cell.1 as isize + step.1;
        if self.is_within_bounds(row, column) {
            Some((row as usize, column as usize))
        } else {
            None
        }
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, CellKind> {
        self.cells.chunks(self.dims.columns)
    }

    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|kind| **kind == CellKind::Passage)
            .count()
    }
}
