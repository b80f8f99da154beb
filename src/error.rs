use std::fmt;

/// Failure modes of a single generation run. All of them abort the run;
/// the caller may retry with a fresh random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// Zero or over-maximum rows/columns.
    InvalidDimensions { rows: usize, columns: usize },
    /// The frontier list hit its configured bound.
    FrontierCapacityExceeded { capacity: usize },
    /// Rendered output would not fit the configured buffer capacity.
    RenderBufferTooSmall { needed: usize, capacity: usize },
    /// A computed coordinate reached a cell accessor outside the grid.
    OutOfBoundsAccess { row: usize, column: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions { rows, columns } => {
                write!(f, "invalid maze dimensions {}x{}", rows, columns)
            }
            MazeError::FrontierCapacityExceeded { capacity } => {
                write!(f, "frontier capacity {} exceeded", capacity)
            }
            MazeError::RenderBufferTooSmall { needed, capacity } => {
                write!(
                    f,
                    "render buffer too small: need {} bytes, capacity {}",
                    needed, capacity
                )
            }
            MazeError::OutOfBoundsAccess { row, column } => {
                write!(f, "out-of-bounds cell access at ({}, {})", row, column)
            }
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod test_error {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let err = MazeError::RenderBufferTooSmall {
            needed: 196,
            capacity: 64,
        };
        assert_eq!(
            err.to_string(),
            "render buffer too small: need 196 bytes, capacity 64"
        );

        let err = MazeError::OutOfBoundsAccess { row: 12, column: 3 };
        assert_eq!(err.to_string(), "out-of-bounds cell access at (12, 3)");
    }
}
