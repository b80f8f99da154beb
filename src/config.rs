use crate::error::MazeError;

pub const DEFAULT_DIMS: (usize, usize) = (12, 15);

/// Dimensions and capacities for one generation run. The defaults mirror
/// the grid size the original module shipped with.
#[derive(Debug, Clone)]
pub struct MazeConfig {
    pub rows: usize,
    pub columns: usize,
    pub max_rows: usize,
    pub max_columns: usize,
    /// Bound on queued frontier entries, duplicates included.
    pub frontier_capacity: usize,
    /// Bound on rendered output, in bytes.
    pub render_capacity: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_DIMS.0,
            columns: DEFAULT_DIMS.1,
            max_rows: DEFAULT_DIMS.0,
            max_columns: DEFAULT_DIMS.1,
            frontier_capacity: 1000,
            render_capacity: 2048,
        }
    }
}

impl MazeConfig {
    pub fn with_dims(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        if self.rows == 0
            || self.columns == 0
            || self.rows > self.max_rows
            || self.columns > self.max_columns
        {
            return Err(MazeError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test_config {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(MazeConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_and_oversized_dims_are_rejected() {
        assert_eq!(
            MazeConfig::with_dims(0, 15).validate().unwrap_err(),
            MazeError::InvalidDimensions { rows: 0, columns: 15 }
        );
        assert_eq!(
            MazeConfig::with_dims(13, 15).validate().unwrap_err(),
            MazeError::InvalidDimensions {
                rows: 13,
                columns: 15
            }
        );
        assert_eq!(
            MazeConfig::with_dims(12, 16).validate().unwrap_err(),
            MazeError::InvalidDimensions {
                rows: 12,
                columns: 16
            }
        );
    }

    #[test]
    fn raised_maxima_admit_larger_grids() {
        let config = MazeConfig {
            rows: 21,
            columns: 31,
            max_rows: 50,
            max_columns: 50,
            ..MazeConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
