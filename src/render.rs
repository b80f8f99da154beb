use crate::error::MazeError;
use crate::grids::block_grid::BlockGrid;

/// Immutable text snapshot of a finished grid: one glyph per cell, each row
/// terminated by a newline. Safe to copy or hand to any transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMaze {
    text: String,
}

impl RenderedMaze {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn write_to<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.text.as_bytes())
    }
}

/// Exact size of a grid's rendering: `rows * (columns + 1)` bytes.
pub fn rendered_len(grid: &BlockGrid) -> usize {
    grid.dims.rows * (grid.dims.columns + 1)
}

/// Serializes the grid row-major, `#` for walls and a space for passages.
pub fn render(grid: &BlockGrid) -> RenderedMaze {
    let mut text = String::with_capacity(rendered_len(grid));
    for row in grid.rows() {
        for kind in row {
            text.push(kind.glyph());
        }
        text.push('\n');
    }
    RenderedMaze { text }
}

/// Like [`render`], but refuses grids whose rendering would not fit in
/// `capacity` bytes instead of truncating.
pub fn render_with_capacity(grid: &BlockGrid, capacity: usize) -> Result<RenderedMaze, MazeError> {
    let needed = rendered_len(grid);
    if needed > capacity {
        return Err(MazeError::RenderBufferTooSmall { needed, capacity });
    }
    Ok(render(grid))
}
