pub mod block_grid;

#[derive(Debug)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CellKind {
    Wall,
    Passage,
}

impl CellKind {
    pub fn glyph(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Passage => ' ',
        }
    }
}
