use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("position ({y}, {x}) is outside the {height}x{width} grid")]
    OutOfBounds {
        y: usize,
        x: usize,
        height: usize,
        width: usize,
    },
    #[error("grid has no empty cell to place a tile in")]
    NoEmptyCell,
    #[error("row {row} has {len} cells, expected {width}")]
    Ragged { row: usize, len: usize, width: usize },
}
