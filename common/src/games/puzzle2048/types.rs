use super::grid::Grid;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Cell coordinate, `y` is the row and `x` the column.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Position {
    pub y: usize,
    pub x: usize,
}

impl Position {
    pub fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }
}

impl From<(usize, usize)> for Position {
    fn from((y, x): (usize, usize)) -> Self {
        Self { y, x }
    }
}

/// Result of sliding a grid in one direction.
///
/// `removed` holds one entry per merge: the value of the tiles before they merged.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ShiftOutcome {
    pub grid: Grid,
    pub removed: Vec<u32>,
}

impl ShiftOutcome {
    /// Score awarded for this shift. Each merge of two `v` tiles is worth `2v`.
    pub fn score_gained(&self) -> u64 {
        self.removed.iter().map(|&v| u64::from(v) * 2).sum()
    }

    pub(super) fn map_grid(self, transform: impl FnOnce(&Grid) -> Grid) -> Self {
        Self {
            grid: transform(&self.grid),
            removed: self.removed,
        }
    }
}
