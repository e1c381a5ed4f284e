use super::error::GridError;
use super::grid::Grid;
use super::shift::shift;
use super::types::{Direction, Position};
use crate::games::session_rng::TileRng;

const TWO_TILE_PROBABILITY: f64 = 0.9;

/// True when no direction changes the grid, i.e. the game has no legal move left.
pub fn is_terminal(grid: &Grid) -> bool {
    Direction::ALL
        .iter()
        .all(|&direction| shift(grid, direction).grid == *grid)
}

/// Empty cells in row-major order.
pub fn empty_positions(grid: &Grid) -> Vec<Position> {
    grid.rows()
        .enumerate()
        .flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &value)| value == 0)
                .map(move |(x, _)| Position::new(y, x))
        })
        .collect()
}

pub fn put(grid: &Grid, y: usize, x: usize, value: u32) -> Result<Grid, GridError> {
    if !grid.contains(y, x) {
        return Err(GridError::OutOfBounds {
            y,
            x,
            height: grid.height(),
            width: grid.width(),
        });
    }

    let mut copy = grid.clone();
    copy.set(y, x, value);
    Ok(copy)
}

/// Places `value` on an empty cell chosen uniformly at random.
pub fn random_insert<R: TileRng + ?Sized>(
    grid: &Grid,
    value: u32,
    rng: &mut R,
) -> Result<Grid, GridError> {
    let empty = empty_positions(grid);
    if empty.is_empty() {
        return Err(GridError::NoEmptyCell);
    }

    let position = empty[rng.next_index(empty.len())];
    put(grid, position.y, position.x, value)
}

/// 2 nine times out of ten, otherwise 4.
pub fn random_tile_value<R: TileRng + ?Sized>(rng: &mut R) -> u32 {
    if rng.next_unit() < TWO_TILE_PROBABILITY {
        2
    } else {
        4
    }
}
