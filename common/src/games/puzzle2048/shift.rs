//! All four directions are expressed through the single leftward shift by changing basis
//! with [`transpose`] and [`reverse_rows`], which are both their own inverse.

use super::grid::Grid;
use super::transform::{reverse_rows, shift_left, transpose};
use super::types::{Direction, ShiftOutcome};

pub fn shift(grid: &Grid, direction: Direction) -> ShiftOutcome {
    match direction {
        Direction::Left => shift_left(grid),
        Direction::Right => shift_right(grid),
        Direction::Up => shift_up(grid),
        Direction::Down => shift_down(grid),
    }
}

pub fn shift_right(grid: &Grid) -> ShiftOutcome {
    shift_left(&reverse_rows(grid)).map_grid(reverse_rows)
}

pub fn shift_up(grid: &Grid) -> ShiftOutcome {
    shift_left(&transpose(grid)).map_grid(transpose)
}

pub fn shift_down(grid: &Grid) -> ShiftOutcome {
    shift_right(&transpose(grid)).map_grid(transpose)
}
