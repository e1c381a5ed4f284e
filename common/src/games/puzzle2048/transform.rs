use super::grid::Grid;
use super::line::shift_line;
use super::types::ShiftOutcome;

/// Shifts every row toward column 0. Removed values are collected row by row.
pub fn shift_left(grid: &Grid) -> ShiftOutcome {
    let mut cells = Vec::with_capacity(grid.cells().len());
    let mut removed = Vec::new();

    for row in grid.rows() {
        let (merged, row_removed) = shift_line(row);
        cells.extend(merged);
        removed.extend(row_removed);
    }

    ShiftOutcome {
        grid: Grid::from_cells(cells, grid.width(), grid.height()),
        removed,
    }
}

/// Swaps rows and columns. A `h x w` grid becomes `w x h`.
pub fn transpose(grid: &Grid) -> Grid {
    let (width, height) = (grid.width(), grid.height());
    let source = grid.cells();
    let cells = (0..width)
        .flat_map(|x| (0..height).map(move |y| source[y * width + x]))
        .collect();
    Grid::from_cells(cells, height, width)
}

pub fn reverse_rows(grid: &Grid) -> Grid {
    let cells = grid
        .rows()
        .flat_map(|row| row.iter().rev().copied())
        .collect();
    Grid::from_cells(cells, grid.width(), grid.height())
}
