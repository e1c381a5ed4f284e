use super::error::GridError;

/// Rectangular board of tile values stored row-major. A value of 0 is an empty cell.
///
/// Every engine operation returns a fresh `Grid` and leaves its input untouched, so a
/// caller can compare the grids before and after a move to find out whether it did anything.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Grid {
    cells: Vec<u32>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            cells: vec![0; width * height],
            width,
            height,
        }
    }

    pub fn square(size: usize) -> Self {
        Self::empty(size, size)
    }

    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());

        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: row_index,
                    len: row.len(),
                    width,
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            cells,
            width,
            height: rows.len(),
        })
    }

    pub(super) fn from_cells(cells: Vec<u32>, width: usize, height: usize) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, y: usize, x: usize) -> bool {
        y < self.height && x < self.width
    }

    pub fn get(&self, y: usize, x: usize) -> Option<u32> {
        if self.contains(y, x) {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }

    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub(super) fn set(&mut self, y: usize, x: usize, value: u32) {
        self.cells[y * self.width + x] = value;
    }
}

#[cfg(test)]
pub(crate) fn grid_of<const W: usize>(rows: &[[u32; W]]) -> Grid {
    Grid::from_rows(rows).expect("test grids are rectangular")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_keeps_row_major_order() {
        let grid = grid_of(&[[2, 4, 8], [16, 0, 32]]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cells(), &[2, 4, 8, 16, 0, 32]);
        assert_eq!(grid.get(1, 2), Some(32));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let rows: Vec<Vec<u32>> = vec![vec![2, 4], vec![8]];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::Ragged {
                row: 1,
                len: 1,
                width: 2
            })
        );
    }

    #[test]
    fn test_rows_match_input() {
        let rows: Vec<Vec<u32>> = vec![vec![0, 2], vec![4, 0]];
        let grid = Grid::from_rows(&rows).unwrap();
        let collected: Vec<&[u32]> = grid.rows().collect();
        assert_eq!(collected, vec![&rows[0][..], &rows[1][..]]);
    }

    #[test]
    fn test_square_is_empty() {
        let grid = Grid::square(4);
        assert_eq!(grid.cells().len(), 16);
        assert_eq!(grid.highest_tile(), 0);
    }
}
