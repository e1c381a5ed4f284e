use super::error::GridError;
use super::grid::Grid;
use super::placement::{is_terminal, random_insert, random_tile_value};
use super::shift::shift;
use super::types::{Direction, GameStatus, ShiftOutcome};
use crate::games::session_rng::TileRng;

const INITIAL_TILES: usize = 2;

/// One game in progress. The caller owns it and threads the random source through every
/// call; the grid operations underneath stay pure.
#[derive(Clone, Debug)]
pub struct GameSession {
    grid: Grid,
    score: u64,
    target_value: Option<u32>,
    status: GameStatus,
    moves_made: u32,
}

impl GameSession {
    /// Empty `size x size` board with two random tiles.
    pub fn new<R: TileRng + ?Sized>(
        size: usize,
        target_value: Option<u32>,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid = Grid::square(size);
        for _ in 0..INITIAL_TILES {
            let value = random_tile_value(rng);
            grid = random_insert(&grid, value, rng)?;
        }
        Ok(Self::from_grid(grid, target_value))
    }

    /// Resumes play from an arbitrary position with a zero score.
    pub fn from_grid(grid: Grid, target_value: Option<u32>) -> Self {
        let status = status_of(&grid, target_value);
        Self {
            grid,
            score: 0,
            target_value,
            status,
            moves_made: 0,
        }
    }

    pub fn preview(&self, direction: Direction) -> ShiftOutcome {
        shift(&self.grid, direction)
    }

    /// Returns `Ok(false)` when the game is over or the move would not change the grid.
    pub fn apply_move<R: TileRng + ?Sized>(
        &mut self,
        direction: Direction,
        rng: &mut R,
    ) -> Result<bool, GridError> {
        if self.status != GameStatus::InProgress {
            return Ok(false);
        }

        let outcome = self.preview(direction);
        if outcome.grid == self.grid {
            return Ok(false);
        }

        let value = random_tile_value(rng);
        let grid = random_insert(&outcome.grid, value, rng)?;

        self.score = self.score.saturating_add(outcome.score_gained());
        self.moves_made += 1;
        self.status = status_of(&grid, self.target_value);
        self.grid = grid;

        Ok(true)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn highest_tile(&self) -> u32 {
        self.grid.highest_tile()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn size(&self) -> usize {
        self.grid.width()
    }
}

fn status_of(grid: &Grid, target_value: Option<u32>) -> GameStatus {
    if target_value.is_some_and(|target| grid.highest_tile() >= target) {
        GameStatus::Won
    } else if is_terminal(grid) {
        GameStatus::Lost
    } else {
        GameStatus::InProgress
    }
}
