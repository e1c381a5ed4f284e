mod error;
mod game_session;
mod grid;
mod line;
mod placement;
mod shift;
mod transform;
mod types;

pub use error::GridError;
pub use game_session::GameSession;
pub use grid::Grid;
pub use line::compress_line;
pub use placement::{empty_positions, is_terminal, put, random_insert, random_tile_value};
pub use shift::{shift, shift_down, shift_right, shift_up};
pub use transform::{reverse_rows, shift_left, transpose};
pub use types::{Direction, GameStatus, Position, ShiftOutcome};
