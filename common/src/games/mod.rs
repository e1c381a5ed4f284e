mod session_rng;

pub mod puzzle2048;

pub use session_rng::{SessionRng, TileRng};
