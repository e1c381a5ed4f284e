//! Grid engine and session plumbing for a sliding-tile merge puzzle.
//!
//! The grid operations in [`games::puzzle2048`] are pure: each takes a grid and returns a
//! new one. Randomness comes in through [`games::TileRng`].

pub mod config;
pub mod games;
pub mod logger;
