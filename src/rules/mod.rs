//! Rules of War.
//!
//! `Game` resolves one round at a time and never looks further ahead. Cycle
//! detection over whole games lives in `arena`.

pub mod engine;

pub use engine::{Game, GameResult, Winner};
