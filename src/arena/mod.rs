//! Playing whole deals.
//!
//! `GameArena` classifies a deal as a win, a draw, or a cycle using two
//! copies of the game moving at different speeds, so no history of states is
//! ever stored. `Stats` keeps the counters and record games across deals.

pub mod play;
pub mod stats;

pub use play::GameArena;
pub use stats::{num_games, Stats};
