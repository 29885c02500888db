//! Core types: cards, deck shapes, and the seeded RNG.
//!
//! Nothing here knows about the rules of the game.

pub mod deck;
pub mod rng;

pub use deck::{Card, Deck};
pub use rng::GameRng;
