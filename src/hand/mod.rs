//! Player hands.
//!
//! A hand is a ring buffer sized for the whole deck, so dealing and playing
//! any number of games never allocates. `Strategy` decides the order in
//! which won cards go back under the winner's hand.

pub mod ring;
pub mod strategy;

pub use ring::Hand;
pub use strategy::Strategy;
