//! # war-cycles
//!
//! A deterministic simulator for the two-player card game War, built to
//! find out which deals never end.
//!
//! ## Design Principles
//!
//! 1. **No allocation per game**: hands are ring buffers sized for the whole
//!    deck and are re-dealt, never rebuilt, between games.
//!
//! 2. **Constant memory cycle detection**: a slow and a fast copy of the
//!    game walk the sequence of states; they meet only if the game loops.
//!
//! 3. **Panics for misuse**: dealing the wrong number of cards or popping an
//!    empty hand is a bug in the caller, not a recoverable error. Only the
//!    exploration driver returns `Result`s.
//!
//! ## Modules
//!
//! - `core`: Cards, deck shapes, seeded RNG
//! - `hand`: Ring-buffer hands and card-return strategies
//! - `rules`: One game, played round by round
//! - `arena`: Whole-deal playout with cycle detection, and statistics
//! - `explore`: Exhaustive and random traversal of deals, reports

pub mod core;
pub mod hand;
pub mod rules;
pub mod arena;
pub mod explore;
pub mod error;

// Re-export commonly used types
pub use crate::core::{Card, Deck, GameRng};

pub use crate::hand::{Hand, Strategy};

pub use crate::rules::{Game, GameResult, Winner};

pub use crate::arena::{GameArena, Stats};

pub use crate::explore::{next_permutation, ExploreConfig, ExploreMode, Explorer};

pub use crate::error::ExploreError;
