//! Errors surfaced by the exploration driver.
//!
//! The game engine itself never returns errors: misuse of a `Hand`, `Game`
//! or `GameArena` is a bug in the caller and panics.

use thiserror::Error;

/// Errors that can occur while configuring or running an exploration.
#[derive(Debug, Error)]
pub enum ExploreError {
    #[error("invalid strategy '{0}', expected 'natural' or 'optimized'")]
    UnknownStrategy(String),

    #[error("invalid exploration mode '{0}', expected 'exhaustive' or 'random'")]
    UnknownMode(String),

    #[error("invalid deck C={colors} V={values}: need C >= 1, 1 <= V <= 255 and C*V to fit in a u32")]
    InvalidDeck { colors: u32, values: u32 },

    #[error("too many games to explore ({0:.0}), use the 'random' mode")]
    TooManyGames(f64),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
