//! Exploration configuration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::deck::Deck;
use crate::error::ExploreError;
use crate::hand::Strategy;

/// How deals are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExploreMode {
    /// Every distinct deal once, in lexicographic order.
    #[default]
    Exhaustive,
    /// Seeded random shuffles, until the game limit (if any).
    Random,
}

impl ExploreMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ExploreMode::Exhaustive => "exhaustive",
            ExploreMode::Random => "random",
        }
    }
}

impl std::fmt::Display for ExploreMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExploreMode {
    type Err = ExploreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exhaustive" => Ok(ExploreMode::Exhaustive),
            "random" => Ok(ExploreMode::Random),
            other => Err(ExploreError::UnknownMode(other.to_string())),
        }
    }
}

/// Exploration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExploreConfig {
    /// Exhaustive enumeration or random sampling.
    pub mode: ExploreMode,

    /// Order in which won cards are returned.
    pub strategy: Strategy,

    /// Copies of each value (C).
    pub colors: u32,

    /// Distinct values (V).
    pub values: u32,

    /// Seed for random mode. Drawn at random when unset.
    /// Ignored in exhaustive mode.
    pub seed: Option<u64>,

    /// Stop after this many deals (None = exhaustive: all deals,
    /// random: forever).
    pub max_games: Option<u64>,

    /// A progress report is written when `num_played & report_mask == 0`
    /// and a record changed since the last report.
    pub report_mask: u64,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            mode: ExploreMode::Exhaustive,
            strategy: Strategy::Natural,
            colors: 1,
            values: 10,
            seed: None,
            max_games: None,
            report_mask: 0xfffff,
        }
    }
}

impl ExploreConfig {
    pub fn with_mode(mut self, mode: ExploreMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the deck shape (C copies of V values).
    pub fn with_deck(mut self, colors: u32, values: u32) -> Self {
        self.colors = colors;
        self.values = values;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_games(mut self, max_games: u64) -> Self {
        self.max_games = Some(max_games);
        self
    }

    pub fn with_report_mask(mut self, mask: u64) -> Self {
        self.report_mask = mask;
        self
    }

    /// Check the deck shape and build it.
    pub fn deck(&self) -> Result<Deck, ExploreError> {
        Deck::try_new(self.colors, self.values)
    }
}
