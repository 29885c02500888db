//! Card-return ordering policies.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ExploreError;

/// Order in which the winner of a round puts the won cards under its hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Winning card, losing card, then the tied pairs from last to first.
    #[default]
    Natural,
    /// All won cards in descending order of value.
    ///
    /// Experimental: used to study whether return order affects cycling.
    Optimized,
}

impl Strategy {
    /// Lowercase name, as accepted by `from_str`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Natural => "natural",
            Strategy::Optimized => "optimized",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ExploreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "natural" => Ok(Strategy::Natural),
            "optimized" => Ok(Strategy::Optimized),
            other => Err(ExploreError::UnknownStrategy(other.to_string())),
        }
    }
}
