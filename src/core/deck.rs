//! Card populations.
//!
//! A `Deck` is purely combinatorial: `colors` copies of every value in
//! `1..=values`. Colors are forgotten once cards are dealt, so two cards of
//! the same value are indistinguishable.

use serde::{Deserialize, Serialize};

use crate::error::ExploreError;

/// A card rank in `1..=values`.
pub type Card = u8;

/// Shape of a card population: `colors` copies of each value `1..=values`.
///
/// Always valid: at least one color, `1..=255` values, and a card count that
/// fits in a `u32`. Deserialization goes through the same checks as
/// `try_new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDeck")]
pub struct Deck {
    colors: u32,
    values: u32,
}

/// Unchecked wire form of a `Deck`.
#[derive(Deserialize)]
struct RawDeck {
    colors: u32,
    values: u32,
}

impl TryFrom<RawDeck> for Deck {
    type Error = ExploreError;

    fn try_from(raw: RawDeck) -> Result<Self, Self::Error> {
        Deck::try_new(raw.colors, raw.values)
    }
}

impl Deck {
    /// Create a deck shape.
    ///
    /// Panics if the shape is invalid; see `try_new`.
    #[must_use]
    pub fn new(colors: u32, values: u32) -> Self {
        assert!(colors >= 1, "Deck must have at least 1 color");
        assert!(values >= 1, "Deck must have at least 1 value");
        assert!(values <= Card::MAX as u32, "At most 255 values supported");
        assert!(colors.checked_mul(values).is_some(), "Too many cards in deck");
        Self { colors, values }
    }

    /// Create a deck shape, rejecting zero dimensions, values that do not
    /// fit in a `Card`, and card counts that overflow a `u32`.
    pub fn try_new(colors: u32, values: u32) -> Result<Self, ExploreError> {
        let valid = colors >= 1
            && (1..=Card::MAX as u32).contains(&values)
            && colors.checked_mul(values).is_some();
        if valid {
            Ok(Self { colors, values })
        } else {
            Err(ExploreError::InvalidDeck { colors, values })
        }
    }

    /// Copies of each value (C).
    #[must_use]
    pub const fn colors(&self) -> u32 {
        self.colors
    }

    /// Distinct values (V).
    #[must_use]
    pub const fn values(&self) -> u32 {
        self.values
    }

    /// One card of each value `1..=values`.
    #[must_use]
    pub fn seq(values: u32) -> Self {
        Self::new(1, values)
    }

    /// The 32-card piquet deck: 4 colors of 8 values.
    #[must_use]
    pub fn standard32() -> Self {
        Self::new(4, 8)
    }

    /// 4 colors of 13 values.
    #[must_use]
    pub fn standard54() -> Self {
        Self::new(4, 13)
    }

    /// Total number of cards (C·V).
    #[must_use]
    pub const fn num_cards(&self) -> usize {
        (self.colors * self.values) as usize
    }

    /// Unshuffled cards: `1, 1, .., 2, 2, .., values, values`.
    ///
    /// ```
    /// use war_cycles::core::Deck;
    ///
    /// assert_eq!(Deck::new(2, 3).make(), vec![1, 1, 2, 2, 3, 3]);
    /// ```
    #[must_use]
    pub fn make(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.num_cards());
        for value in 1..=self.values {
            for _ in 0..self.colors {
                cards.push(value as Card);
            }
        }
        cards
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "C={} V={}", self.colors, self.values)
    }
}
