//! One game of War between a left and a right player.
//!
//! Each round both players reveal their top card. The higher card takes
//! both. Equal cards start a tie chain: the players keep revealing until
//! the cards differ, and the winner takes the whole chain. A tie that
//! exhausts either hand ends the game on the spot and the tied cards are
//! lost.

use serde::{Deserialize, Serialize};

use crate::core::deck::{Card, Deck};
use crate::hand::{Hand, Strategy};

/// Outcome of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// The right hand ran out.
    Left,
    /// The left hand ran out.
    Right,
    /// Both hands ran out together.
    Draw,
    /// The game reached a state it had already been in and never ends.
    Cycle,
}

/// Result of playing a deal to the end or to a detected cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Winner,
    /// Rounds played for a terminating game; for a cycle, the round at which
    /// the repetition was detected (not the period).
    pub num_steps: u32,
}

impl GameResult {
    #[must_use]
    pub const fn new(winner: Winner, num_steps: u32) -> Self {
        Self { winner, num_steps }
    }

    /// Check if the deal never terminates.
    #[must_use]
    pub fn is_cycle(&self) -> bool {
        self.winner == Winner::Cycle
    }
}

/// Two hands and the scratch space needed to resolve ties.
///
/// All buffers are sized from the deck at construction and reused by every
/// `deal`.
#[derive(Clone, Debug)]
pub struct Game {
    deck: Deck,
    left: Hand,
    right: Hand,
    /// One entry per tied pair: both cards are equal by definition.
    ties: Box<[Card]>,
    num_ties: usize,
}

impl Game {
    /// Create a game with empty hands for the given deck.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        let num_cards = deck.num_cards();
        Self {
            deck,
            left: Hand::new(num_cards),
            right: Hand::new(num_cards),
            ties: vec![0; num_cards].into_boxed_slice(),
            num_ties: 0,
        }
    }

    /// Split `cards` between the players: the left hand gets the first half.
    /// With an odd count the left hand gets one card less.
    pub fn deal(&mut self, cards: &[Card]) {
        assert_eq!(
            cards.len(),
            self.deck.num_cards(),
            "Deal must use every card of the deck"
        );
        let (left, right) = cards.split_at(cards.len() / 2);
        self.left.assign(left);
        self.right.assign(right);
    }

    #[must_use]
    pub fn deck(&self) -> Deck {
        self.deck
    }

    #[must_use]
    pub fn left(&self) -> &Hand {
        &self.left
    }

    #[must_use]
    pub fn right(&self) -> &Hand {
        &self.right
    }

    /// Check if either hand is empty.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.left.is_empty() || self.right.is_empty()
    }

    /// Play one round, including any tie chain.
    ///
    /// Returns true if either hand is empty afterwards. Must not be called
    /// once the game is terminal.
    pub fn step(&mut self, strategy: Strategy) -> bool {
        debug_assert_eq!(self.num_ties, 0);

        let mut l = self.left.pop();
        let mut r = self.right.pop();
        while l == r {
            self.ties[self.num_ties] = l;
            self.num_ties += 1;
            if self.is_terminal() {
                self.num_ties = 0;
                return true;
            }
            l = self.left.pop();
            r = self.right.pop();
        }

        let ties = &mut self.ties[..self.num_ties];
        if r < l {
            self.left.push_all(l, r, ties, strategy);
        } else {
            self.right.push_all(r, l, ties, strategy);
        }
        self.num_ties = 0;
        self.is_terminal()
    }

    /// The winner of a terminal game.
    ///
    /// Only checked in debug builds. On a game still in progress a release
    /// build reports `Left`.
    #[must_use]
    pub fn winner(&self) -> Winner {
        debug_assert!(self.is_terminal(), "Game is not over");
        match (self.left.is_empty(), self.right.is_empty()) {
            (true, true) => Winner::Draw,
            (true, false) => Winner::Right,
            _ => Winner::Left,
        }
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        assert_eq!(self.num_ties, 0, "Cannot compare a game with pending ties");
        assert_eq!(other.num_ties, 0, "Cannot compare a game with pending ties");
        assert_eq!(self.deck, other.deck, "Cannot compare games of different decks");
        self.left == other.left && self.right == other.right
    }
}

impl Eq for Game {}
