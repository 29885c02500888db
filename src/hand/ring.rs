//! Fixed-capacity circular card queue.
//!
//! A `Hand` never reallocates: the buffer is sized once for the whole deck
//! plus one sentinel slot, so `start == end` always means empty and a full
//! hand still leaves one slot unused.

use super::strategy::Strategy;
use crate::core::deck::Card;

/// One player's pile of cards. Cards are taken from the top and added at
/// the bottom.
///
/// ## Usage
///
/// ```
/// use war_cycles::hand::Hand;
///
/// let mut hand = Hand::new(3);
/// hand.push(2);
/// hand.push(5);
/// assert_eq!(hand.pop(), 2);
/// assert_eq!(hand.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Hand {
    buffer: Box<[Card]>,
    /// Index of the top card.
    start: usize,
    /// Index one past the bottom card.
    end: usize,
}

impl Hand {
    /// Create an empty hand able to hold `max_cards` cards.
    #[must_use]
    pub fn new(max_cards: usize) -> Self {
        Self {
            buffer: vec![0; max_cards + 1].into_boxed_slice(),
            start: 0,
            end: 0,
        }
    }

    /// Maximum number of cards the hand can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len() - 1
    }

    /// Replace the contents with `cards`, top card first.
    pub fn assign(&mut self, cards: &[Card]) {
        assert!(
            cards.len() < self.buffer.len(),
            "Cannot assign {} cards to a hand of capacity {}",
            cards.len(),
            self.capacity()
        );
        self.buffer[..cards.len()].copy_from_slice(cards);
        self.start = 0;
        self.end = cards.len();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of cards currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.end >= self.start {
            self.end - self.start
        } else {
            self.buffer.len() - self.start + self.end
        }
    }

    /// Remove the top card.
    pub fn pop(&mut self) -> Card {
        assert!(!self.is_empty(), "Cannot pop from an empty hand");
        let card = self.buffer[self.start];
        self.start += 1;
        if self.start == self.buffer.len() {
            self.start = 0;
        }
        card
    }

    /// Add a card at the bottom.
    ///
    /// The capacity check is a `debug_assert!` since this runs on every
    /// round. In release builds, pushing into a full hand wraps the cursors
    /// and the hand then reads as empty.
    pub fn push(&mut self, card: Card) {
        debug_assert!(self.len() < self.capacity(), "Hand is full");
        self.buffer[self.end] = card;
        self.end += 1;
        if self.end == self.buffer.len() {
            self.end = 0;
        }
    }

    /// Put the cards won in a round at the bottom.
    ///
    /// `hi` and `lo` are the deciding cards (`hi > lo`). Each entry of `ties`
    /// stands for a pair of equal cards and is pushed twice. `Optimized`
    /// sorts `ties` in place.
    pub fn push_all(&mut self, hi: Card, lo: Card, ties: &mut [Card], strategy: Strategy) {
        debug_assert!(lo < hi);
        match strategy {
            Strategy::Natural => {
                self.push(hi);
                self.push(lo);
                for &card in ties.iter().rev() {
                    self.push(card);
                    self.push(card);
                }
            }
            Strategy::Optimized => {
                ties.sort_unstable_by(|a, b| b.cmp(a));
                let mut rest = ties.iter().copied().peekable();
                while let Some(card) = rest.next_if(|&c| hi < c) {
                    self.push(card);
                    self.push(card);
                }
                self.push(hi);
                while let Some(card) = rest.next_if(|&c| lo < c) {
                    self.push(card);
                    self.push(card);
                }
                self.push(lo);
                for card in rest {
                    self.push(card);
                    self.push(card);
                }
            }
        }
    }

    /// The cards as two contiguous runs, top card first.
    #[must_use]
    pub fn as_slices(&self) -> (&[Card], &[Card]) {
        if self.end >= self.start {
            (&self.buffer[self.start..self.end], &[])
        } else {
            (&self.buffer[self.start..], &self.buffer[..self.end])
        }
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        let (head, tail) = self.as_slices();
        head.iter().chain(tail).copied()
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        assert_eq!(
            self.buffer.len(),
            other.buffer.len(),
            "Cannot compare hands of different capacity"
        );
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Hand {}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", card)?;
        }
        f.write_str("]")
    }
}
