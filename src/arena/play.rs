//! Cycle-aware playout.

use crate::core::deck::{Card, Deck};
use crate::hand::Strategy;
use crate::rules::{Game, GameResult, Winner};

use super::stats::Stats;

/// Plays many deals of one deck shape and keeps statistics.
///
/// The two games used for cycle detection are allocated once and re-dealt
/// on every call to `play`.
///
/// ## Usage
///
/// ```
/// use war_cycles::arena::GameArena;
/// use war_cycles::core::Deck;
/// use war_cycles::hand::Strategy;
/// use war_cycles::rules::Winner;
///
/// let mut arena = GameArena::new(Deck::seq(5));
/// let result = arena.play(&[5, 3, 2, 4, 1], Strategy::Natural);
///
/// assert_eq!(result.winner, Winner::Cycle);
/// assert_eq!(arena.stats().num_played_with_cycle, 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameArena {
    slow: Game,
    fast: Game,
    stats: Stats,
}

impl GameArena {
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            slow: Game::new(deck),
            fast: Game::new(deck),
            stats: Stats::new(deck),
        }
    }

    #[must_use]
    pub fn deck(&self) -> Deck {
        self.slow.deck()
    }

    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Play `cards` until one side runs out or the game provably loops.
    ///
    /// The left player gets the first half of `cards`, the right player the
    /// second half; with an odd count the left player gets one card less.
    pub fn play(&mut self, cards: &[Card], strategy: Strategy) -> GameResult {
        let result = self.play_to_end(cards, strategy);
        self.stats.record(cards, result);
        result
    }

    /// Floyd's two-speed traversal over the sequence of game states: the fast
    /// game moves two rounds for each round of the slow one, and they meet
    /// again only if the state sequence loops.
    fn play_to_end(&mut self, cards: &[Card], strategy: Strategy) -> GameResult {
        match cards.len() {
            0 => return GameResult::new(Winner::Draw, 0),
            1 => return GameResult::new(Winner::Right, 0),
            _ => {}
        }

        self.slow.deal(cards);
        self.fast.deal(cards);

        if self.fast.step(strategy) {
            return GameResult::new(self.fast.winner(), 1);
        }

        let mut steps = 1;
        while self.slow != self.fast {
            self.slow.step(strategy);
            if self.fast.step(strategy) {
                return GameResult::new(self.fast.winner(), 2 * steps);
            }
            if self.fast.step(strategy) {
                return GameResult::new(self.fast.winner(), 2 * steps + 1);
            }
            steps += 1;
        }

        GameResult::new(Winner::Cycle, steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(left: &[Card], right: &[Card]) -> Vec<Card> {
        [left, right].concat()
    }

    #[test]
    fn test_degenerate_decks() {
        let mut arena = GameArena::new(Deck::seq(1));
        assert_eq!(
            arena.play(&[1], Strategy::Natural),
            GameResult::new(Winner::Right, 0)
        );
        assert_eq!(arena.stats().num_played, 1);
    }

    #[test]
    fn test_first_step_terminal() {
        let mut arena = GameArena::new(Deck::seq(2));
        let result = arena.play(&cards(&[2], &[1]), Strategy::Natural);
        assert_eq!(result, GameResult::new(Winner::Left, 1));
    }

    #[test]
    fn test_even_and_odd_terminal_steps() {
        let mut arena = GameArena::new(Deck::new(2, 3));
        let result = arena.play(&cards(&[1, 3, 3], &[1, 2, 2]), Strategy::Natural);
        assert_eq!(result, GameResult::new(Winner::Left, 2));

        let mut arena = GameArena::new(Deck::new(4, 2));
        let result = arena.play(&cards(&[1, 1, 2, 2], &[2, 2, 1, 1]), Strategy::Natural);
        assert_eq!(result, GameResult::new(Winner::Draw, 5));
    }

    #[test]
    fn test_cycle_detection() {
        let mut arena = GameArena::new(Deck::seq(5));
        let result = arena.play(&cards(&[5, 3], &[2, 4, 1]), Strategy::Natural);
        assert_eq!(result, GameResult::new(Winner::Cycle, 6));
        assert_eq!(arena.stats().shortest_with_cycle_len(), Some(6));
    }

    #[test]
    fn test_input_untouched() {
        let mut arena = GameArena::new(Deck::seq(5));
        let deal = cards(&[5, 3], &[2, 4, 1]);
        let copy = deal.clone();

        arena.play(&deal, Strategy::Optimized);

        assert_eq!(deal, copy);
    }

    #[test]
    fn test_reuse_between_plays() {
        let mut arena = GameArena::new(Deck::seq(5));
        let looping = cards(&[5, 3], &[2, 4, 1]);
        let first = arena.play(&looping, Strategy::Natural);
        arena.play(&[1, 2, 3, 4, 5], Strategy::Natural);
        let again = arena.play(&looping, Strategy::Natural);

        assert_eq!(first, again);
        assert_eq!(arena.stats().num_played, 3);
        assert_eq!(arena.stats().num_played_with_cycle, 2);
    }
}
