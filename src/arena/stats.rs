//! Running statistics over many played deals.

use log::info;

use crate::core::deck::{Card, Deck};
use crate::rules::{Game, GameResult};

/// Counters and record games accumulated by a `GameArena`.
///
/// Record games are kept as preallocated `Game`s and only re-dealt when a
/// record is broken.
#[derive(Clone, Debug)]
pub struct Stats {
    /// Deals played so far.
    pub num_played: u64,

    /// Deals that never terminate.
    pub num_played_with_cycle: u64,

    longest_len: u32,
    longest: Game,

    shortest_with_cycle_len: Option<u32>,
    shortest_with_cycle: Game,

    num_games: f64,
}

impl Stats {
    /// Create empty statistics for the given deck.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            num_played: 0,
            num_played_with_cycle: 0,
            longest_len: 0,
            longest: Game::new(deck),
            shortest_with_cycle_len: None,
            shortest_with_cycle: Game::new(deck),
            num_games: num_games(deck),
        }
    }

    /// Number of distinct deals, for progress reporting.
    #[must_use]
    pub fn num_games(&self) -> f64 {
        self.num_games
    }

    /// Steps of the longest terminating game so far (0 if none).
    #[must_use]
    pub fn longest_len(&self) -> u32 {
        self.longest_len
    }

    /// The longest terminating game, as initially dealt.
    #[must_use]
    pub fn longest(&self) -> &Game {
        &self.longest
    }

    /// Detection step of the earliest-detected cycle, if any cycle was found.
    #[must_use]
    pub fn shortest_with_cycle_len(&self) -> Option<u32> {
        self.shortest_with_cycle_len
    }

    /// The cycling game with the earliest detection, as initially dealt.
    #[must_use]
    pub fn shortest_with_cycle(&self) -> Option<&Game> {
        self.shortest_with_cycle_len.map(|_| &self.shortest_with_cycle)
    }

    /// The record lengths. Only meant to be compared with an earlier
    /// snapshot to tell whether any record changed.
    #[must_use]
    pub fn snapshot(&self) -> (u32, Option<u32>) {
        (self.longest_len, self.shortest_with_cycle_len)
    }

    /// Account for one played deal.
    pub fn record(&mut self, cards: &[Card], result: GameResult) {
        self.num_played += 1;

        if result.is_cycle() {
            self.num_played_with_cycle += 1;
            let improves = self
                .shortest_with_cycle_len
                .map_or(true, |best| result.num_steps < best);
            if improves {
                self.shortest_with_cycle_len = Some(result.num_steps);
                self.shortest_with_cycle.deal(cards);
                info!(
                    "new shortest game with cycle ({}): {} {}",
                    result.num_steps,
                    self.shortest_with_cycle.left(),
                    self.shortest_with_cycle.right()
                );
            }
        } else if result.num_steps > self.longest_len {
            self.longest_len = result.num_steps;
            self.longest.deal(cards);
            info!(
                "new longest game ({}): {} {}",
                self.longest_len,
                self.longest.left(),
                self.longest.right()
            );
        }
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} loops found after {}/{:.0}",
            self.num_played_with_cycle, self.num_played, self.num_games
        )?;
        if let Some(len) = self.shortest_with_cycle_len {
            writeln!(f, "shortest game with cycle ({}):", len)?;
            writeln!(f, "left={}", self.shortest_with_cycle.left())?;
            writeln!(f, "right={}", self.shortest_with_cycle.right())?;
        }
        writeln!(f, "longest game ({}):", self.longest_len)?;
        writeln!(f, "left={}", self.longest.left())?;
        writeln!(f, "right={}", self.longest.right())
    }
}

/// Number of distinct deals: `(C·V)! / (C!)^V`, halved for an even number of
/// cards since swapping the two halves gives a mirrored game.
///
/// Computed as `Π binom(v·C, C)` for `v` in `1..=V`, which stays exact as
/// long as the result fits in an `f64` mantissa.
#[must_use]
pub fn num_games(deck: Deck) -> f64 {
    let colors = deck.colors() as u64;
    let mut total = 1.0f64;
    for v in 1..=deck.values() as u64 {
        total *= binomial(v * colors, colors);
    }
    if deck.num_cards() % 2 == 0 {
        total / 2.0
    } else {
        total
    }
}

fn binomial(n: u64, k: u64) -> f64 {
    let mut result = 1.0f64;
    for i in 1..=k {
        result = result * (n - k + i) as f64 / i as f64;
    }
    result.round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Winner;

    #[test]
    fn test_num_games() {
        assert!((Stats::new(Deck::new(1, 5)).num_games() - 120.0).abs() < 0.01);
        assert!((Stats::new(Deck::new(4, 5)).num_games() - 152_770_117_500.0).abs() < 0.01);
    }

    #[test]
    fn test_num_games_halving() {
        // 6!/(2!)^3 = 90 deals, even count
        assert_eq!(num_games(Deck::new(2, 3)), 45.0);
        // 7! = 5040 deals, odd count
        assert_eq!(num_games(Deck::seq(7)), 5040.0);
        // 6! = 720 deals, even count
        assert_eq!(num_games(Deck::seq(6)), 360.0);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(4, 4), 1.0);
        assert_eq!(binomial(8, 4), 70.0);
        assert_eq!(binomial(52, 4), 270_725.0);
    }

    #[test]
    fn test_record_longest() {
        let mut stats = Stats::new(Deck::seq(3));

        stats.record(&[1, 2, 3], GameResult::new(Winner::Right, 2));
        stats.record(&[3, 2, 1], GameResult::new(Winner::Left, 1));
        stats.record(&[2, 1, 3], GameResult::new(Winner::Right, 2));

        assert_eq!(stats.num_played, 3);
        assert_eq!(stats.num_played_with_cycle, 0);
        assert_eq!(stats.longest_len(), 2);
        // Ties with the record keep the first game
        assert_eq!(stats.longest().left().to_string(), "[1]");
        assert_eq!(stats.longest().right().to_string(), "[2,3]");
        assert!(stats.shortest_with_cycle().is_none());
    }

    #[test]
    fn test_record_shortest_cycle() {
        let mut stats = Stats::new(Deck::seq(5));

        stats.record(&[1, 2, 3, 4, 5], GameResult::new(Winner::Cycle, 9));
        assert_eq!(stats.shortest_with_cycle_len(), Some(9));

        stats.record(&[5, 3, 2, 4, 1], GameResult::new(Winner::Cycle, 6));
        stats.record(&[5, 4, 3, 2, 1], GameResult::new(Winner::Cycle, 7));

        assert_eq!(stats.num_played, 3);
        assert_eq!(stats.num_played_with_cycle, 3);
        assert_eq!(stats.shortest_with_cycle_len(), Some(6));
        let game = stats.shortest_with_cycle().unwrap();
        assert_eq!(game.left().to_string(), "[5,3]");
        assert_eq!(game.right().to_string(), "[2,4,1]");
        // Cycles never count as long games
        assert_eq!(stats.longest_len(), 0);
    }

    #[test]
    fn test_snapshot_changes_on_record() {
        let mut stats = Stats::new(Deck::seq(2));
        let before = stats.snapshot();

        stats.record(&[1, 2], GameResult::new(Winner::Right, 1));

        assert_ne!(stats.snapshot(), before);
        assert_eq!(stats.snapshot(), (1, None));
    }

    #[test]
    fn test_display() {
        let mut stats = Stats::new(Deck::seq(5));
        stats.record(&[5, 3, 2, 4, 1], GameResult::new(Winner::Cycle, 6));
        stats.record(&[1, 4, 2, 3, 5], GameResult::new(Winner::Right, 8));

        let report = stats.to_string();
        assert_eq!(
            report,
            "1 loops found after 2/120\n\
             shortest game with cycle (6):\n\
             left=[5,3]\n\
             right=[2,4,1]\n\
             longest game (8):\n\
             left=[1,4]\n\
             right=[2,3,5]\n"
        );
    }

    #[test]
    fn test_display_without_cycle() {
        let stats = Stats::new(Deck::seq(2));
        assert!(!stats.to_string().contains("cycle"));
    }
}
