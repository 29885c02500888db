//! Exhaustive and random traversal of deals.

use std::io::Write;
use std::time::Instant;

use log::debug;

use super::config::{ExploreConfig, ExploreMode};
use super::permutation::next_permutation;
use crate::arena::{GameArena, Stats};
use crate::core::{Deck, GameRng};
use crate::error::ExploreError;
use crate::hand::Strategy;

/// Doubles represent integers exactly up to 2^52, which bounds what can be
/// enumerated with a counter derived from `Stats::num_games`.
const MAX_EXHAUSTIVE_GAMES: f64 = (1u64 << 52) as f64;

/// Feeds deals to a `GameArena` and writes progress reports.
///
/// ## Usage
///
/// ```
/// use war_cycles::explore::{ExploreConfig, Explorer};
///
/// let config = ExploreConfig::default().with_deck(1, 5);
/// let mut explorer = Explorer::new(config).unwrap();
///
/// let mut report = Vec::new();
/// explorer.run(&mut report).unwrap();
///
/// assert_eq!(explorer.stats().num_played, 120);
/// assert_eq!(explorer.stats().num_played_with_cycle, 30);
/// ```
#[derive(Debug)]
pub struct Explorer {
    config: ExploreConfig,
    deck: Deck,
    seed: u64,
    arena: GameArena,
}

impl Explorer {
    /// Validate the configuration and allocate the arena.
    ///
    /// In random mode without a configured seed, one is drawn here so that it
    /// can be reported and reused.
    pub fn new(config: ExploreConfig) -> Result<Self, ExploreError> {
        let deck = config.deck()?;
        let seed = match config.mode {
            ExploreMode::Exhaustive => 0,
            ExploreMode::Random => config.seed.unwrap_or_else(rand::random),
        };
        Ok(Self {
            config,
            deck,
            seed,
            arena: GameArena::new(deck),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ExploreConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> Deck {
        self.deck
    }

    /// Seed of the random stream (0 in exhaustive mode).
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn stats(&self) -> &Stats {
        self.arena.stats()
    }

    /// Report file name: `c<C>v<V>[_opt][_<seed>].txt`.
    #[must_use]
    pub fn output_file_name(&self) -> String {
        let mut name = format!("c{}v{}", self.deck.colors(), self.deck.values());
        if self.config.strategy != Strategy::Natural {
            name.push_str("_opt");
        }
        if self.config.mode == ExploreMode::Random {
            name.push_str(&format!("_{}", self.seed));
        }
        name.push_str(".txt");
        name
    }

    /// Write the report header, then explore in the configured mode.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<(), ExploreError> {
        writeln!(
            out,
            "{} exploration C={} V={}\n",
            self.config.mode,
            self.deck.colors(),
            self.deck.values()
        )?;
        match self.config.mode {
            ExploreMode::Exhaustive => self.exhaustive(out),
            ExploreMode::Random => {
                writeln!(out, "seed={}", self.seed)?;
                self.random(out)
            }
        }
    }

    /// Play every distinct deal once, starting from the sorted deck.
    pub fn exhaustive<W: Write>(&mut self, out: &mut W) -> Result<(), ExploreError> {
        let num_games = self.stats().num_games();
        if num_games > MAX_EXHAUSTIVE_GAMES {
            return Err(ExploreError::TooManyGames(num_games));
        }
        debug!("exhaustive exploration of {} ({:.0} deals)", self.deck, num_games);

        let start = Instant::now();
        // +1 for numerical precision issues
        let mut remaining = num_games as u64 + 1;
        if let Some(max) = self.config.max_games {
            remaining = remaining.min(max);
        }

        let mut cards = self.deck.make();
        let mut snapshot = self.stats().snapshot();
        for _ in 0..remaining {
            self.arena.play(&cards, self.config.strategy);
            self.report_progress(out, &mut snapshot, start)?;
            if !next_permutation(&mut cards) {
                break;
            }
        }

        self.report_final(out, start)
    }

    /// Play seeded random shuffles of the deck until `max_games` is reached.
    ///
    /// Runs forever when `max_games` is unset.
    pub fn random<W: Write>(&mut self, out: &mut W) -> Result<(), ExploreError> {
        debug!("random exploration of {} with seed {}", self.deck, self.seed);

        let start = Instant::now();
        let mut rng = GameRng::new(self.seed);
        let mut cards = self.deck.make();
        let mut snapshot = self.stats().snapshot();
        let mut played = 0u64;
        while self.config.max_games.map_or(true, |max| played < max) {
            rng.shuffle(&mut cards);
            self.arena.play(&cards, self.config.strategy);
            played += 1;
            self.report_progress(out, &mut snapshot, start)?;
        }

        self.report_final(out, start)
    }

    fn report_progress<W: Write>(
        &self,
        out: &mut W,
        snapshot: &mut (u32, Option<u32>),
        start: Instant,
    ) -> Result<(), ExploreError> {
        let stats = self.stats();
        if stats.num_played & self.config.report_mask != 0 || stats.snapshot() == *snapshot {
            return Ok(());
        }
        debug!(
            "{} played, {} with cycle",
            stats.num_played, stats.num_played_with_cycle
        );
        write!(out, "{}", stats)?;
        writeln!(out, "time: {}s", start.elapsed().as_secs())?;
        out.flush()?;
        *snapshot = stats.snapshot();
        Ok(())
    }

    fn report_final<W: Write>(&self, out: &mut W, start: Instant) -> Result<(), ExploreError> {
        write!(out, "{}", self.stats())?;
        writeln!(out, "total time: {}s", start.elapsed().as_secs())?;
        out.flush()?;
        Ok(())
    }
}
