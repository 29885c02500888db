//! Exploration driver tests.

use war_cycles::arena::GameArena;
use war_cycles::core::Deck;
use war_cycles::explore::{next_permutation, ExploreConfig, ExploreMode, Explorer};
use war_cycles::hand::Strategy;
use war_cycles::ExploreError;

fn run(config: ExploreConfig) -> (Explorer, String) {
    let mut explorer = Explorer::new(config).unwrap();
    let mut out = Vec::new();
    explorer.run(&mut out).unwrap();
    (explorer, String::from_utf8(out).unwrap())
}

// =============================================================================
// Exhaustive Mode
// =============================================================================

#[test]
fn test_exhaustive_matches_manual_enumeration() {
    let deck = Deck::seq(6);
    let mut arena = GameArena::new(deck);
    let mut cards = deck.make();
    loop {
        arena.play(&cards, Strategy::Natural);
        if !next_permutation(&mut cards) {
            break;
        }
    }

    // Seq(6) has an even count: only half the orderings are played
    let (explorer, _) = run(ExploreConfig::default().with_deck(1, 6));

    assert_eq!(arena.stats().num_played, 720);
    assert_eq!(explorer.stats().num_played, 361);
    assert_eq!(arena.stats().num_played_with_cycle, 0);
    assert_eq!(explorer.stats().num_played_with_cycle, 0);
    assert_eq!(arena.stats().longest_len(), 15);
}

#[test]
fn test_exhaustive_report() {
    let (_, report) = run(ExploreConfig::default().with_deck(1, 5));

    assert!(report.starts_with("exhaustive exploration C=1 V=5\n\n"));
    assert!(report.contains("30 loops found after 120/120\n"));
    assert!(report.contains("shortest game with cycle (6):\n"));
    assert!(report.contains("longest game (8):\nleft=[1,4]\nright=[2,3,5]\n"));
    assert!(report.contains("total time: "));
}

#[test]
fn test_optimized_strategy_on_distinct_values() {
    // Decks without repeated values never tie, so the strategy is irrelevant
    let (natural, _) = run(ExploreConfig::default().with_deck(1, 5));
    let (optimized, _) = run(
        ExploreConfig::default()
            .with_deck(1, 5)
            .with_strategy(Strategy::Optimized),
    );

    assert_eq!(natural.stats().snapshot(), optimized.stats().snapshot());
    assert_eq!(
        natural.stats().num_played_with_cycle,
        optimized.stats().num_played_with_cycle
    );
}

#[test]
fn test_exhaustive_refuses_huge_decks() {
    let mut explorer = Explorer::new(ExploreConfig::default().with_deck(4, 8)).unwrap();
    let mut out = Vec::new();

    let err = explorer.run(&mut out).unwrap_err();

    assert!(matches!(err, ExploreError::TooManyGames(_)));
    assert!(err.to_string().contains("use the 'random' mode"));
}

// =============================================================================
// Random Mode
// =============================================================================

#[test]
fn test_random_seed_in_report_and_file_name() {
    let config = ExploreConfig::default()
        .with_mode(ExploreMode::Random)
        .with_deck(4, 8)
        .with_seed(2024)
        .with_max_games(50);
    let (explorer, report) = run(config);

    assert_eq!(explorer.seed(), 2024);
    assert_eq!(explorer.output_file_name(), "c4v8_2024.txt");
    assert!(report.contains("seed=2024\n"));
    assert_eq!(explorer.stats().num_played, 50);
}

#[test]
fn test_random_without_seed_draws_one() {
    let config = ExploreConfig::default()
        .with_mode(ExploreMode::Random)
        .with_deck(2, 4)
        .with_max_games(5);
    let explorer = Explorer::new(config).unwrap();

    let name = explorer.output_file_name();
    assert_eq!(name, format!("c2v4_{}.txt", explorer.seed()));
}

#[test]
fn test_random_same_seed_same_records() {
    let config = ExploreConfig::default()
        .with_mode(ExploreMode::Random)
        .with_deck(2, 7)
        .with_seed(11)
        .with_max_games(300);

    let (a, _) = run(config.clone());
    let (b, _) = run(config);

    assert_eq!(a.stats().to_string(), b.stats().to_string());
}

// =============================================================================
// Configuration Errors
// =============================================================================

#[test]
fn test_invalid_deck_rejected() {
    let err = Explorer::new(ExploreConfig::default().with_deck(0, 8)).unwrap_err();
    assert!(matches!(err, ExploreError::InvalidDeck { colors: 0, values: 8 }));
}

#[test]
fn test_unknown_names() {
    assert!(matches!(
        "sometimes".parse::<ExploreMode>(),
        Err(ExploreError::UnknownMode(_))
    ));
    assert!(matches!(
        "clever".parse::<Strategy>(),
        Err(ExploreError::UnknownStrategy(_))
    ));
}
