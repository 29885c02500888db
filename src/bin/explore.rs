use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use war_cycles::explore::{ExploreConfig, ExploreMode, Explorer};
use war_cycles::hand::Strategy;

#[derive(Parser, Debug)]
#[command(name = "explore")]
#[command(about = "Search deals of War for the longest game and for games that never end")]
struct Args {
    /// exhaustive | random
    mode: ExploreMode,
    /// natural | optimized
    strategy: Strategy,
    /// Copies of each value (C)
    colors: u32,
    /// Distinct values (V)
    values: u32,
    /// Seed for random mode (drawn at random when omitted)
    seed: Option<u64>,
    /// Directory for the report file
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
    /// Stop after this many deals (random mode runs forever otherwise)
    #[arg(long)]
    max_games: Option<u64>,
    /// Report progress when (played & mask) == 0 and a record changed
    #[arg(long, default_value_t = 0xfffff)]
    report_mask: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = ExploreConfig::default()
        .with_mode(args.mode)
        .with_strategy(args.strategy)
        .with_deck(args.colors, args.values)
        .with_report_mask(args.report_mask);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(max) = args.max_games {
        config = config.with_max_games(max);
    }

    let mut explorer = Explorer::new(config)?;
    let path = args.output_dir.join(explorer.output_file_name());
    let file = File::create(&path)
        .with_context(|| format!("cannot open output file {}", path.display()))?;
    eprintln!("writing report to {}", path.display());

    let mut out = BufWriter::new(file);
    explorer
        .run(&mut out)
        .with_context(|| format!("{} exploration of {} failed", args.mode, explorer.deck()))?;

    print!("{}", explorer.stats());
    Ok(())
}
