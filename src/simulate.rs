//! Draws repeatedly and compares how often each item won with its weight
use anyhow::{bail, Context};
use clap::Parser;
use env_logger::fmt::Formatter;
use log::Record;
use probability_game_rs::round::Round;
use probability_game_rs::selector::{source_for, Item};
use probability_game_rs::settings::{Overrides, Settings};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Items as name=weight, e.g. Pizza=50%
    #[arg()]
    items: Vec<Item>,
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, default_value_t = 100000)]
    trials: usize,
    #[arg(short, long)]
    seed: Option<u64>,
    /// Allow weights that don't add up to 100
    #[arg(short, long)]
    allow_partial: bool,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .format(|buf: &mut Formatter, record: &Record| {
            let timestamp = buf.timestamp_millis();
            writeln!(buf, "[{}] [{}] - {}", timestamp, record.level(), record.args())
        })
        .filter_level(args.verbose.log_level_filter())
        .init();

    if args.trials == 0 {
        bail!("Need at least one trial");
    }
    let settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    }
    .with_overrides(Overrides {
        items: args.items,
        seed: args.seed,
        allow_partial: args.allow_partial,
        ..Overrides::default()
    });

    let round = Round::prepare(&settings.items, settings.require_full_percentage)?;
    let mut rng = source_for(settings.seed);
    let start = Instant::now();
    let tally = round.tally(&mut *rng, args.trials)?;
    log::info!(
        "{} trials in {:.2} seconds",
        args.trials,
        start.elapsed().as_secs_f64()
    );

    println!("Item\tWins\tPercentage\tExpected");
    for (item, wins) in &tally {
        println!(
            "{}\t{}\t{:>5.2}%\t{:>5.2}%",
            item.name,
            wins,
            (100.0 * *wins as f64) / args.trials as f64,
            (100.0 * item.weight) / round.total_weight()
        );
    }
    Ok(())
}
