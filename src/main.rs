//! Rolls the dice once over a set of weighted items
use anyhow::Context;
use clap::Parser;
use probability_game_rs::history::History;
use probability_game_rs::round::Round;
use probability_game_rs::rules::total_status;
use probability_game_rs::selector::{source_for, total_weight, Item};
use probability_game_rs::settings::{Overrides, Settings};
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

const SPIN_TICK: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Items as name=weight, e.g. Pizza=50%
    #[arg()]
    items: Vec<Item>,
    /// JSON settings file; items given on the command line replace its items
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    seed: Option<u64>,
    /// Record the result in this history file
    #[arg(long)]
    history: Option<PathBuf>,
    /// Allow weights that don't add up to 100
    #[arg(short, long)]
    allow_partial: bool,
    #[arg(long)]
    no_animation: bool,
    #[arg(long)]
    spin_millis: Option<u64>,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn settings_from(args: &Args) -> anyhow::Result<Settings> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    Ok(settings.with_overrides(Overrides {
        items: args.items.clone(),
        seed: args.seed,
        history_file: args.history.clone(),
        allow_partial: args.allow_partial,
        no_animation: args.no_animation,
        spin_millis: args.spin_millis,
    }))
}

fn spin<W: Write>(out: &mut W, duration: Duration) -> io::Result<()> {
    write!(out, "Rolling the dice")?;
    out.flush()?;
    let mut elapsed = Duration::ZERO;
    while elapsed < duration {
        let tick = SPIN_TICK.min(duration - elapsed);
        thread::sleep(tick);
        elapsed += tick;
        write!(out, ".")?;
        out.flush()?;
    }
    writeln!(out)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = settings_from(&args)?;
    let total = total_weight(&settings.items);
    println!("Total: {:.1}% ({})", total, total_status(total));

    let round = Round::prepare(&settings.items, settings.require_full_percentage)?;
    let mut rng = source_for(settings.seed);
    // The winner is decided before the spin; the spin only delays showing it.
    let outcome = round.draw(&mut *rng)?;
    if let Some(duration) = settings.spin_duration() {
        spin(&mut io::stdout(), duration)?;
    }
    println!("Winner: {}", outcome.winner);

    if let Some(path) = &settings.history_file {
        let mut history = History::load(path)?;
        let entry = history.record(&outcome)?;
        log::info!("Recorded game #{} in {}", entry.id, path.display());
        history.save(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_spin_prints_a_dot_per_tick() {
        let mut out = Vec::new();
        spin(&mut out, SPIN_TICK * 2).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Rolling the dice..\n");
    }

    #[test]
    fn test_spin_reports_flush_errors() {
        let err = spin(&mut ClosedPipe, SPIN_TICK).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
