//! Lists or clears the games recorded in a history file
use clap::Parser;
use probability_game_rs::history::History;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg()]
    history_file: PathBuf,
    /// How many of the most recent games to show
    #[arg(short('n'), long, default_value_t = 20)]
    count: usize,
    /// Remove every recorded game
    #[arg(long)]
    clear: bool,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut history = History::load(&args.history_file)?;
    if args.clear {
        let removed = history.len();
        history.clear();
        history.save(&args.history_file)?;
        println!("History cleared ({} games removed)", removed);
        return Ok(());
    }

    if history.is_empty() {
        println!("No games recorded yet");
        return Ok(());
    }
    for entry in history.latest(args.count) {
        println!(
            "#{:>4} {} {}\tOptions: {}",
            entry.id,
            entry.date.format("%Y-%m-%d %H:%M"),
            entry.winner,
            entry.items.join(", ")
        );
    }
    Ok(())
}
