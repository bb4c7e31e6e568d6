use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::io;
use std::path::PathBuf;
use sweeper_core::Board;

use crate::settings::{PlacementArg, Settings};
use crate::shell::Shell;

mod render;
mod settings;
mod shell;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Board side length, clamped to 5..=35
    #[arg(short, long)]
    size: Option<u32>,

    /// Number of mines, clamped to what the board can hold
    #[arg(short, long)]
    mines: Option<u32>,

    /// Force a seed instead of random
    #[arg(long)]
    seed: Option<u64>,

    /// Mine placement algorithm
    #[arg(short, long, value_enum)]
    placement: Option<PlacementArg>,

    /// TOML file with default settings, overridden by the flags above
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            size: self.size,
            mines: self.mines,
            seed: self.seed,
            placement: self.placement.map(Into::into),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let settings = match &args.config {
        Some(path) => Settings::load(path)?.merge(args.settings()),
        None => args.settings(),
    };
    log::debug!("settings: {:?}", settings);

    let config = settings.game_config();
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let board = Board::new(config, seed).with_placement(settings.placement.unwrap_or_default());
    let mut shell = Shell::new(board, settings.seed);
    shell.run(io::stdin().lock(), io::stdout().lock())?;
    log::debug!("Final status: {:?}", shell.board().status());
    Ok(())
}
