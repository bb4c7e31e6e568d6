use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;
use std::time::Duration;
use sweeper_core::{Board, Coord, Coord2, GameConfig};
use thiserror::Error;
use web_time::Instant;

use crate::render::render;

/// One timer tick; the displayed time is in tenths of a second.
pub const TICK: Duration = Duration::from_millis(100);

const HELP: &str = "\
Commands:
  r X Y          reveal a cell, or chord on a revealed number
  f X Y          flag or unflag a cell
  restart        new board with the same settings
  reload         replay the current board from the start
  config SIZE MINES
                 change the board (size 5-35, mines up to 100)
  show           draw the board again
  help           this text
  q              quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Restart,
    Reload,
    Configure { size: u32, mines: u32 },
    Show,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` takes {1} numbers")]
    Arity(&'static str, usize),
    #[error("`{0}` is not a valid number")]
    Number(String),
}

fn parse_pair<T: FromStr>(name: &'static str, args: &[&str]) -> Result<(T, T), CommandError> {
    let [first, second] = args else {
        return Err(CommandError::Arity(name, 2));
    };
    let parse = |arg: &str| {
        arg.parse::<T>()
            .map_err(|_| CommandError::Number(arg.to_string()))
    };
    Ok((parse(*first)?, parse(*second)?))
}

fn parse_coords(name: &'static str, args: &[&str]) -> Result<Coord2, CommandError> {
    parse_pair::<Coord>(name, args)
}

fn no_args(command: Command, name: &'static str, args: &[&str]) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::Arity(name, 0))
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((name, args)) = words.split_first() else {
            return Err(CommandError::Unknown(String::new()));
        };

        match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => parse_coords("reveal", args).map(Command::Reveal),
            "f" | "flag" => parse_coords("flag", args).map(Command::Flag),
            "config" | "settings" => parse_pair::<u32>("config", args)
                .map(|(size, mines)| Command::Configure { size, mines }),
            "restart" => no_args(Command::Restart, "restart", args),
            "reload" => no_args(Command::Reload, "reload", args),
            "show" => no_args(Command::Show, "show", args),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-driven front end: owns the board, the timer cadence, and all output.
pub struct Shell {
    board: Board,
    seed: Option<u64>,
    last_tick: Option<Instant>,
}

impl Shell {
    /// `seed` is reused for every reconfigured board; without one each board gets a random seed.
    pub fn new(board: Board, seed: Option<u64>) -> Self {
        Self {
            board,
            seed,
            last_tick: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        render(&self.board, &mut out)?;
        prompt(&mut out)?;

        for line in input.lines() {
            let line = line.context("Could not read command")?;
            let now = Instant::now();
            self.catch_up(now);

            if !line.trim().is_empty() {
                match line.parse::<Command>() {
                    Ok(command) => {
                        if self.execute(command, now, &mut out)? == Flow::Quit {
                            break;
                        }
                    }
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            prompt(&mut out)?;
        }

        log::debug!("Shell finished");
        Ok(())
    }

    pub fn execute(&mut self, command: Command, now: Instant, out: &mut impl Write) -> Result<Flow> {
        log::debug!("Executing {:?}", command);

        match command {
            Command::Reveal(coords) => {
                let result = self
                    .board
                    .reveal(coords)
                    .context("Mine placement broke the board")?;
                if !result.has_update() {
                    writeln!(out, "Nothing to reveal at {} {}", coords.0, coords.1)?;
                }
            }
            Command::Flag(coords) => {
                if !self.board.toggle_flag(coords).has_update() {
                    writeln!(out, "Cannot flag {} {}", coords.0, coords.1)?;
                }
            }
            Command::Restart => self.board.restart(),
            Command::Reload => self.board.reload(),
            Command::Configure { size, mines } => {
                let config = GameConfig::new(size, mines);
                let seed = self.seed.unwrap_or_else(rand::random);
                self.board = Board::new(config, seed).with_placement(self.board.placement());
                writeln!(
                    out,
                    "Board set to {0}x{0} with {1} mines",
                    config.size, config.mines
                )?;
            }
            Command::Show => {}
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        self.sync_clock(now);
        render(&self.board, out)?;
        Ok(Flow::Continue)
    }

    /// Turns wall-clock time since the last tick into board ticks while the game is being played.
    pub fn catch_up(&mut self, now: Instant) {
        let Some(mut last) = self.last_tick else {
            return;
        };
        if !self.board.status().is_playing() {
            self.last_tick = None;
            return;
        }

        while now.saturating_duration_since(last) >= TICK {
            self.board.tick();
            last += TICK;
        }
        self.last_tick = Some(last);
    }

    /// Starts the clock when a game begins and drops it whenever the board leaves `Playing`.
    fn sync_clock(&mut self, now: Instant) {
        if self.board.status().is_playing() {
            self.last_tick.get_or_insert(now);
        } else {
            self.last_tick = None;
        }
    }
}

fn prompt(out: &mut impl Write) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
