#![no_std]

extern crate alloc;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Board dimensions and mine target. Always within the playable bounds once built through [`GameConfig::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const MIN_SIZE: Coord = 5;
    pub const MAX_SIZE: Coord = 35;
    pub const MIN_MINES: CellCount = 1;
    pub const MAX_MINES: CellCount = 100;
    /// Size of the 3×3 area around the first reveal that never holds a mine.
    pub const PROTECTED_CELLS: CellCount = 9;

    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Clamps both values into range instead of failing.
    pub fn new(size: u32, mines: u32) -> Self {
        let size = size.clamp(Self::MIN_SIZE.into(), Self::MAX_SIZE.into()) as Coord;
        let mines = mines.clamp(
            Self::MIN_MINES.into(),
            Self::max_mines_for(size).into(),
        ) as CellCount;
        Self::new_unchecked(size, mines)
    }

    /// Upper mine bound for a board side: room for the protected area, and never above [`Self::MAX_MINES`].
    pub const fn max_mines_for(size: Coord) -> CellCount {
        let room = square(size).saturating_sub(Self::PROTECTED_CELLS);
        if room < Self::MAX_MINES {
            room
        } else {
            Self::MAX_MINES
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(10, 10)
    }
}

/// Cells whose visible state changed during one move, for the shell to redraw.
pub type ChangedCells = SmallVec<[Coord2; 8]>;

#[derive(Clone, Debug, PartialEq)]
pub struct RevealResult {
    pub changed: ChangedCells,
    pub status: Status,
}

impl RevealResult {
    pub fn has_update(&self) -> bool {
        !self.changed.is_empty()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FlagResult {
    pub changed: Option<Coord2>,
    pub flags_remaining: i32,
}

impl FlagResult {
    pub const fn has_update(&self) -> bool {
        self.changed.is_some()
    }
}
