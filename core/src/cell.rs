use serde::{Deserialize, Serialize};

/// One grid position. Owned by the board; only the board mutates it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) adjacent_mines: u8,
    pub(crate) is_revealed: bool,
    pub(crate) is_flagged: bool,
    pub(crate) is_protected: bool,
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    /// Mines in the clipped 8-neighbourhood; always 0 for mines and before arming.
    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    /// Excluded from mine placement because it lies next to the first reveal.
    pub const fn is_protected(&self) -> bool {
        self.is_protected
    }

    pub const fn is_hidden(&self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    /// Forgets mines and protection, keeping whatever the player marked.
    pub(crate) fn clear_layout(&mut self) {
        self.is_mine = false;
        self.adjacent_mines = 0;
        self.is_protected = false;
    }

    pub(crate) fn clear_play_state(&mut self) {
        self.is_revealed = false;
        self.is_flagged = false;
    }
}

/// Player-visible state of a cell, what a shell renders.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
    // these are only shown after the game ends:
    Mine,
    Exploded,
    WrongFlag,
}

impl CellView {
    /// Whether the cell still looks closed
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged | Self::WrongFlag)
    }
}
