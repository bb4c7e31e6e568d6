use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board size out of range")]
    InvalidSize,
    #[error("Mine count out of range")]
    InvalidMineCount,
    #[error("Mine placement produced {placed} mines, expected {requested}")]
    MineCountMismatch {
        placed: CellCount,
        requested: CellCount,
    },
    #[error("Mine placed inside the protected start area at {0:?}")]
    ProtectedMine(Coord2),
}

impl GameError {
    /// Whether this error points at a defect in the engine rather than bad input.
    pub const fn is_invariant_violation(self) -> bool {
        matches!(
            self,
            Self::MineCountMismatch { .. } | Self::ProtectedMine(_)
        )
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
