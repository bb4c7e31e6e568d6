use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;
pub use scan::*;
pub use uniform::*;

mod scan;
mod uniform;

/// Distributes mines over the cells that are neither protected nor mined yet.
pub trait MinePlacer {
    /// Marks up to `mines` cells and returns how many were actually marked, which is less than requested only when
    /// the board runs out of candidates.
    fn place<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        cells: &mut Array2<Cell>,
        mines: CellCount,
    ) -> CellCount;
}

/// Which placement algorithm a board arms itself with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Uniform,
    Scan,
}

impl MinePlacer for Placement {
    fn place<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        cells: &mut Array2<Cell>,
        mines: CellCount,
    ) -> CellCount {
        match self {
            Self::Uniform => UniformPlacer.place(rng, cells, mines),
            Self::Scan => ScanPlacer.place(rng, cells, mines),
        }
    }
}

fn is_candidate(cell: &Cell) -> bool {
    !cell.is_protected && !cell.is_mine
}
