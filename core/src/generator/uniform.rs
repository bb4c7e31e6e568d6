use alloc::vec::Vec;
use rand::seq::index;

use super::*;

/// Picks the requested number of distinct candidate cells, every subset equally likely.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UniformPlacer;

impl MinePlacer for UniformPlacer {
    fn place<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        cells: &mut Array2<Cell>,
        mines: CellCount,
    ) -> CellCount {
        let free: Vec<(usize, usize)> = cells
            .indexed_iter()
            .filter(|(_, cell)| is_candidate(cell))
            .map(|(pos, _)| pos)
            .collect();

        let amount = usize::from(mines).min(free.len());
        if amount < usize::from(mines) {
            log::warn!(
                "Only {} free cells for {} requested mines",
                free.len(),
                mines
            );
        }

        for i in index::sample(rng, free.len(), amount) {
            cells[free[i]].is_mine = true;
        }

        // amount never exceeds `mines`
        amount as CellCount
    }
}
