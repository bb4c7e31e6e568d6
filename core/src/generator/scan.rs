use super::*;

/// Repeated row-major scans that accept each candidate cell with a fixed probability until the count is met.
///
/// Fast on sparse boards but biased towards the first rows scanned, kept for boards that want the classic feel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanPlacer;

impl ScanPlacer {
    /// Acceptance is `1 / denominator` where the denominator is `⌊(total + 1) / mines⌋ + 1`.
    pub const fn acceptance_denominator(total_cells: CellCount, mines: CellCount) -> u32 {
        let mines = if mines == 0 { 1 } else { mines as u32 };
        (total_cells as u32 + 1) / mines + 1
    }
}

impl MinePlacer for ScanPlacer {
    fn place<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        cells: &mut Array2<Cell>,
        mines: CellCount,
    ) -> CellCount {
        let total = CellCount::try_from(cells.len()).unwrap_or(CellCount::MAX);
        let denominator = Self::acceptance_denominator(total, mines);

        let free = cells.iter().filter(|cell| is_candidate(cell)).count();
        let target = usize::from(mines).min(free);

        let mut placed = 0;
        let mut scans = 0u32;
        while placed < target {
            scans += 1;
            for cell in cells.iter_mut() {
                if !is_candidate(cell) {
                    continue;
                }
                if rng.random_ratio(1, denominator) {
                    cell.is_mine = true;
                    placed += 1;
                    if placed == target {
                        break;
                    }
                }
            }
        }
        log::trace!("Scan placement finished after {} passes", scans);

        // target never exceeds `mines`
        placed as CellCount
    }
}
