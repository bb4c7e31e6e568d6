use ndarray::Array2;

/// Single coordinate axis, used for the board side length and positions.
pub type Coord = u8;

/// Count type used for mine counts and cell counts.
pub type CellCount = u16;

/// Board position `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn square(side: Coord) -> CellCount {
    let side = side as CellCount;
    side.saturating_mul(side)
}

pub trait NeighborIterExt {
    /// Up to eight surrounding positions, clipped at the edges.
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;

    /// The clipped 3×3 block around `index`, the centre included.
    fn iter_block(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, grid_bounds(self), false)
    }

    fn iter_block(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, grid_bounds(self), true)
    }
}

fn grid_bounds<T>(grid: &Array2<T>) -> Coord2 {
    let (rows, cols) = grid.dim();
    (
        rows.try_into().unwrap_or(Coord::MAX),
        cols.try_into().unwrap_or(Coord::MAX),
    )
}

/// Walks the 3×3 window around a position, `x` major, cut down to the grid. A centre outside the grid has no
/// window at all.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    with_center: bool,
    x_end: Coord,
    y_start: Coord,
    y_end: Coord,
    cursor: Option<Coord2>,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2, with_center: bool) -> Self {
        let (x, y) = center;
        let inside = x < bounds.0 && y < bounds.1;
        let y_start = y.saturating_sub(1);
        Self {
            center,
            with_center,
            x_end: x.saturating_add(2).min(bounds.0),
            y_start,
            y_end: y.saturating_add(2).min(bounds.1),
            cursor: inside.then_some((x.saturating_sub(1), y_start)),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(pos @ (x, y)) = self.cursor {
            // y < y_end <= Coord::MAX, same for x
            self.cursor = if y + 1 < self.y_end {
                Some((x, y + 1))
            } else if x + 1 < self.x_end {
                Some((x + 1, self.y_start))
            } else {
                None
            };

            if self.with_center || pos != self.center {
                return Some(pos);
            }
        }
        None
    }
}
