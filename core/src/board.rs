use alloc::vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Idle -> Playing (first reveal)
/// - Playing -> Won
/// - Playing -> Lost
/// - any -> Idle (restart or reload)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Waiting for the first reveal
    #[default]
    Idle,
    Playing,
    Won,
    Lost,
}

impl Status {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Won or lost; nothing but a reset is accepted anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The whole game: the grid, its counters, and the state machine driving them.
///
/// Mines are placed lazily on the first reveal so that the 3×3 area around it is always safe. The board has no clock
/// of its own, the shell calls [`Board::tick`] on its own cadence while the game is [`Status::Playing`].
#[derive(Clone, Debug)]
pub struct Board {
    config: GameConfig,
    placement: Placement,
    rng: SmallRng,
    cells: Array2<Cell>,
    armed: bool,
    revealed_count: CellCount,
    flag_count: CellCount,
    elapsed_ticks: u32,
    status: Status,
    exploded: Option<Coord2>,
}

impl Board {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            placement: Placement::default(),
            rng: SmallRng::seed_from_u64(seed),
            cells: Array2::default(Self::dim(config.size)),
            armed: false,
            revealed_count: 0,
            flag_count: 0,
            elapsed_ticks: 0,
            status: Status::Idle,
            exploded: None,
        }
    }

    /// Builds an idle board, clamping `size` and `mines` into the playable bounds.
    pub fn configure(size: u32, mines: u32, seed: u64) -> Self {
        Self::new(GameConfig::new(size, mines), seed)
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Builds an already armed, idle board from explicit mine positions. Duplicate positions count once, and the count
    /// must fit the same bounds [`GameConfig::new`] clamps to.
    pub fn from_layout(size: Coord, mines: &[Coord2]) -> Result<Self> {
        if !(GameConfig::MIN_SIZE..=GameConfig::MAX_SIZE).contains(&size) {
            return Err(GameError::InvalidSize);
        }

        let mut cells: Array2<Cell> = Array2::default(Self::dim(size));
        for &coords in mines {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoords);
            }
            cells[coords.to_nd_index()].is_mine = true;
        }

        let count = count_mines(&cells);
        if !(GameConfig::MIN_MINES..=GameConfig::max_mines_for(size)).contains(&count) {
            return Err(GameError::InvalidMineCount);
        }

        let mut board = Self::new(GameConfig::new_unchecked(size, count), 0);
        board.cells = cells;
        board.count_adjacent_mines();
        board.armed = true;
        Ok(board)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn size(&self) -> Coord {
        self.config.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// Mines not accounted for by flags, negative when the player placed more flags than there are mines.
    pub fn flags_remaining(&self) -> i32 {
        i32::from(self.config.mines) - i32::from(self.flag_count)
    }

    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    /// The mine whose reveal lost the game
    pub fn exploded(&self) -> Option<Coord2> {
        self.exploded
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn view_at(&self, coords: Coord2) -> Option<CellView> {
        self.cell_at(coords).map(|cell| self.view_of(coords, cell))
    }

    /// Every position with its visible state, `x` major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, CellView)> + '_ {
        self.cells.indexed_iter().map(|(pos, cell)| {
            let coords = to_coords(pos);
            (coords, self.view_of(coords, cell))
        })
    }

    /// Reveals a hidden cell, or chords on an already revealed one.
    ///
    /// The first reveal of a fresh board places the mines. Rejected moves (finished game, flagged target, out of
    /// bounds) come back as a result with no changes; an error means mine placement broke its own invariants.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealResult> {
        let mut changed = ChangedCells::new();

        if self.status.is_finished() {
            log::debug!("Ignoring reveal at {:?}, game is {:?}", coords, self.status);
            return Ok(self.result(changed));
        }

        let Some(&cell) = self.cell_at(coords) else {
            log::debug!("Ignoring reveal out of bounds at {:?}", coords);
            return Ok(self.result(changed));
        };

        if cell.is_flagged {
            return Ok(self.result(changed));
        }

        if !self.armed {
            self.arm(coords)?;
        }
        self.mark_started();

        if cell.is_revealed {
            self.chord(coords, &mut changed);
        } else {
            self.open(coords, &mut changed);
        }

        Ok(self.result(changed))
    }

    /// Flags or unflags a hidden cell. Revealed cells and finished games are left alone.
    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagResult {
        FlagResult {
            changed: self.flip_flag(coords),
            flags_remaining: self.flags_remaining(),
        }
    }

    /// Advances the timer by one unit while playing, otherwise only reports it.
    pub fn tick(&mut self) -> u32 {
        if self.status.is_playing() {
            self.elapsed_ticks = self.elapsed_ticks.saturating_add(1);
        }
        self.elapsed_ticks
    }

    /// Back to idle with a fresh, unarmed grid; the next reveal places new mines.
    pub fn restart(&mut self) {
        self.cells = Array2::default(Self::dim(self.config.size));
        self.armed = false;
        self.reset_counters();
        log::debug!("Board restarted");
    }

    /// Back to idle keeping the current mine layout, so the same board can be replayed.
    ///
    /// A board that was never armed has no layout to keep and restarts instead.
    pub fn reload(&mut self) {
        if !self.armed {
            self.restart();
            return;
        }

        for cell in self.cells.iter_mut() {
            cell.clear_play_state();
        }
        self.reset_counters();
        log::debug!("Board reloaded with the same layout");
    }

    fn reset_counters(&mut self) {
        self.revealed_count = 0;
        self.flag_count = 0;
        self.elapsed_ticks = 0;
        self.status = Status::Idle;
        self.exploded = None;
    }

    fn arm(&mut self, start: Coord2) -> Result<()> {
        for pos in self.cells.iter_block(start) {
            self.cells[pos.to_nd_index()].is_protected = true;
        }

        let placed = self
            .placement
            .place(&mut self.rng, &mut self.cells, self.config.mines);

        if let Err(err) = self.check_layout(placed) {
            log::error!("Discarding broken mine layout: {}", err);
            for cell in self.cells.iter_mut() {
                cell.clear_layout();
            }
            return Err(err);
        }

        self.count_adjacent_mines();
        self.armed = true;
        log::debug!(
            "Armed {0}x{0} board with {1} mines, safe start at {2:?}",
            self.config.size,
            self.config.mines,
            start
        );
        Ok(())
    }

    fn check_layout(&self, placed: CellCount) -> Result<()> {
        let requested = self.config.mines;
        let actual = count_mines(&self.cells);
        if placed != requested || actual != requested {
            return Err(GameError::MineCountMismatch {
                placed: actual,
                requested,
            });
        }

        match self
            .cells
            .indexed_iter()
            .find(|(_, cell)| cell.is_mine && cell.is_protected)
        {
            Some((pos, _)) => Err(GameError::ProtectedMine(to_coords(pos))),
            None => Ok(()),
        }
    }

    fn count_adjacent_mines(&mut self) {
        let size = self.config.size;
        for x in 0..size {
            for y in 0..size {
                let coords = (x, y);
                if self.cells[coords.to_nd_index()].is_mine {
                    continue;
                }
                let count = self
                    .cells
                    .iter_neighbors(coords)
                    .filter(|pos| self.cells[pos.to_nd_index()].is_mine)
                    .count();
                // at most eight neighbours
                self.cells[coords.to_nd_index()].adjacent_mines = count as u8;
            }
        }
    }

    fn mark_started(&mut self) {
        if self.status.is_idle() {
            self.status = Status::Playing;
            log::debug!("Game started");
        }
    }

    /// Opens every unflagged neighbour when the flags around a revealed cell match its number.
    fn chord(&mut self, coords: Coord2, changed: &mut ChangedCells) {
        let expected = self.cells[coords.to_nd_index()].adjacent_mines;
        let flagged = self
            .cells
            .iter_neighbors(coords)
            .filter(|pos| self.cells[pos.to_nd_index()].is_flagged)
            .count();

        if flagged != usize::from(expected) {
            log::debug!(
                "No chord at {:?}: {} flags around a {}",
                coords,
                flagged,
                expected
            );
            return;
        }

        for pos in self.cells.iter_neighbors(coords) {
            if self.status.is_finished() {
                break;
            }
            self.open(pos, changed);
        }
    }

    /// Reveals a single hidden cell, flooding outwards from it when it has no adjacent mines.
    fn open(&mut self, coords: Coord2, changed: &mut ChangedCells) {
        let cell = &mut self.cells[coords.to_nd_index()];
        if !cell.is_hidden() {
            return;
        }
        cell.is_revealed = true;
        let Cell {
            is_mine,
            adjacent_mines,
            ..
        } = *cell;
        changed.push(coords);

        if is_mine {
            self.exploded = Some(coords);
            self.finish(Status::Lost, changed);
            return;
        }

        self.revealed_count += 1;
        log::debug!("Opened {:?}, adjacent mines: {}", coords, adjacent_mines);

        if adjacent_mines == 0 {
            self.flood(coords, changed);
        }

        if self.revealed_count == self.config.safe_cells() {
            self.finish(Status::Won, changed);
        }
    }

    fn flood(&mut self, start: Coord2, changed: &mut ChangedCells) {
        let mut to_visit = vec![start];

        while let Some(visit_coords) = to_visit.pop() {
            for pos in self.cells.iter_neighbors(visit_coords) {
                let cell = &mut self.cells[pos.to_nd_index()];
                // skip flagged, opened, and (never zero-adjacent) mined cells
                if !cell.is_hidden() || cell.is_mine {
                    continue;
                }

                cell.is_revealed = true;
                let adjacent_mines = cell.adjacent_mines;
                self.revealed_count += 1;
                changed.push(pos);
                log::trace!("Flood opened {:?}, adjacent mines: {}", pos, adjacent_mines);

                if adjacent_mines == 0 {
                    to_visit.push(pos);
                }
            }
        }
    }

    /// Ends the game and lists every cell that is now shown differently: unflagged mines and wrong flags.
    fn finish(&mut self, status: Status, changed: &mut ChangedCells) {
        if self.status.is_finished() {
            return;
        }
        self.status = status;
        log::debug!("Game {:?} after {} ticks", status, self.elapsed_ticks);

        for (pos, cell) in self.cells.indexed_iter() {
            let hidden_mine = cell.is_mine && cell.is_hidden();
            let wrong_flag = cell.is_flagged && !cell.is_mine;
            if hidden_mine || wrong_flag {
                changed.push(to_coords(pos));
            }
        }
    }

    fn flip_flag(&mut self, coords: Coord2) -> Option<Coord2> {
        if self.status.is_finished() {
            return None;
        }

        let cell = self.cells.get_mut(coords.to_nd_index())?;
        if cell.is_revealed {
            return None;
        }

        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            self.flag_count += 1;
        } else {
            self.flag_count -= 1;
        }
        Some(coords)
    }

    fn view_of(&self, coords: Coord2, cell: &Cell) -> CellView {
        let finished = self.status.is_finished();
        match *cell {
            Cell {
                is_revealed: true,
                is_mine: true,
                ..
            } if self.exploded == Some(coords) => CellView::Exploded,
            Cell {
                is_revealed: true,
                is_mine: true,
                ..
            } => CellView::Mine,
            Cell {
                is_revealed: true,
                adjacent_mines,
                ..
            } => CellView::Revealed(adjacent_mines),
            Cell {
                is_flagged: true,
                is_mine: false,
                ..
            } if finished => CellView::WrongFlag,
            Cell {
                is_flagged: true, ..
            } => CellView::Flagged,
            Cell { is_mine: true, .. } if finished => CellView::Mine,
            _ => CellView::Hidden,
        }
    }

    fn result(&self, changed: ChangedCells) -> RevealResult {
        RevealResult {
            changed,
            status: self.status,
        }
    }

    const fn dim(size: Coord) -> [usize; 2] {
        [size as usize, size as usize]
    }
}

fn count_mines(cells: &Array2<Cell>) -> CellCount {
    // boards never exceed `CellCount` cells
    cells.iter().filter(|cell| cell.is_mine).count() as CellCount
}

/// Positions on a board always fit in a `Coord`.
fn to_coords((x, y): (usize, usize)) -> Coord2 {
    (x as Coord, y as Coord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn layout(size: Coord, mines: &[Coord2]) -> Board {
        Board::from_layout(size, mines).unwrap()
    }

    fn views(board: &Board) -> Vec<(Coord2, CellView)> {
        board.cells().collect()
    }

    #[test]
    fn first_reveal_arms_board_around_start() {
        let mut board = Board::configure(10, 10, 1);
        assert!(!board.is_armed());
        assert!(board.cells.iter().all(|cell| !cell.is_mine));

        let result = board.reveal((5, 5)).unwrap();

        assert!(board.is_armed());
        assert_eq!(result.status, board.status());
        assert_eq!(count_mines(&board.cells), 10);
        for pos in board.cells.iter_block((5, 5)) {
            let cell = board.cell_at(pos).unwrap();
            assert!(cell.is_protected());
            assert!(!cell.is_mine());
        }
        assert_eq!(board.view_at((5, 5)), Some(CellView::Revealed(0)));
    }

    #[test]
    fn reveal_hits_mine_and_records_exploded_cell() {
        let mut board = layout(5, &[(2, 2)]);

        let result = board.reveal((2, 2)).unwrap();

        assert_eq!(result.status, Status::Lost);
        assert_eq!(board.exploded(), Some((2, 2)));
        assert_eq!(board.view_at((2, 2)), Some(CellView::Exploded));
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn flood_fill_opens_zero_region_and_border() {
        let mut board = layout(5, &[(4, 4)]);

        let result = board.reveal((0, 0)).unwrap();

        assert_eq!(result.status, Status::Won);
        assert_eq!(board.view_at((0, 0)), Some(CellView::Revealed(0)));
        assert_eq!(board.view_at((3, 3)), Some(CellView::Revealed(1)));
        assert_eq!(board.view_at((4, 4)), Some(CellView::Mine));
        assert_eq!(board.revealed_count(), 24);
        assert!(result.changed.contains(&(4, 4)));
    }

    #[test]
    fn flood_fill_stops_at_flags() {
        let mut board = layout(5, &[(4, 4)]);
        board.toggle_flag((0, 4));

        let result = board.reveal((0, 0)).unwrap();

        assert_eq!(result.status, Status::Playing);
        assert_eq!(board.view_at((0, 4)), Some(CellView::Flagged));
        assert_eq!(board.revealed_count(), 23);
    }

    #[test]
    fn numbered_cell_does_not_cascade() {
        let mut board = layout(5, &[(0, 0)]);

        let result = board.reveal((1, 1)).unwrap();

        assert_eq!(result.changed.as_slice(), &[(1, 1)]);
        assert_eq!(board.view_at((1, 1)), Some(CellView::Revealed(1)));
        assert_eq!(board.view_at((2, 2)), Some(CellView::Hidden));
    }

    #[test]
    fn reveal_rejects_flagged_and_out_of_bounds() {
        let mut board = layout(5, &[(0, 0)]);
        board.toggle_flag((3, 3));

        assert!(!board.reveal((3, 3)).unwrap().has_update());
        assert!(!board.reveal((5, 0)).unwrap().has_update());
        assert_eq!(board.status(), Status::Idle);
    }

    #[test]
    fn chord_reveals_unflagged_neighbors_when_flags_match() {
        let mines = &[(0, 1), (2, 1)];
        let mut board = layout(5, mines);

        board.reveal((1, 1)).unwrap();
        board.toggle_flag((0, 1));
        board.toggle_flag((2, 1));

        let result = board.reveal((1, 1)).unwrap();

        assert_eq!(result.status, Status::Playing);
        assert_eq!(board.view_at((1, 0)), Some(CellView::Revealed(2)));
        assert_eq!(board.view_at((1, 2)), Some(CellView::Revealed(2)));
        assert_eq!(board.view_at((0, 1)), Some(CellView::Flagged));
    }

    #[test]
    fn chord_with_mismatched_flags_is_noop() {
        let mines = &[(0, 1), (2, 1)];
        let mut board = layout(5, mines);

        board.reveal((1, 1)).unwrap();
        board.toggle_flag((0, 1));

        let result = board.reveal((1, 1)).unwrap();

        assert!(!result.has_update());
        assert_eq!(board.view_at((1, 0)), Some(CellView::Hidden));
    }

    #[test]
    fn chord_around_wrong_flag_loses() {
        let mut board = layout(5, &[(0, 0)]);

        board.reveal((1, 1)).unwrap();
        board.toggle_flag((2, 2));

        let result = board.reveal((1, 1)).unwrap();

        assert_eq!(result.status, Status::Lost);
        assert_eq!(board.exploded(), Some((0, 0)));
        assert_eq!(board.view_at((2, 2)), Some(CellView::WrongFlag));
        assert!(result.changed.contains(&(2, 2)));
    }

    #[test]
    fn toggle_flag_tracks_remaining_flags() {
        let mut board = layout(5, &[(0, 0), (4, 4)]);

        let flagged = board.toggle_flag((0, 0));
        assert_eq!(flagged.changed, Some((0, 0)));
        assert_eq!(flagged.flags_remaining, 1);

        let unflagged = board.toggle_flag((0, 0));
        assert_eq!(unflagged.flags_remaining, 2);
        assert_eq!(board.flag_count(), 0);
    }

    #[test]
    fn toggle_flag_ignores_revealed_cells() {
        let mut board = layout(5, &[(0, 0)]);
        board.reveal((1, 1)).unwrap();

        let result = board.toggle_flag((1, 1));

        assert!(!result.has_update());
        assert_eq!(result.flags_remaining, 1);
    }

    #[test]
    fn over_flagging_goes_negative() {
        let mut board = layout(5, &[(0, 0)]);
        board.toggle_flag((3, 3));

        assert_eq!(board.toggle_flag((4, 4)).flags_remaining, -1);
    }

    #[test]
    fn finished_game_rejects_moves() {
        let mut board = layout(5, &[(0, 0)]);
        board.reveal((0, 0)).unwrap();
        let before = views(&board);

        assert!(!board.reveal((3, 3)).unwrap().has_update());
        assert!(!board.toggle_flag((3, 3)).has_update());
        assert_eq!(views(&board), before);
        assert_eq!(board.status(), Status::Lost);
    }

    #[test]
    fn won_game_is_terminal() {
        let mut board = layout(5, &[(4, 4)]);
        assert_eq!(board.reveal((0, 0)).unwrap().status, Status::Won);
        let before = views(&board);
        let ticks = board.elapsed_ticks();

        assert!(!board.reveal((4, 4)).unwrap().has_update());
        assert!(!board.reveal((0, 0)).unwrap().has_update());
        assert!(!board.toggle_flag((4, 4)).has_update());
        assert_eq!(board.tick(), ticks);
        assert_eq!(views(&board), before);
        assert_eq!(board.status(), Status::Won);
        assert_eq!(board.exploded(), None);
    }

    #[test]
    fn restart_after_win_starts_a_fresh_game() {
        let mut board = layout(5, &[(4, 4)]);
        board.reveal((0, 0)).unwrap();

        board.restart();

        assert_eq!(board.status(), Status::Idle);
        assert_eq!(board.elapsed_ticks(), 0);
        assert_eq!(board.flag_count(), 0);
        assert_eq!(board.revealed_count(), 0);
        assert!(!board.is_armed());

        let result = board.reveal((2, 2)).unwrap();
        assert!(board.is_armed());
        assert!(matches!(result.status, Status::Playing | Status::Won));
    }

    #[test]
    fn reload_after_win_replays_the_same_mine() {
        let mut board = layout(5, &[(4, 4)]);
        board.reveal((0, 0)).unwrap();

        board.reload();

        assert_eq!(board.status(), Status::Idle);
        assert_eq!(board.revealed_count(), 0);
        assert!(board.is_armed());
        assert!(views(&board).iter().all(|(_, view)| *view == CellView::Hidden));

        assert_eq!(board.reveal((4, 4)).unwrap().status, Status::Lost);
        assert_eq!(board.exploded(), Some((4, 4)));
    }

    #[test]
    fn failed_arming_keeps_flags() {
        // 16 free cells outside the start block cannot hold 20 mines
        let mut board = Board::new(GameConfig::new_unchecked(5, 20), 1);
        board.toggle_flag((4, 4));

        let err = board.reveal((2, 2)).unwrap_err();

        assert!(matches!(err, GameError::MineCountMismatch { .. }));
        assert!(err.is_invariant_violation());
        assert!(!board.is_armed());
        assert_eq!(board.status(), Status::Idle);
        assert_eq!(board.flag_count(), 1);
        assert_eq!(board.flags_remaining(), 19);
        assert_eq!(board.view_at((4, 4)), Some(CellView::Flagged));
        assert!(board.cell_at((4, 4)).unwrap().is_flagged());
        assert!(board.cells.iter().all(|cell| {
            !cell.is_mine && !cell.is_protected && cell.adjacent_mines == 0
        }));

        assert!(board.toggle_flag((4, 4)).has_update());
        assert_eq!(board.flag_count(), 0);
    }

    #[test]
    fn tick_only_counts_while_playing() {
        let mut board = layout(5, &[(0, 0)]);
        assert_eq!(board.tick(), 0);

        board.reveal((1, 1)).unwrap();
        assert_eq!(board.tick(), 1);
        assert_eq!(board.tick(), 2);

        board.reveal((0, 0)).unwrap();
        assert_eq!(board.tick(), 2);
    }

    #[test]
    fn restart_clears_everything_including_layout() {
        let mut board = Board::configure(8, 12, 5);
        board.reveal((0, 0)).unwrap();
        board.tick();
        board.toggle_flag((7, 7));

        board.restart();

        assert_eq!(board.status(), Status::Idle);
        assert_eq!(board.elapsed_ticks(), 0);
        assert_eq!(board.flag_count(), 0);
        assert_eq!(board.revealed_count(), 0);
        assert!(!board.is_armed());
        assert!(board.cells.iter().all(|cell| *cell == Cell::default()));
    }

    #[test]
    fn reload_replays_same_layout() {
        let mut board = Board::configure(10, 20, 11);
        board.reveal((4, 4)).unwrap();
        let mines: Vec<bool> = board.cells.iter().map(|cell| cell.is_mine).collect();
        board.toggle_flag((9, 9));
        board.tick();

        board.reload();

        assert_eq!(board.status(), Status::Idle);
        assert_eq!(board.elapsed_ticks(), 0);
        assert_eq!(board.flags_remaining(), 20);
        assert!(board.is_armed());
        assert!(views(&board).iter().all(|(_, view)| *view == CellView::Hidden));
        let kept: Vec<bool> = board.cells.iter().map(|cell| cell.is_mine).collect();
        assert_eq!(kept, mines);

        let result = board.reveal((4, 4)).unwrap();
        assert!(matches!(result.status, Status::Playing | Status::Won));
        let after: Vec<bool> = board.cells.iter().map(|cell| cell.is_mine).collect();
        assert_eq!(after, mines);
    }

    #[test]
    fn reload_of_unarmed_board_restarts() {
        let mut board = Board::configure(6, 4, 2);
        board.toggle_flag((1, 1));

        board.reload();

        assert!(!board.is_armed());
        assert_eq!(board.flag_count(), 0);
    }

    #[test]
    fn from_layout_validates_input() {
        assert_eq!(
            Board::from_layout(4, &[(0, 0)]).unwrap_err(),
            GameError::InvalidSize
        );
        assert_eq!(
            Board::from_layout(5, &[(5, 0)]).unwrap_err(),
            GameError::InvalidCoords
        );
        assert_eq!(
            Board::from_layout(5, &[]).unwrap_err(),
            GameError::InvalidMineCount
        );

        let crowded: Vec<Coord2> = (0..5)
            .flat_map(|x| (0..5).map(move |y| (x, y)))
            .take(17)
            .collect();
        assert_eq!(
            Board::from_layout(5, &crowded).unwrap_err(),
            GameError::InvalidMineCount
        );
        assert!(Board::from_layout(5, &crowded[..16]).is_ok());

        let dense: Vec<Coord2> = (0..35)
            .flat_map(|x| (0..5).map(move |y| (x, y)))
            .collect();
        assert_eq!(dense.len(), 175);
        assert_eq!(
            Board::from_layout(35, &dense).unwrap_err(),
            GameError::InvalidMineCount
        );
        let board = layout(35, &dense[..100]);
        assert_eq!(board.mine_count(), GameConfig::MAX_MINES);

        let board = layout(5, &[(1, 1), (1, 1), (3, 3)]);
        assert_eq!(board.mine_count(), 2);
        assert_eq!(board.cell_at((2, 2)).unwrap().adjacent_mines(), 2);
    }

    #[test]
    fn scan_placement_arms_like_uniform() {
        let mut board = Board::configure(35, 100, 3).with_placement(Placement::Scan);

        board.reveal((17, 17)).unwrap();

        assert_eq!(board.placement(), Placement::Scan);
        assert_eq!(count_mines(&board.cells), 100);
    }
}
