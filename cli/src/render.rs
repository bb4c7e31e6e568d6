use std::io::{self, Write};
use sweeper_core::{Board, CellView, Status};

pub fn glyph(view: CellView) -> char {
    match view {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Revealed(0) => '.',
        CellView::Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        CellView::Mine => '*',
        CellView::Exploded => 'X',
        CellView::WrongFlag => '!',
    }
}

/// Ticks are tenths of a second.
pub fn format_time(ticks: u32) -> String {
    format!("{}.{}", ticks / 10, ticks % 10)
}

/// Draws the counters, the grid with `x` across and `y` down, and the outcome once the game is over.
pub fn render(board: &Board, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Time: {}  Mines left: {}",
        format_time(board.elapsed_ticks()),
        board.flags_remaining()
    )?;

    let size = board.size();
    write!(out, "   ")?;
    for x in 0..size {
        write!(out, "{x:>2}")?;
    }
    writeln!(out)?;

    for y in 0..size {
        write!(out, "{y:>2} ")?;
        for x in 0..size {
            let view = board.view_at((x, y)).unwrap_or_default();
            write!(out, " {}", glyph(view))?;
        }
        writeln!(out)?;
    }

    match board.status() {
        Status::Won => writeln!(out, "You win!")?,
        Status::Lost => writeln!(out, "You lose!")?,
        Status::Idle | Status::Playing => {}
    }
    Ok(())
}
