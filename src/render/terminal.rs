use std::io::Write;

use crossterm::{
    QueueableCommand, cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::maze::{Endpoints, Grid, Tile};

/// Queue every row of the maze as styled tiles, one terminal line per grid row.
pub fn queue_maze<W: Write>(out: &mut W, grid: &Grid, endpoints: &Endpoints) -> std::io::Result<()> {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let tile = endpoints.tile_at((x, y), grid[(x, y)].is_path);
            out.queue(style::Print(tile))?;
        }
        out.queue(style::Print("\r\n"))?;
    }
    Ok(())
}

/// Check if the terminal can hold the whole maze
pub fn fits_terminal(grid: &Grid, term_size: (u16, u16)) -> bool {
    let (term_width, term_height) = term_size;
    (term_width as u32) >= grid.width() as u32 * Tile::CELL_WIDTH as u32
        && term_height > grid.height()
}

/// Clears the screen and draws the maze from the top-left corner.
/// Returns Ok(false) without drawing if the terminal is too small.
pub fn print_maze<W: Write>(out: &mut W, grid: &Grid, endpoints: &Endpoints) -> std::io::Result<bool> {
    let term_size = terminal::size()?;
    if !fits_terminal(grid, term_size) {
        tracing::warn!(
            "[preview] terminal {}x{} is too small for a {}x{} maze",
            term_size.0,
            term_size.1,
            grid.width(),
            grid.height()
        );
        return Ok(false);
    }

    queue!(
        out,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    queue_maze(out, grid, endpoints)?;
    out.queue(style::PrintStyledContent(
        "Press Esc to exit...\r\n"
            .with(Color::Blue)
            .attribute(Attribute::Bold),
    ))?;
    out.flush()?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_maze;

    #[test]
    fn test_queue_maze_writes_one_line_per_row() {
        let (grid, endpoints) = generate_maze(12, 9, Some(4)).unwrap();
        let mut out = Vec::new();
        queue_maze(&mut out, &grid, &endpoints).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\r\n").count(), 9);
        assert_eq!(text.matches("🟩").count(), 1);
        assert_eq!(text.matches("🟥").count(), 1);
    }

    #[test]
    fn test_fits_terminal() {
        let grid = Grid::new(40, 20).unwrap();
        assert!(fits_terminal(&grid, (80, 21)));
        assert!(!fits_terminal(&grid, (79, 21)));
        assert!(!fits_terminal(&grid, (80, 20)));
    }
}
