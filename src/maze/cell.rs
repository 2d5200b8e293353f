use crossterm::style::{Color, Stylize};

use std::fmt;

/// One of the four absolute directions the carver can move in.
/// The y axis grows downward, matching image rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    /// Directions in draw order: a uniform draw of `0..4` indexes into this array.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
    ];

    /// Unit step `(dx, dy)` for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
            Direction::Up => write!(f, "up"),
        }
    }
}

/// State of a single grid cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
    /// Set once the cell is committed to the maze path.
    pub is_path: bool,
    /// Per-direction flags, only meaningful while the maze is being carved.
    tried: [bool; 4],
}

impl Cell {
    pub fn new(x: u16, y: u16) -> Self {
        Cell {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn is_tried(&self, direction: Direction) -> bool {
        self.tried[direction.index()]
    }

    pub fn mark_tried(&mut self, direction: Direction) {
        self.tried[direction.index()] = true;
    }

    pub fn all_tried(&self) -> bool {
        self.tried.iter().all(|&t| t)
    }
}

/// How a cell is drawn in the terminal preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Path,
    Start,
    End,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Path => "  ".with(Color::Reset),
            Tile::Start => "🟩".with(Color::Green),
            Tile::End => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::CELL_WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_offsets_follow_draw_order() {
        let offsets = Direction::ALL.map(Direction::offset);
        assert_eq!(offsets, [(-1, 0), (1, 0), (0, 1), (0, -1)]);
    }

    #[test]
    fn test_tried_flags() {
        let mut cell = Cell::new(3, 4);
        assert!(!cell.all_tried());
        Direction::ALL.iter().for_each(|&d| {
            assert!(!cell.is_tried(d));
            cell.mark_tried(d);
            assert!(cell.is_tried(d));
        });
        assert!(cell.all_tried());
        assert!(!cell.is_path);
    }

    #[test]
    fn test_tiles_are_two_columns_wide() {
        // Display asserts the width in debug builds
        for tile in [Tile::Wall, Tile::Path, Tile::Start, Tile::End] {
            assert!(!tile.to_string().is_empty());
        }
    }
}
