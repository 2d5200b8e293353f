pub mod cell;
pub mod grid;

pub use cell::{Cell, Direction, Tile};
pub use grid::Grid;

/// Start and end cells of a generated maze, as `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub start: (u16, u16),
    pub end: (u16, u16),
}

impl Endpoints {
    /// The tile to draw for a cell, given whether it is a path cell.
    pub fn tile_at(&self, coord: (u16, u16), is_path: bool) -> Tile {
        if coord == self.start {
            Tile::Start
        } else if coord == self.end {
            Tile::End
        } else if is_path {
            Tile::Path
        } else {
            Tile::Wall
        }
    }
}
