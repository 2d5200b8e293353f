use std::fmt;

use super::cell::Cell;
use crate::error::{MazeError, Result};

/// Row-major grid of cells with fixed dimensions.
pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a grid where every cell is a wall with no directions tried.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(MazeError::InvalidDimension {
                width,
                height,
                min: 1,
            });
        }
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(x, y)))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Ok(Grid {
            data,
            width,
            height,
        })
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    pub fn is_boundary_cell(&self, x: u16, y: u16) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    /// Checked accessor.
    pub fn get(&self, x: i32, y: i32) -> Result<Cell> {
        if !self.is_in_bounds(x, y) {
            return Err(MazeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self[(x as u16, y as u16)])
    }

    /// Reads the path flag. Coordinates outside the grid read as walls.
    pub fn is_path(&self, x: i32, y: i32) -> bool {
        self.is_in_bounds(x, y) && self[(x as u16, y as u16)].is_path
    }

    pub(crate) fn cell_mut(&mut self, coord: (u16, u16)) -> &mut Cell {
        let idx = self.ravel_index(coord.0, coord.1);
        &mut self.data[idx]
    }

    pub(crate) fn set_path(&mut self, coord: (u16, u16)) {
        self.cell_mut(coord).is_path = true;
    }

    /// Number of cells committed to the maze path.
    pub fn path_count(&self) -> usize {
        self.data.iter().filter(|cell| cell.is_path).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.data
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.width as usize) {
            for cell in row {
                write!(f, "{}", if cell.is_path { ' ' } else { '#' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
