use rand::{Rng, rngs::StdRng};

use crate::{
    error::{MazeError, Result},
    generators::get_rng,
    maze::{Direction, Endpoints, Grid},
};

/// Smallest width or height that leaves room for an interior cell next to both
/// the start and the end edge.
pub const MIN_DIMENSION: u16 = 3;

/// Counters collected while carving.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CarveStats {
    iterations: usize,
    /// Direction draws, one per iteration that did not backtrack
    draws: usize,
    /// Draws that hit an already tried direction
    repeats: usize,
    backtracks: usize,
}

/// Randomized depth-first carver. Borrows the grid exclusively for one `generate` call.
pub struct Generator<'a, R: Rng = StdRng> {
    grid: &'a mut Grid,
    rng: R,
    /// Work stack of cells still being expanded, top is the current cell
    stack: Vec<(u16, u16)>,
    generated: bool,
}

impl<'a> Generator<'a, StdRng> {
    /// Creates a generator backed by `StdRng`, seeded when `seed` is given.
    pub fn new(grid: &'a mut Grid, seed: Option<u64>) -> Result<Self> {
        Self::with_rng(grid, get_rng(seed))
    }
}

impl<'a, R: Rng> Generator<'a, R> {
    pub fn with_rng(grid: &'a mut Grid, rng: R) -> Result<Self> {
        if grid.width() < MIN_DIMENSION || grid.height() < MIN_DIMENSION {
            return Err(MazeError::InvalidDimension {
                width: grid.width(),
                height: grid.height(),
                min: MIN_DIMENSION,
            });
        }
        Ok(Generator {
            grid,
            rng,
            stack: Vec::new(),
            generated: false,
        })
    }

    /// Carves the maze in place and returns the chosen start and end cells.
    ///
    /// The start lies on the left or top edge (never a corner) and the end lies on
    /// the opposite edge: bottom for a left start, right for a top start.
    ///
    /// # Errors
    /// * `AlreadyGenerated` if called more than once on the same generator
    /// * `UnreachableEnd` if no interior path cell borders the end edge
    pub fn generate(&mut self) -> Result<Endpoints> {
        if self.generated {
            return Err(MazeError::AlreadyGenerated);
        }
        self.generated = true;

        let start = self.pick_start();
        self.grid.set_path(start);
        tracing::debug!("[generate] start at {:?}", start);

        let stats = self.carve(start);

        let end = self.pick_end(start)?;
        self.grid.set_path(end);

        tracing::info!(
            "[generate] {}x{} maze carved in {} iterations ({} draws, {} repeats), {} path cells, start {:?}, end {:?}",
            self.grid.width(),
            self.grid.height(),
            stats.iterations,
            stats.draws,
            stats.repeats,
            self.grid.path_count(),
            start,
            end
        );
        Ok(Endpoints { start, end })
    }

    /// Picks a start on the left or top edge with a fair coin, excluding corners.
    fn pick_start(&mut self) -> (u16, u16) {
        let (width, height) = (self.grid.width(), self.grid.height());
        if self.rng.random_bool(0.5) {
            (0, self.rng.random_range(1..=height - 2))
        } else {
            (self.rng.random_range(1..=width - 2), 0)
        }
    }

    /// Iterative DFS from `start`, drawing directions from the generator's RNG.
    fn carve(&mut self, start: (u16, u16)) -> CarveStats {
        self.carve_with(start, |rng| rng.random_range(0..Direction::ALL.len()))
    }

    /// Iterative DFS from `start`. `draw` yields an index into `Direction::ALL` and is
    /// called once per iteration whose top cell still has an untried direction.
    fn carve_with<F>(&mut self, start: (u16, u16), mut draw: F) -> CarveStats
    where
        F: FnMut(&mut R) -> usize,
    {
        self.stack.push(start);
        let mut stats = CarveStats::default();

        while let Some(&coord) = self.stack.last() {
            stats.iterations += 1;
            self.grid.set_path(coord);

            let cell = self.grid[coord];
            if cell.all_tried() {
                // Dead end, backtrack
                self.stack.pop();
                stats.backtracks += 1;
                continue;
            }

            // NOTE: The draw covers all four directions, not just untried ones.
            // Drawing a tried direction makes this iteration a no-op.
            let direction = Direction::ALL[draw(&mut self.rng)];
            stats.draws += 1;
            if cell.is_tried(direction) {
                stats.repeats += 1;
                continue;
            }
            // Marked even when the step is rejected
            self.grid.cell_mut(coord).mark_tried(direction);

            let (dx, dy) = direction.offset();
            let (nx, ny) = (coord.0 as i32 + dx, coord.1 as i32 + dy);
            if is_valid_step(self.grid, nx, ny, direction) {
                // Becomes the top of the stack and is carved on the next iteration
                self.stack.push((nx as u16, ny as u16));
            }
        }
        stats
    }

    /// Rejection-samples an end cell on the edge opposite `start` whose inward
    /// neighbor is a path cell.
    fn pick_end(&mut self, start: (u16, u16)) -> Result<(u16, u16)> {
        let (width, height) = (self.grid.width(), self.grid.height());
        let start_on_left = start.0 == 0;

        // A candidate must exist, otherwise the sampling loop below never ends
        let has_candidate = if start_on_left {
            (1..=width - 2).any(|x| self.grid[(x, height - 2)].is_path)
        } else {
            (1..=height - 2).any(|y| self.grid[(width - 2, y)].is_path)
        };
        if !has_candidate {
            tracing::error!("[generate] no path cell borders the end edge");
            return Err(MazeError::UnreachableEnd);
        }

        loop {
            if start_on_left {
                let x = self.rng.random_range(1..=width - 2);
                if self.grid[(x, height - 2)].is_path {
                    return Ok((x, height - 1));
                }
            } else {
                let y = self.rng.random_range(1..=height - 2);
                if self.grid[(width - 2, y)].is_path {
                    return Ok((width - 1, y));
                }
            }
        }
    }
}

/// Checks whether the carver may step onto `(x, y)` while travelling in `direction`.
///
/// The candidate must be an interior wall cell. The three cells one step further in
/// the travel direction and the two cells beside the candidate must all be walls,
/// which keeps corridors one cell wide and stops the path from touching itself.
/// Cells outside the grid count as walls.
fn is_valid_step(grid: &Grid, x: i32, y: i32, direction: Direction) -> bool {
    let (width, height) = (grid.width() as i32, grid.height() as i32);
    if x <= 0 || y <= 0 || x >= width - 1 || y >= height - 1 {
        return false;
    }
    if grid.is_path(x, y) {
        return false;
    }

    let (dx, dy) = direction.offset();
    // Unit step perpendicular to the travel direction
    let (px, py) = (dy.abs(), dx.abs());
    let (ax, ay) = (x + dx, y + dy);
    [
        (ax, ay),
        (ax - px, ay - py),
        (ax + px, ay + py),
        (x - px, y - py),
        (x + px, y + py),
    ]
    .into_iter()
    .all(|(cx, cy)| !grid.is_path(cx, cy))
}
