use rand::{SeedableRng, rngs::StdRng};

mod dfs;

pub use dfs::{Generator, MIN_DIMENSION};

use crate::{
    error::Result,
    maze::{Endpoints, Grid},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Builds a fresh grid and carves a maze into it.
pub fn generate_maze(width: u16, height: u16, seed: Option<u64>) -> Result<(Grid, Endpoints)> {
    let mut grid = Grid::new(width, height)?;
    let endpoints = Generator::new(&mut grid, seed)?.generate()?;
    Ok((grid, endpoints))
}
