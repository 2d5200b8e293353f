pub mod app;
pub mod error;
pub mod generators;
pub mod maze;
pub mod render;

pub use error::{MazeError, Result};
pub use generators::{Generator, generate_maze};
pub use maze::{Cell, Direction, Endpoints, Grid};
