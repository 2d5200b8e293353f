pub mod bitmap;
pub mod terminal;

pub use bitmap::{render_bitmap, save_png};
pub use terminal::print_maze;
