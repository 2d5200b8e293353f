use std::time::Instant;

use tilemaze::{app::logging::init_logging, generate_maze};

fn main() -> tilemaze::Result<()> {
    let _guard = init_logging(".");

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);

    let size = u8::MAX as u16;
    let started = Instant::now();
    for i in 0..num_iters {
        let iter_started = Instant::now();
        let (grid, _) = generate_maze(size, size, Some(i as u64))?;
        tracing::info!(
            "[profile] iteration {}: {} path cells in {:?}",
            i,
            grid.path_count(),
            iter_started.elapsed()
        );
    }
    println!(
        "Generated {} mazes of {}x{} in {:?}",
        num_iters,
        size,
        size,
        started.elapsed()
    );
    Ok(())
}
