use std::time::{Duration, Instant};

use signmaze::{
    Maze,
    generators::{GeneratorConfig, generate_maze},
    logging,
};

fn main() -> anyhow::Result<()> {
    let _guard = logging::init(tracing::Level::INFO, None)?;

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(100);
    let size = args
        .next()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(u8::MAX as u16);

    let mut maze = Maze::new(size, size)?;
    let config = GeneratorConfig::default();
    let mut total = Duration::ZERO;
    for i in 0..num_iters {
        let started = Instant::now();
        generate_maze(&mut maze, &config, Some(i as u64));
        let elapsed = started.elapsed();
        total += elapsed;
        tracing::info!(
            "[profile] iteration {} took {:?}: {}",
            i,
            elapsed,
            maze.stats()
        );
    }

    if num_iters > 0 {
        println!(
            "{}x{}: {} iterations, {:?} total, {:?} average",
            size,
            size,
            num_iters,
            total,
            total / num_iters as u32
        );
    }
    Ok(())
}
