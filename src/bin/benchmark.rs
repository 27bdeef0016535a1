//! Performance benchmark comparing serial and parallel stepping

use std::time::Instant;

use conway_saver::{Algorithm, Grid};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark(size: usize, iterations: u32, algorithm: Algorithm) -> f64 {
    let mut grid = Grid::new(size, size);
    grid.seed_random(0.18, &mut StdRng::seed_from_u64(size as u64));

    let start = Instant::now();
    for _ in 0..iterations {
        grid.advance(true, 30, algorithm);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024, 2048];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, Algorithm::Serial);
        let parallel_ms = benchmark(size, iterations, Algorithm::Parallel);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 2048;
    let cells = size * size;
    let ms = benchmark(size, iterations, Algorithm::Parallel);
    println!(
        "\n{}: {:.2} ms/gen, {:.1}M cells/sec at {}x{}",
        Algorithm::Parallel.name(),
        ms,
        (cells as f64) / (ms / 1000.0) / 1_000_000.0,
        size,
        size
    );
}
