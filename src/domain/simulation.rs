//! Next-generation computation.
//!
//! Every function here reads the current generation and writes into a
//! separate buffer, so all cells transition from the same snapshot.

use super::{Algorithm, Cell, Grid};
use rayon::prelude::*;

/// Count live cells in the Moore neighborhood of `(x, y)`.
///
/// With `wrap` the grid is a torus; without it, neighbors past an edge
/// simply do not exist.
fn count_neighbors_in(cells: &[Cell], width: usize, height: usize, x: usize, y: usize, wrap: bool) -> u8 {
    let w = width as isize;
    let h = height as isize;

    (-1isize..=1)
        .flat_map(|dy| (-1isize..=1).map(move |dx| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .filter_map(|(dx, dy)| {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if wrap {
                Some((nx.rem_euclid(w), ny.rem_euclid(h)))
            } else {
                (nx >= 0 && nx < w && ny >= 0 && ny < h).then_some((nx, ny))
            }
        })
        .filter(|&(nx, ny)| cells[ny as usize * width + nx as usize].is_alive())
        .count() as u8
}

/// Count live neighbors of `(x, y)` in the grid's current generation
pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize, wrap: bool) -> u8 {
    let (width, height) = grid.dimensions();
    count_neighbors_in(grid.cells(), width, height, x, y, wrap)
}

/// Compute one row of the next generation
fn step_row(current: &[Cell], row: &mut [Cell], y: usize, width: usize, height: usize, wrap: bool, max_age: u8) {
    for (x, out) in row.iter_mut().enumerate() {
        let neighbors = count_neighbors_in(current, width, height, x, y, wrap);
        *out = current[y * width + x].evolve(neighbors, max_age);
    }
}

/// Serial evolution: writes the generation after `current` into `next`.
///
/// # Panics
///
/// Panics unless both slices hold exactly `width * height` cells.
pub fn step(current: &[Cell], next: &mut [Cell], width: usize, height: usize, wrap: bool, max_age: u8) {
    assert_eq!(current.len(), width * height);
    assert_eq!(next.len(), current.len());

    next.chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| step_row(current, row, y, width, height, wrap, max_age));
}

/// Parallel evolution using rayon, one task per row.
/// Produces exactly the same output as [`step`].
///
/// # Panics
///
/// Panics unless both slices hold exactly `width * height` cells.
pub fn step_parallel(current: &[Cell], next: &mut [Cell], width: usize, height: usize, wrap: bool, max_age: u8) {
    assert_eq!(current.len(), width * height);
    assert_eq!(next.len(), current.len());

    next.par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| step_row(current, row, y, width, height, wrap, max_age));
}

impl Grid {
    /// Advance one generation in place: step into the scratch buffer, then swap
    pub fn advance(&mut self, wrap: bool, max_age: u8, algorithm: Algorithm) {
        let (width, height) = self.dimensions();
        let (current, next) = self.buffers_mut();
        match algorithm {
            Algorithm::Serial => step(current, next, width, height, wrap, max_age),
            Algorithm::Parallel => step_parallel(current, next, width, height, wrap, max_age),
        }
        self.swap_generations();
    }
}
