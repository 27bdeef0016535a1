use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};

use super::{Config, Viewport};
use crate::domain::{Grid, Rgb, color_for_age};

/// Pointer intent for a paint event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Brush {
    Paint,
    Erase,
}

/// One filled rectangle to present: pixel position, side length and color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Rgb,
}

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic with the
/// host loop: canvas size, pointer events and frame timing come in, a
/// draw list goes out.
pub struct GameState {
    pub grid: Grid,
    pub config: Config,
    pub viewport: Viewport,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: Duration,
    rng: StdRng,
}

impl GameState {
    /// Create a grid sized to the canvas and seed it randomly
    pub fn new(config: Config, canvas_width: f32, canvas_height: f32) -> Self {
        let config = config.sanitized();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let viewport = Viewport::new(config.cell_px());
        let (width, height) = viewport.grid_dimensions(canvas_width, canvas_height);
        log::info!("Allocating {}x{} grid ({} px cells)", width, height, config.cell_size);

        let state = Self {
            grid: Grid::new(width, height),
            config,
            viewport,
            is_running: true,
            generation: 0,
            update_timer: Duration::ZERO,
            rng,
        };
        state.randomize()
    }

    /// Resize the grid to fit a new canvas size, keeping the top-left overlap
    pub fn resize_to_canvas(&mut self, canvas_width: f32, canvas_height: f32) {
        let (width, height) = self.viewport.grid_dimensions(canvas_width, canvas_height);
        if self.grid.resize(width, height) {
            log::debug!("Canvas {}x{} px -> grid {}x{}", canvas_width, canvas_height, width, height);
        }
    }

    /// Apply a pointer event at a canvas position. Off-grid positions are ignored.
    pub fn paint(&mut self, screen_x: f32, screen_y: f32, brush: Brush) {
        let (x, y) = self.viewport.screen_to_grid(screen_x, screen_y);
        self.grid.set_cell_alive(x, y, brush == Brush::Paint);
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        log::debug!("Simulation {}", if self.is_running { "resumed" } else { "paused" });
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.generation = 0;
        self
    }

    /// Reseed the grid with the configured density and reset generation counter
    pub fn randomize(mut self) -> Self {
        self.grid.seed_random(self.config.initial_density, &mut self.rng);
        self.generation = 0;
        log::debug!("Seeded grid, {} cells alive", self.grid.population());
        self
    }

    /// Advance exactly one generation regardless of timing
    pub fn step(&mut self) {
        self.grid.advance(self.config.wrap, self.config.max_age, self.config.algorithm);
        self.generation += 1;
        log::trace!("Generation {}", self.generation);
    }

    /// Update simulation by one frame.
    /// Steps once when the accumulated time reaches the step interval, or on
    /// every call when the interval is zero. Returns whether a step happened.
    pub fn tick(&mut self, delta_time: Duration) -> bool {
        if !self.is_running {
            return false;
        }

        self.update_timer += delta_time;
        let interval = Duration::from_millis(self.config.step_interval_ms);
        if self.update_timer < interval {
            return false;
        }

        self.step();
        self.update_timer = Duration::ZERO;
        true
    }

    /// Rectangles for every live cell of the current generation
    pub fn draw_list(&self) -> impl Iterator<Item = CellRect> + '_ {
        let size = self.viewport.cell_size;
        let max_age = self.config.max_age;
        self.grid
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(move |(x, y, cell)| {
                let (px, py) = self.viewport.grid_to_screen(x, y);
                CellRect { x: px, y: py, size, color: color_for_age(cell.age(), max_age) }
            })
    }
}
