use super::Cell;
use rand::Rng;

/// Grid owns the double-buffered cell storage of the automaton.
///
/// `current` is the generation on display, `next` is scratch space the
/// simulation writes into. Both buffers always hold `width * height` cells.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    current: Vec<Cell>,
    next: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    /// Dimensions are clamped to at least 1x1.
    pub fn new(width: usize, height: usize) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Self {
            width,
            height,
            current: vec![Cell::DEAD; width * height],
            next: vec![Cell::DEAD; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.current[self.get_index(x, y)])
    }

    /// Currently displayed generation, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.current
    }

    /// Split borrow for stepping: read `current`, write `next`
    pub fn buffers_mut(&mut self) -> (&[Cell], &mut [Cell]) {
        (&self.current, &mut self.next)
    }

    /// Reallocate to new dimensions, keeping the top-left overlap of the
    /// current generation. Everything outside the overlap starts dead.
    /// Returns true if the grid actually changed size.
    pub fn resize(&mut self, new_width: usize, new_height: usize) -> bool {
        let (new_width, new_height) = (new_width.max(1), new_height.max(1));
        let consistent = self.current.len() == self.width * self.height
            && self.next.len() == self.current.len();
        if new_width == self.width && new_height == self.height && consistent {
            return false;
        }

        let mut new_current = vec![Cell::DEAD; new_width * new_height];
        if consistent {
            let copy_w = self.width.min(new_width);
            let copy_h = self.height.min(new_height);
            for y in 0..copy_h {
                let src = y * self.width;
                let dst = y * new_width;
                new_current[dst..dst + copy_w].copy_from_slice(&self.current[src..src + copy_w]);
            }
        }

        self.width = new_width;
        self.height = new_height;
        self.current = new_current;
        self.next = vec![Cell::DEAD; new_width * new_height];
        true
    }

    /// Reseed every cell independently: alive (age 1) with probability
    /// `density`, dead otherwise. Draws exactly one value per cell.
    pub fn seed_random<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        let p = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.current.iter_mut().for_each(|cell| {
            *cell = Cell::from_alive(rng.random::<f64>() < p);
        });
    }

    /// Paint (age 1) or erase a single cell.
    /// Coordinates outside the grid are ignored.
    pub fn set_cell_alive(&mut self, x: i32, y: i32, alive: bool) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.current[idx] = Cell::from_alive(alive);
        }
    }

    /// Exchange current and next after a completed step
    pub fn swap_generations(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.current.fill(Cell::DEAD);
    }

    /// Number of live cells in the current generation
    pub fn population(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.current
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i % width, i / width, cell))
    }
}
