/// Viewport maps between canvas pixels and grid cells.
/// Cells are laid out from the top-left corner with no zoom or pan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cell_size: f32,
}

impl Viewport {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size: cell_size.max(1.0) }
    }

    /// Convert screen coordinates to grid coordinates.
    /// Positions left of or above the canvas give negative cells.
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> (i32, i32) {
        let grid_x = (screen_x / self.cell_size).floor() as i32;
        let grid_y = (screen_y / self.cell_size).floor() as i32;
        (grid_x, grid_y)
    }

    /// Top-left pixel of a grid cell
    pub fn grid_to_screen(&self, grid_x: usize, grid_y: usize) -> (f32, f32) {
        (grid_x as f32 * self.cell_size, grid_y as f32 * self.cell_size)
    }

    /// Grid dimensions that fit a canvas, never smaller than 1x1
    pub fn grid_dimensions(&self, canvas_width: f32, canvas_height: f32) -> (usize, usize) {
        let cells = |px: f32| ((px / self.cell_size).floor().max(1.0)) as usize;
        (cells(canvas_width), cells(canvas_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_grid() {
        let viewport = Viewport::new(16.0);
        assert_eq!(viewport.screen_to_grid(0.0, 0.0), (0, 0));
        assert_eq!(viewport.screen_to_grid(15.9, 16.0), (0, 1));
        assert_eq!(viewport.screen_to_grid(-1.0, 40.0), (-1, 2));
    }

    #[test]
    fn test_grid_to_screen() {
        let viewport = Viewport::new(16.0);
        assert_eq!(viewport.grid_to_screen(3, 2), (48.0, 32.0));
    }

    #[test]
    fn test_grid_dimensions() {
        let viewport = Viewport::new(16.0);
        assert_eq!(viewport.grid_dimensions(1280.0, 720.0), (80, 45));
        assert_eq!(viewport.grid_dimensions(1290.0, 735.0), (80, 45));
        assert_eq!(viewport.grid_dimensions(5.0, 0.0), (1, 1));
        assert_eq!(viewport.grid_dimensions(-30.0, f32::NAN), (1, 1));
    }

    #[test]
    fn test_cell_size_clamped() {
        assert_eq!(Viewport::new(0.0).cell_size, 1.0);
    }
}
