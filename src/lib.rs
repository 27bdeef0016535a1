// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - command line, rendering, input
pub mod cli;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Grid, Rgb, color_for_age};
pub use application::{Brush, Config, GameState};
pub use cli::{Args, DisplayMode};
