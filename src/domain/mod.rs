mod algorithm;
mod cell;
mod grid;
pub mod color;
pub mod simulation;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use color::{Rgb, color_for_age};
pub use grid::Grid;
