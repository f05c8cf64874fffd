//! plot3d grid driver.
//!
//! A [`Grid`] owns a square, row-major buffer of sampled positions and
//! refreshes it once per [`Grid::tick`] by evaluating the selected surface
//! function at every cell center. The presentation layer reads the buffer
//! through [`Grid::positions`] between ticks; it never writes.

pub mod config;
pub mod grid;
mod parallel;

pub use config::GridConfig;
pub use grid::Grid;
