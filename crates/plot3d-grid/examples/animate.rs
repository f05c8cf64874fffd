//! Headless animation driver: ticks a grid through a few seconds of
//! simulated time for every catalog function and prints frame bounds.
//!
//! Run with: cargo run --example animate

use plot3d_core::Result;
use plot3d_functions::FunctionId;
use plot3d_grid::{Grid, GridConfig};

const RESOLUTION: usize = 50;
const FRAMES: usize = 120;
const DT: f64 = 1.0 / 60.0;

fn main() -> Result<()> {
    let mut grid = Grid::new(GridConfig::new(RESOLUTION, FunctionId::Wave))?;

    for function in FunctionId::ALL {
        grid.set_function(function);

        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for frame in 0..FRAMES {
            grid.par_tick(frame as f64 * DT);
            if let Some(bounds) = grid.bounds() {
                min_y = min_y.min(bounds.min.y);
                max_y = max_y.max(bounds.max.y);
            }
        }

        println!(
            "{:>9}: {} samples, y in [{:+.3}, {:+.3}] over {} frames",
            function,
            grid.sample_count(),
            min_y,
            max_y,
            FRAMES
        );
    }

    Ok(())
}
