//! Parallel tick: rows distributed over the rayon pool.

use plot3d_functions::lookup;
use rayon::prelude::*;

use crate::grid::Grid;

impl Grid {
    /// Like [`tick`](Grid::tick), with rows evaluated in parallel.
    ///
    /// Every sample is an independent pure evaluation and each row chunk is
    /// written by exactly one worker, so the result is bit-identical to the
    /// sequential tick.
    pub fn par_tick(&mut self, t: f64) {
        let f = lookup(self.function);
        let resolution = self.resolution;
        let step = 2.0 / resolution as f64;

        self.positions
            .par_chunks_mut(resolution)
            .enumerate()
            .for_each(|(z, row)| {
                let v = (z as f64 + 0.5) * step - 1.0;
                for (x, slot) in row.iter_mut().enumerate() {
                    let u = (x as f64 + 0.5) * step - 1.0;
                    *slot = f(u, v, t);
                }
            });
    }
}
