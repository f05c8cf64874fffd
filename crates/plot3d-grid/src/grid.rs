//! The grid driver: maps the discrete sample index space onto the
//! continuous `[-1, 1]` domain and refreshes all positions once per tick.

use plot3d_core::{Result, Validate};
use plot3d_functions::{lookup, FunctionId};
use plot3d_math::{Aabb3, Point3};

use crate::config::GridConfig;

/// A square grid of sampled surface positions.
///
/// The buffer is row-major: sample `i` sits at column `x = i % resolution`
/// and row `z = i / resolution`. Each cell is sampled at its center,
/// `u = (x + 0.5) * step - 1` with `step = 2 / resolution`, so the domain
/// boundary itself is never sampled and coverage of `[-1, 1]` is symmetric
/// at any resolution.
///
/// Construction is the configuration boundary: a `Grid` always has a valid
/// resolution and an allocated buffer, so there is no unconfigured state to
/// guard against at tick time.
#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) resolution: usize,
    pub(crate) function: FunctionId,
    pub(crate) positions: Vec<Point3>,
}

impl Grid {
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            resolution: config.resolution,
            function: config.function,
            positions: vec![Point3::ZERO; config.resolution * config.resolution],
        })
    }

    /// Switch the active surface function. Takes effect on the next tick;
    /// the buffer is left untouched.
    pub fn set_function(&mut self, function: FunctionId) {
        self.function = function;
    }

    /// Change the grid side length, reallocating the buffer to
    /// `resolution * resolution` slots. The buffer contents are stale until
    /// the next [`tick`](Self::tick).
    pub fn set_resolution(&mut self, resolution: usize) -> Result<()> {
        GridConfig::new(resolution, self.function).validate()?;
        if resolution != self.resolution {
            self.resolution = resolution;
            self.positions = vec![Point3::ZERO; resolution * resolution];
        }
        Ok(())
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn function(&self) -> FunctionId {
        self.function
    }

    /// Domain width of one cell, `2 / resolution`. Hosts scale their visual
    /// primitives by this so adjacent samples touch.
    pub fn step(&self) -> f64 {
        2.0 / self.resolution as f64
    }

    pub fn sample_count(&self) -> usize {
        self.positions.len()
    }

    /// Evaluate the selected function at every cell center for time `t`,
    /// overwriting the whole buffer. No allocation; O(resolution^2).
    pub fn tick(&mut self, t: f64) {
        let f = lookup(self.function);
        let resolution = self.resolution;
        let step = self.step();

        for (z, row) in self.positions.chunks_mut(resolution).enumerate() {
            let v = (z as f64 + 0.5) * step - 1.0;
            for (x, slot) in row.iter_mut().enumerate() {
                let u = (x as f64 + 0.5) * step - 1.0;
                *slot = f(u, v, t);
            }
        }
    }

    /// Read-only view of the most recent tick's positions, row-major,
    /// length `resolution * resolution`.
    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    /// Bounding box of the current buffer, for host camera framing.
    pub fn bounds(&self) -> Option<Aabb3> {
        Aabb3::from_points(&self.positions)
    }
}
