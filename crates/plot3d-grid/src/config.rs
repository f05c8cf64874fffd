use plot3d_core::{GraphError, Result, Validate};
use plot3d_functions::FunctionId;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Grid parameters supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Side length of the square sample grid; the buffer holds
    /// `resolution * resolution` positions.
    pub resolution: usize,
    /// The surface function evaluated on each tick.
    pub function: FunctionId,
}

impl GridConfig {
    /// The range editor-facing hosts typically offer. The core accepts any
    /// resolution of at least 1; clamping to this range is host policy.
    pub const RESOLUTION_RANGE: RangeInclusive<usize> = 10..=100;

    pub fn new(resolution: usize, function: FunctionId) -> Self {
        Self {
            resolution,
            function,
        }
    }
}

impl Validate for GridConfig {
    fn validate(&self) -> Result<()> {
        if self.resolution < 1 {
            return Err(GraphError::InvalidResolution(self.resolution));
        }
        // The buffer holds resolution^2 samples; reject side lengths whose
        // square does not fit in usize.
        if self.resolution.checked_mul(self.resolution).is_none() {
            return Err(GraphError::InvalidResolution(self.resolution));
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            resolution: *Self::RESOLUTION_RANGE.start(),
            function: FunctionId::Wave,
        }
    }
}
