/// Tolerance for comparing sampled positions and amplitudes.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for coordinate comparisons (in graph units)
    pub linear: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;

    pub fn new(linear: f64) -> Self {
        Self { linear }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LINEAR)
    }
}
