//! Single traveling wave.

use std::f64::consts::PI;

use plot3d_math::Point3;

/// A sine wave traveling along the XZ diagonal:
/// `y = sin(pi * (u + v + t))`, with `x = u` and `z = v`.
pub fn wave(u: f64, v: f64, t: f64) -> Point3 {
    Point3::new(u, (PI * (u + v + t)).sin(), v)
}
