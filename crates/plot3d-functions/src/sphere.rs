//! Animated UV sphere.

use std::f64::consts::PI;

use plot3d_math::Point3;

/// A UV sphere whose radius is perturbed by a traveling twist term:
///
/// `r = 0.9 + 0.1 * sin(pi * (6u + 4v + t))`, so the surface stays inside
/// the shell `0.8 <= |p| <= 1.0` at all times.
///
/// `u` sweeps longitude and `v` latitude, both over `[-1, 1]`.
pub fn sphere(u: f64, v: f64, t: f64) -> Point3 {
    let r = 0.9 + 0.1 * (PI * (6.0 * u + 4.0 * v + t)).sin();
    let s = r * (0.5 * PI * v).cos();
    Point3::new(
        s * (PI * u).sin(),
        r * (0.5 * PI * v).sin(),
        s * (PI * u).cos(),
    )
}
