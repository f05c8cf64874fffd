//! Superposition of three waves.

use std::f64::consts::PI;

use plot3d_math::Point3;

/// Three superposed sine waves at different frequencies, phases, and time
/// scales:
///
/// `y = [sin(pi(u + t/2)) + sin(2pi(v + t))/2 + sin(pi(u + v + t/4))] / 2.5`
///
/// The component amplitudes are 1, 0.5, and 1, so dividing the sum by 2.5
/// keeps the combined height within `[-1, 1]`.
pub fn multi_wave(u: f64, v: f64, t: f64) -> Point3 {
    let mut y = (PI * (u + 0.5 * t)).sin();
    y += 0.5 * (2.0 * PI * (v + t)).sin();
    y += (PI * (u + v + 0.25 * t)).sin();
    Point3::new(u, y * (1.0 / 2.5), v)
}
