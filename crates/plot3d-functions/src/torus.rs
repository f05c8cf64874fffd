//! Animated ring torus.

use std::f64::consts::PI;

use plot3d_math::Point3;

/// A ring torus with both radii animated over time, producing a rotating,
/// pulsing star pattern:
///
/// - major radius `r1 = 0.7 + 0.1 * sin(pi * (6u + t/2))`
/// - minor radius `r2 = 0.15 + 0.05 * sin(pi * (8u + 4v + 2t))`
///
/// `u` describes the ring, `v` the tube circle, both over `[-1, 1]`.
pub fn torus(u: f64, v: f64, t: f64) -> Point3 {
    let r1 = 0.7 + 0.1 * (PI * (6.0 * u + 0.5 * t)).sin();
    let r2 = 0.15 + 0.05 * (PI * (8.0 * u + 4.0 * v + 2.0 * t)).sin();
    let s = r1 + r2 * (PI * v).cos();
    Point3::new(s * (PI * u).sin(), r2 * (PI * v).sin(), s * (PI * u).cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_torus_within_radius_bounds() {
        // r1 in [0.6, 0.8], r2 in [0.1, 0.2]: distance from the Y axis
        // stays within [r1_min - r2_max, r1_max + r2_max] and |y| <= r2_max.
        for k in 0..5 {
            let t = k as f64 * 0.83;
            for i in 0..40 {
                for j in 0..40 {
                    let u = -1.0 + i as f64 * (2.0 / 39.0);
                    let v = -1.0 + j as f64 * (2.0 / 39.0);
                    let p = torus(u, v, t);
                    let dist_xz = (p.x * p.x + p.z * p.z).sqrt();
                    assert!(
                        (0.4 - 1e-12..=1.0 + 1e-12).contains(&dist_xz),
                        "Ring distance out of bounds at u={}, v={}: {}",
                        u,
                        v,
                        dist_xz
                    );
                    assert!(p.y.abs() <= 0.2 + 1e-12, "Tube height out of bounds: {}", p.y);
                }
            }
        }
    }

    #[test]
    fn test_torus_tube_closes() {
        // v = -1 and v = 1 both map to the inner seam of the tube.
        let p1 = torus(0.3, -1.0, 0.9);
        let p2 = torus(0.3, 1.0, 0.9);
        assert!(
            (p1 - p2).length() < 1e-10,
            "Tube seam mismatch: {:?} vs {:?}",
            p1,
            p2
        );
    }

    #[test]
    fn test_torus_ring_closes() {
        // u = -1 and u = 1 map to the same ring position.
        let p1 = torus(-1.0, 0.4, 1.1);
        let p2 = torus(1.0, 0.4, 1.1);
        assert!((p1 - p2).length() < 1e-10);
    }
}
