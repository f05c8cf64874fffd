//! Radial ripple.

use std::f64::consts::PI;

use plot3d_math::Point3;

/// A wave radiating outward from the origin of the UV plane:
///
/// `y = sin(pi * (4d - t)) / (1 + 10d)` with `d = sqrt(u^2 + v^2)`.
///
/// The `1 + 10d` divisor keeps the amplitude finite at the origin and
/// attenuates the wave with distance.
pub fn ripple(u: f64, v: f64, t: f64) -> Point3 {
    let d = (u * u + v * v).sqrt();
    let y = (PI * (4.0 * d - t)).sin() / (1.0 + 10.0 * d);
    Point3::new(u, y, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripple_finite_at_origin() {
        let p = ripple(0.0, 0.0, 0.4);
        assert!(p.y.is_finite());
        assert!(p.y.abs() <= 1.0);
    }

    #[test]
    fn test_ripple_envelope_decays_with_distance() {
        // The attenuation envelope 1/(1+10d) bounds |y|; sample along a ray
        // and check the envelope itself is monotone.
        let t = 0.0;
        let mut prev_envelope = f64::INFINITY;
        for k in 1..30 {
            let d = k as f64 * 0.045;
            let u = d / 2f64.sqrt();
            let p = ripple(u, u, t);
            let envelope = 1.0 / (1.0 + 10.0 * d);
            assert!(
                p.y.abs() <= envelope + 1e-12,
                "Amplitude {} exceeds envelope {} at d={}",
                p.y.abs(),
                envelope,
                d
            );
            assert!(envelope < prev_envelope);
            prev_envelope = envelope;
        }
    }

    #[test]
    fn test_ripple_radially_symmetric() {
        // Same distance from origin => same height.
        let t = 1.3;
        let p1 = ripple(0.5, 0.0, t);
        let p2 = ripple(0.0, 0.5, t);
        let p3 = ripple(0.3, 0.4, t);
        assert!((p1.y - p2.y).abs() < 1e-12);
        assert!((p1.y - p3.y).abs() < 1e-12); // both at d = 0.5
    }
}
