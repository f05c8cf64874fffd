use crate::{Point3, Vector3};
use plot3d_core::Tolerance;
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in 3D space.
///
/// Used to summarize one frame's worth of sampled positions, mainly so a
/// host can frame its camera around the animated graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[Point3]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min = points[0];
        let mut max = points[0];
        for &p in &points[1..] {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Self { min, max })
    }

    pub fn contains_point(&self, p: Point3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Containment with the faces pushed out by `tol.linear`, for comparing
    /// sampled positions against analytic bounds.
    pub fn contains_point_within(&self, p: Point3, tol: Tolerance) -> bool {
        self.expand(tol.linear).contains_point(p)
    }

    pub fn expand(&self, amount: f64) -> Self {
        let offset = Vector3::splat(amount);
        Self {
            min: self.min - offset,
            max: self.max + offset,
        }
    }
}
