// Copyright @yucwang 2026

use crate::core::interaction::HitInfo;
use crate::core::shape::Shape;
use crate::math::constants::{EPSILON, Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;

/// Flat quad `origin + u * edge01 + v * edge02` for `(u, v)` in [0, 1]^2.
pub struct Parallelogram {
    origin: Vector3f,
    edge01: Vector3f,
    edge02: Vector3f,
    cross: Vector3f,
    inv_cross_sq: Float,
    normal: Vector3f,
}

impl Parallelogram {
    pub fn new(origin: Vector3f, edge01: Vector3f, edge02: Vector3f) -> Self {
        let cross = edge01.cross(&edge02);
        let cross_sq = cross.norm_squared();
        let inv_cross_sq = if cross_sq > 0.0 { 1.0 / cross_sq } else { 0.0 };
        let normal = if cross_sq > 0.0 { cross / cross_sq.sqrt() } else { Vector3f::new(0.0, 1.0, 0.0) };

        Self { origin, edge01, edge02, cross, inv_cross_sq, normal }
    }
}

impl Shape for Parallelogram {
    fn name(&self) -> &'static str {
        "parallelogram"
    }

    fn ray_intersection(&self, ray: &Ray3f) -> Option<HitInfo> {
        let n_dot_dir = self.normal.dot(&ray.dir());
        if n_dot_dir > -EPSILON && n_dot_dir < EPSILON {
            return None;
        }

        let t = self.normal.dot(&(self.origin - ray.origin())) / n_dot_dir;
        if !ray.test_segment(t) {
            return None;
        }

        let p = ray.at(t);
        let rel = p - self.origin;
        let u = rel.cross(&self.edge02).dot(&self.cross) * self.inv_cross_sq;
        let v = self.edge01.cross(&rel).dot(&self.cross) * self.inv_cross_sq;
        if u < 0.0 || u > 1.0 || v < 0.0 || v > 1.0 {
            return None;
        }

        Some(HitInfo::new(p, self.normal, Vector2f::new(u, v), t))
    }
}
