// Copyright @yucwang 2023

use crate::core::interaction::HitInfo;
use crate::core::shape::Shape;
use crate::math::constants::{ EPSILON, Vector2f, Vector3f };
use crate::math::ray::Ray3f;

pub struct Triangle {
    p0: Vector3f,
    p1: Vector3f,
    p2: Vector3f,
    normal: Vector3f,
}

impl Triangle {
    pub fn new(new_p0: Vector3f, new_p1: Vector3f, new_p2: Vector3f) -> Self {
        let normal = (new_p1 - new_p0).cross(&(new_p2 - new_p0)).normalize();
        Triangle { p0: new_p0, p1: new_p1, p2: new_p2, normal }
    }
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "triangle"
    }

    // Moller-Trumbore
    fn ray_intersection(&self, ray: &Ray3f) -> Option<HitInfo> {
        let edge0 = self.p1 - self.p0;
        let edge1 = self.p2 - self.p0;
        let p_vec = ray.dir().cross(&edge1);
        let det = edge0.dot(&p_vec);
        if det > -EPSILON && det < EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let t_vec = ray.origin() - self.p0;
        let u = t_vec.dot(&p_vec) * inv_det;
        if u < 0.0 || u > 1.0 {
            return None;
        }

        let q_vec = t_vec.cross(&edge0);
        let v = ray.dir().dot(&q_vec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge1.dot(&q_vec) * inv_det;
        if !ray.test_segment(t) {
            return None;
        }

        Some(HitInfo::new(ray.at(t), self.normal, Vector2f::new(u, v), t))
    }
}
