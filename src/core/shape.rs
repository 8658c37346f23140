// Copyright @yucwang 2023

use crate::core::interaction::HitInfo;
use crate::math::ray::Ray3f;

pub trait Shape: Send + Sync {
    fn name(&self) -> &'static str;
    /// Intersection inside `[ray.min_t, ray.t]`. Does not modify the ray.
    fn ray_intersection(&self, ray: &Ray3f) -> Option<HitInfo>;
}
