// Copyright @yucwang 2026

use crate::core::interaction::HitInfo;
use crate::math::ray::Ray3f;

/// Nearest-hit query against scene geometry.
///
/// On a hit `ray.t` is set to the distance of the nearest intersection and the
/// surface data is returned. On a miss `ray.t` is left untouched, which for a
/// freshly constructed ray means it still holds `NO_HIT`. Implementations must
/// be deterministic and must not mutate the scene.
pub trait Intersector: Sync {
    fn ray_intersection(&self, ray: &mut Ray3f) -> Option<HitInfo>;
}
