// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f};

/// Value of `Ray3f::t` before any intersection has been found.
pub const NO_HIT: Float = std::f32::MAX;

#[derive(Debug, Clone, Copy)]
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
    pub min_t: Float,
    /// Distance to the nearest intersection found so far, or `NO_HIT`.
    pub t: Float,
}

impl Ray3f {
    pub fn new(o: Vector3f, d: Vector3f) -> Self {
        Self::with_segment(o, d, None, None)
    }

    pub fn with_segment(o: Vector3f, d: Vector3f,
                        min_t: Option<Float>, max_t: Option<Float>) -> Self {
        Self { origin: o, dir: d.normalize(),
               min_t: min_t.unwrap_or(0.0),
               t: max_t.unwrap_or(NO_HIT) }
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.dir * t
    }

    /// Point at the current `t`, i.e. the hit point after a successful cast.
    pub fn hit_point(&self) -> Vector3f {
        self.at(self.t)
    }

    pub fn has_hit(&self) -> bool {
        self.t != NO_HIT
    }

    pub fn update(&mut self, t: Float) -> bool {
        if t < self.min_t || t > self.t {
            false
        } else {
            self.t = t;
            true
        }
    }

    pub fn test_segment(&self, t: Float) -> bool {
        t >= self.min_t && t <= self.t
    }
}

/* Tests for Ray */
