// Copyright @yucwang 2026

use crate::core::sensor::Sensor;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;

/// Pinhole camera. Film position (0, 0) is the top-left corner.
pub struct PerspectiveCamera {
    origin: Vector3f,
    forward: Vector3f,
    right: Vector3f,
    up: Vector3f,
    half_extent: Vector2f,
    near_clip: Float,
    far_clip: Float,
    bitmap: Bitmap,
}

impl PerspectiveCamera {
    pub fn new(origin: Vector3f,
               target: Vector3f,
               up: Vector3f,
               fov_y_radians: Float,
               aspect: Float,
               width: usize,
               height: usize,
               near_clip: Float,
               far_clip: Float) -> Self {
        let forward = (target - origin).normalize();
        let right = forward.cross(&up).normalize();
        let up = right.cross(&forward);
        let tan_half_fov_y = (0.5 * fov_y_radians).tan();

        Self {
            origin,
            forward,
            right,
            up,
            half_extent: Vector2f::new(aspect * tan_half_fov_y, tan_half_fov_y),
            near_clip,
            far_clip,
            bitmap: Bitmap::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.bitmap.width()
    }

    pub fn height(&self) -> usize {
        self.bitmap.height()
    }
}

impl Sensor for PerspectiveCamera {
    fn sample_ray(&self, u: &Vector2f) -> Ray3f {
        let px = (2.0 * u.x - 1.0) * self.half_extent.x;
        let py = (1.0 - 2.0 * u.y) * self.half_extent.y;
        let dir = (self.forward + self.right * px + self.up * py).normalize();

        // Clip planes are perpendicular to the view axis.
        let cos_axis = dir.dot(&self.forward);
        Ray3f::with_segment(self.origin, dir,
                            Some(self.near_clip / cos_axis),
                            Some(self.far_clip / cos_axis))
    }

    fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    fn bitmap_mut(&mut self) -> &mut Bitmap {
        &mut self.bitmap
    }

    fn describe(&self) -> String {
        format!("PerspectiveCamera {{ origin: {:?}, forward: {:?}, {}x{}, fov_y: {} }}",
                self.origin, self.forward, self.width(), self.height(),
                2.0 * self.half_extent.y.atan())
    }
}
