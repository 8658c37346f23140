// Copyright @yucwang 2026

use crate::math::bitmap::Bitmap;
use crate::math::constants::Vector2f;
use crate::math::ray::Ray3f;

/// A camera together with the film it exposes.
pub trait Sensor: Send + Sync {
    /// Primary ray through normalized film position `u` in [0, 1]^2.
    fn sample_ray(&self, u: &Vector2f) -> Ray3f;
    fn bitmap(&self) -> &Bitmap;
    fn bitmap_mut(&mut self) -> &mut Bitmap;

    /// Film resolution as `(width, height)` in pixels.
    fn film_size(&self) -> (usize, usize) {
        let bitmap = self.bitmap();
        (bitmap.width(), bitmap.height())
    }

    fn describe(&self) -> String {
        String::from("Sensor")
    }
}
