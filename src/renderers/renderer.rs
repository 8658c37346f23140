// Copyright @yucwang 2026

use crate::core::scene::Scene;
use crate::math::bitmap::Bitmap;

/// Turns a scene into an image through one of its cameras.
///
/// The scene is borrowed mutably only so the camera can be taken out while
/// its film is written; it is put back before `render` returns.
pub trait Renderer {
    fn render(&self, scene: &mut Scene) -> Bitmap;
}
