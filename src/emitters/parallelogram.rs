// Copyright @yucwang 2026

use crate::core::emitter::LightSample;
use crate::math::constants::{Vector2f, Vector3f};
use crate::math::spectrum::RGBSpectrum;

/// Area light spanned by `v0`, `v0 + edge01`, `v0 + edge02` and
/// `v0 + edge01 + edge02`, carrying `color0..color3` at those corners in that
/// order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelogramLight {
    pub v0: Vector3f,
    pub edge01: Vector3f,
    pub edge02: Vector3f,
    pub color0: RGBSpectrum,
    pub color1: RGBSpectrum,
    pub color2: RGBSpectrum,
    pub color3: RGBSpectrum,
}

impl ParallelogramLight {
    pub fn new(v0: Vector3f, edge01: Vector3f, edge02: Vector3f,
               colors: [RGBSpectrum; 4]) -> Self {
        Self { v0, edge01, edge02,
               color0: colors[0], color1: colors[1],
               color2: colors[2], color3: colors[3] }
    }

    pub fn uniform(v0: Vector3f, edge01: Vector3f, edge02: Vector3f, color: RGBSpectrum) -> Self {
        Self::new(v0, edge01, edge02, [color; 4])
    }

    /// Maps `(u, v)` in [0, 1)^2 to `v0 + u * edge01 + v * edge02` and the
    /// bilinear blend of the corner colors. The Jacobian is constant, so the
    /// positions are uniform over the area. Degenerate edges are not rejected.
    pub fn sample(&self, uv: &Vector2f) -> LightSample {
        let (u, v) = (uv.x, uv.y);
        let position = self.v0 + self.edge01 * u + self.edge02 * v;

        // (0,0) -> color0, (1,0) -> color1, (0,1) -> color2, (1,1) -> color3
        let color = self.color0 * ((1.0 - u) * (1.0 - v))
            + self.color1 * (u * (1.0 - v))
            + self.color2 * ((1.0 - u) * v)
            + self.color3 * (u * v);

        LightSample { position, color }
    }
}
