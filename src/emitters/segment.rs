// Copyright @yucwang 2026

use crate::core::emitter::LightSample;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBSpectrum;

/// Line light between two endpoints, with a color attached to each end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLight {
    pub endpoint0: Vector3f,
    pub endpoint1: Vector3f,
    pub color0: RGBSpectrum,
    pub color1: RGBSpectrum,
}

impl SegmentLight {
    pub fn new(endpoint0: Vector3f, endpoint1: Vector3f,
               color0: RGBSpectrum, color1: RGBSpectrum) -> Self {
        Self { endpoint0, endpoint1, color0, color1 }
    }

    /// Maps `u` in [0, 1) to a point on the segment and the linearly
    /// interpolated color there. The map is affine, so a uniform `u` gives
    /// points uniform in arc length. A zero-length segment is not rejected.
    pub fn sample(&self, u: Float) -> LightSample {
        LightSample {
            position: self.endpoint0 + (self.endpoint1 - self.endpoint0) * u,
            color: self.color0 + (self.color1 - self.color0) * u,
        }
    }
}
