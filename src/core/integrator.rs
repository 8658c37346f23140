// Copyright @yucwang 2026

use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::constants::Vector2f;
use crate::math::spectrum::RGBSpectrum;

/// Radiance estimator for a single camera sample.
pub trait Integrator: Sync {
    /// One radiance sample through pixel `pixel` (integer pixel coordinates).
    /// Every random number, including the sub-pixel jitter, comes from
    /// `sampler`, which belongs to the calling worker alone.
    fn trace_ray_forward(&self, scene: &Scene, sensor: &dyn Sensor, pixel: Vector2f,
                         sampler: &mut dyn Sampler) -> RGBSpectrum;
    fn samples_per_pixel(&self) -> u32;
}
