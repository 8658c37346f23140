// Copyright @yucwang 2026

use crate::core::config::FeatureConfig;
use crate::core::integrator::Integrator;
use crate::core::intersector::Intersector;
use crate::core::render_state::RenderState;
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::core::shading::ShadingModel;
use crate::integrators::direct_lighting::compute_light_contribution;
use crate::math::constants::{Float, Vector2f};
use crate::math::spectrum::{RGBSpectrum, Spectrum};

/// Single-bounce integrator: direct light at the first visible surface.
pub struct DirectIntegrator {
    pub features: FeatureConfig,
    pub samples_per_pixel: u32,
    shading: Box<dyn ShadingModel>,
}

impl DirectIntegrator {
    pub fn new(features: FeatureConfig, samples_per_pixel: u32, shading: Box<dyn ShadingModel>) -> Self {
        Self { features, samples_per_pixel, shading }
    }

    pub fn shading(&self) -> &dyn ShadingModel {
        self.shading.as_ref()
    }
}

impl Integrator for DirectIntegrator {
    fn trace_ray_forward(&self, scene: &Scene, sensor: &dyn Sensor, pixel: Vector2f,
                         sampler: &mut dyn Sampler) -> RGBSpectrum {
        let (width, height) = sensor.film_size();
        let jitter = sampler.next_2d();
        let film = Vector2f::new((pixel.x + jitter.x) / width as Float,
                                 (pixel.y + jitter.y) / height as Float);
        let mut ray = sensor.sample_ray(&film);

        let hit = match scene.ray_intersection(&mut ray) {
            Some(hit) => hit,
            None => return RGBSpectrum::black(),
        };

        let state = RenderState::new(scene.lights(), &self.features, scene, self.shading.as_ref());
        compute_light_contribution(&state, sampler, &ray, &hit)
    }

    fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }
}
