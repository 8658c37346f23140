// Copyright @yucwang 2026

//! Monte Carlo estimators for the direct illumination at one intersection.

use crate::core::emitter::Light;
use crate::core::interaction::HitInfo;
use crate::core::render_state::RenderState;
use crate::core::sampler::Sampler;
use crate::emitters::parallelogram::ParallelogramLight;
use crate::emitters::point::PointLight;
use crate::emitters::segment::SegmentLight;
use crate::integrators::visibility::visibility_of_light_sample;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;
use crate::math::spectrum::{RGBSpectrum, Spectrum};

/// Reflected radiance along `ray` due to a single point light.
///
/// `ray.t` must hold the distance to the intersection described by
/// `hit_info`. A fully occluded light returns black without calling the
/// shading model.
pub fn point_light_contribution(state: &RenderState,
                                light: &PointLight,
                                ray: &Ray3f,
                                hit_info: &HitInfo) -> RGBSpectrum {
    let p = ray.hit_point();
    let visible = visibility_of_light_sample(state, &p, &light.position, &light.color);
    if visible.is_black() {
        return RGBSpectrum::black();
    }

    let view_dir = -ray.dir();
    let light_dir = (light.position - p).normalize();
    visible.component_mul(&state.shading.shade(&view_dir, &light_dir, &light.color, hit_info))
}

/// Sum of `num_samples` point-light contributions drawn uniformly along the
/// segment. The sum is not divided by `num_samples`.
pub fn segment_light_contribution(state: &RenderState,
                                  sampler: &mut dyn Sampler,
                                  light: &SegmentLight,
                                  ray: &Ray3f,
                                  hit_info: &HitInfo,
                                  num_samples: u32) -> RGBSpectrum {
    let mut total = RGBSpectrum::black();
    for _ in 0..num_samples {
        let sample = light.sample(sampler.next_1d());
        let sample_light = PointLight::new(sample.position, sample.color);
        total += point_light_contribution(state, &sample_light, ray, hit_info);
    }
    total
}

/// Mean reflected radiance over `num_samples` positions drawn uniformly on
/// the parallelogram. The visible light color of each sample is the incident
/// radiance handed to the shading model. Zero samples yield black.
pub fn parallelogram_light_contribution(state: &RenderState,
                                        sampler: &mut dyn Sampler,
                                        light: &ParallelogramLight,
                                        ray: &Ray3f,
                                        hit_info: &HitInfo,
                                        num_samples: u32) -> RGBSpectrum {
    if num_samples == 0 {
        return RGBSpectrum::black();
    }

    let p = ray.hit_point();
    let view_dir = -ray.dir();
    let mut total = RGBSpectrum::black();
    for _ in 0..num_samples {
        let sample = light.sample(&sampler.next_2d());
        let visible = visibility_of_light_sample(state, &p, &sample.position, &sample.color);
        if visible.is_black() {
            continue;
        }
        let light_dir = (sample.position - p).normalize();
        total += state.shading.shade(&view_dir, &light_dir, &visible, hit_info);
    }
    total / (num_samples as Float)
}

/// Direct illumination reflected along `ray` from every light in the scene.
pub fn compute_light_contribution(state: &RenderState,
                                  sampler: &mut dyn Sampler,
                                  ray: &Ray3f,
                                  hit_info: &HitInfo) -> RGBSpectrum {
    let num_samples = state.features.num_shadow_samples;
    let mut lo = RGBSpectrum::black();
    for light in state.lights {
        lo += match light {
            Light::Point(point) => point_light_contribution(state, point, ray, hit_info),
            Light::Segment(segment) =>
                segment_light_contribution(state, sampler, segment, ray, hit_info, num_samples),
            Light::Parallelogram(parallelogram) =>
                parallelogram_light_contribution(state, sampler, parallelogram, ray, hit_info, num_samples),
        };
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::FeatureConfig;
    use crate::core::material::Material;
    use crate::core::rng::LcgRng;
    use crate::core::scene::{Scene, SceneObject};
    use crate::core::shading::ShadingModel;
    use crate::materials::lambertian::LambertianShading;
    use crate::math::constants::{Vector2f, Vector3f};
    use crate::shapes::parallelogram::Parallelogram;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Returns the incident radiance unchanged and counts its invocations.
    struct CountingShading {
        calls: AtomicUsize,
    }

    impl CountingShading {
        fn new() -> Self {
            Self { calls: AtomicUsize::new(0) }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::Relaxed)
        }
    }

    impl ShadingModel for CountingShading {
        fn shade(&self, _v: &Vector3f, _l: &Vector3f, radiance: &RGBSpectrum, _h: &HitInfo) -> RGBSpectrum {
            self.calls.fetch_add(1, Ordering::Relaxed);
            *radiance
        }
    }

    /// `radiance * max(0, n.l)^3`; averaged over a square light this has a
    /// closed form through the solid angle of the square.
    struct CubedCosineShading;

    impl ShadingModel for CubedCosineShading {
        fn shade(&self, _v: &Vector3f, l: &Vector3f, radiance: &RGBSpectrum, h: &HitInfo) -> RGBSpectrum {
            let cos = h.normal().dot(l).max(0.0);
            radiance * (cos * cos * cos)
        }
    }

    /// Fixed sample stream.
    struct SequenceSampler {
        values: Vec<Float>,
        cursor: usize,
    }

    impl Sampler for SequenceSampler {
        fn next_1d(&mut self) -> Float {
            let value = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            value
        }

        fn next_2d(&mut self) -> Vector2f {
            let u = self.next_1d();
            let v = self.next_1d();
            Vector2f::new(u, v)
        }
    }

    // Incident ray that hits the origin from below: t = 1 lands exactly on it.
    fn incident_ray() -> Ray3f {
        let mut ray = Ray3f::new(Vector3f::new(0.0, 0.0, -1.0), Vector3f::new(0.0, 0.0, 1.0));
        ray.t = 1.0;
        ray
    }

    fn floor_hit() -> HitInfo {
        HitInfo::new(Vector3f::zeros(), Vector3f::new(0.0, 1.0, 0.0), Vector2f::zeros(), 1.0)
            .with_material(Material::diffuse(RGBSpectrum::new(0.8, 0.6, 0.4)))
    }

    fn blocker_at(y: Float, material: Material) -> Scene {
        let wall = Parallelogram::new(Vector3f::new(-1.0, y, -1.0),
                                      Vector3f::new(2.0, 0.0, 0.0),
                                      Vector3f::new(0.0, 0.0, 2.0));
        Scene::with_objects(vec![SceneObject::new(Arc::new(wall), material)], Vec::new())
    }

    #[test]
    fn test_point_light_unoccluded_matches_shading() {
        let scene = Scene::new();
        let features = FeatureConfig::new(false, false, 4);
        let shading = LambertianShading;
        let state = RenderState::new(&[], &features, &scene, &shading);
        let light = PointLight::new(Vector3f::new(0.0, 5.0, 0.0), RGBSpectrum::new(1.0, 1.0, 1.0));
        let ray = incident_ray();
        let hit = floor_hit();

        let result = point_light_contribution(&state, &light, &ray, &hit);
        let expected = shading.shade(&-ray.dir(),
                                     &Vector3f::new(0.0, 5.0, 0.0).normalize(),
                                     &RGBSpectrum::new(1.0, 1.0, 1.0),
                                     &hit);
        assert_eq!(result, expected);
        assert!(!result.is_black());
    }

    #[test]
    fn test_point_light_occluded_skips_shading() {
        let shading = CountingShading::new();
        let light = PointLight::new(Vector3f::new(0.0, 5.0, 0.0), RGBSpectrum::new(1.0, 1.0, 1.0));

        // Binary shadows: any wall blocks.
        let scene = blocker_at(2.0, Material::default());
        let features = FeatureConfig::new(true, false, 4);
        let state = RenderState::new(&[], &features, &scene, &shading);
        let result = point_light_contribution(&state, &light, &incident_ray(), &floor_hit());
        assert_eq!(result, RGBSpectrum::black());

        // Transparency shadows: a black opaque wall lets nothing through.
        let scene = blocker_at(2.0, Material::diffuse(RGBSpectrum::black()));
        let features = FeatureConfig::new(true, true, 4);
        let state = RenderState::new(&[], &features, &scene, &shading);
        let result = point_light_contribution(&state, &light, &incident_ray(), &floor_hit());
        assert_eq!(result, RGBSpectrum::black());

        assert_eq!(shading.calls(), 0);
    }

    #[test]
    fn test_parallelogram_zero_samples_is_black() {
        let scene = Scene::new();
        let features = FeatureConfig::new(false, false, 0);
        let shading = CountingShading::new();
        let state = RenderState::new(&[], &features, &scene, &shading);
        let light = ParallelogramLight::uniform(Vector3f::new(-1.0, 1.0, -1.0),
                                                Vector3f::new(2.0, 0.0, 0.0),
                                                Vector3f::new(0.0, 0.0, 2.0),
                                                RGBSpectrum::new(1.0, 1.0, 1.0));
        let mut rng = LcgRng::new(3);

        let result = parallelogram_light_contribution(&state, &mut rng, &light, &incident_ray(), &floor_hit(), 0);
        assert_eq!(result, RGBSpectrum::black());
        assert_eq!(shading.calls(), 0);
    }

    #[test]
    fn test_segment_zero_samples_is_black() {
        let scene = Scene::new();
        let features = FeatureConfig::new(false, false, 0);
        let shading = CountingShading::new();
        let state = RenderState::new(&[], &features, &scene, &shading);
        let light = SegmentLight::new(Vector3f::new(-1.0, 1.0, 0.0), Vector3f::new(1.0, 1.0, 0.0),
                                      RGBSpectrum::new(1.0, 1.0, 1.0), RGBSpectrum::new(1.0, 1.0, 1.0));
        let mut rng = LcgRng::new(3);

        let result = segment_light_contribution(&state, &mut rng, &light, &incident_ray(), &floor_hit(), 0);
        assert_eq!(result, RGBSpectrum::black());
    }

    #[test]
    fn test_segment_sums_and_parallelogram_averages() {
        let scene = Scene::new();
        let features = FeatureConfig::new(false, false, 4);
        let shading = CountingShading::new();
        let state = RenderState::new(&[], &features, &scene, &shading);
        let color = RGBSpectrum::new(0.5, 0.5, 0.5);
        let segment = SegmentLight::new(Vector3f::new(-1.0, 1.0, 0.0), Vector3f::new(1.0, 1.0, 0.0), color, color);
        let quad = ParallelogramLight::uniform(Vector3f::new(-1.0, 1.0, -1.0),
                                               Vector3f::new(2.0, 0.0, 0.0),
                                               Vector3f::new(0.0, 0.0, 2.0),
                                               color);
        let mut sampler = SequenceSampler { values: vec![0.125, 0.375, 0.625, 0.875], cursor: 0 };

        // Segment samples shade as point lights: color * shade(color) = 0.25 each.
        let summed = segment_light_contribution(&state, &mut sampler, &segment, &incident_ray(), &floor_hit(), 4);
        assert!((summed - RGBSpectrum::constant(1.0)).norm() < 1e-6);
        assert_eq!(sampler.cursor, 4);

        let averaged = parallelogram_light_contribution(&state, &mut sampler, &quad, &incident_ray(), &floor_hit(), 4);
        // Parallelogram samples pass the visible color straight to shading.
        assert!((averaged - RGBSpectrum::constant(0.5)).norm() < 1e-6);
        assert_eq!(sampler.cursor, 12);
        assert_eq!(shading.calls(), 8);
    }

    fn small_overhead_light(color: RGBSpectrum) -> ParallelogramLight {
        ParallelogramLight::uniform(Vector3f::new(-0.01, 3.0, -0.01),
                                    Vector3f::new(0.02, 0.0, 0.0),
                                    Vector3f::new(0.0, 0.0, 0.02),
                                    color)
    }

    #[test]
    fn test_parallelogram_shades_with_light_color_once() {
        let scene = Scene::new();
        let features = FeatureConfig::new(true, false, 1);
        let shading = CountingShading::new();
        let state = RenderState::new(&[], &features, &scene, &shading);
        let light = small_overhead_light(RGBSpectrum::constant(2.0));
        let mut rng = LcgRng::new(7);

        let result = parallelogram_light_contribution(&state, &mut rng, &light, &incident_ray(), &floor_hit(), 1);
        assert!((result - RGBSpectrum::constant(2.0)).norm() < 1e-6);
        assert_eq!(shading.calls(), 1);
    }

    #[test]
    fn test_parallelogram_shades_with_attenuated_color() {
        // kd 0.5 and transparency 0.5 pass a quarter of the light.
        let glass = Material::diffuse(RGBSpectrum::constant(0.5)).with_transparency(0.5);
        let scene = blocker_at(2.0, glass);
        let features = FeatureConfig::new(true, true, 2);
        let shading = CountingShading::new();
        let state = RenderState::new(&[], &features, &scene, &shading);
        let light = small_overhead_light(RGBSpectrum::constant(2.0));
        let mut rng = LcgRng::new(7);

        let result = parallelogram_light_contribution(&state, &mut rng, &light, &incident_ray(), &floor_hit(), 2);
        assert!((result - RGBSpectrum::constant(0.5)).norm() < 1e-6);
        assert_eq!(shading.calls(), 2);
    }

    #[test]
    fn test_segment_interpolates_color_along_samples() {
        let scene = Scene::new();
        let features = FeatureConfig::new(false, false, 2);
        let shading = CountingShading::new();
        let state = RenderState::new(&[], &features, &scene, &shading);
        let segment = SegmentLight::new(Vector3f::new(-1.0, 1.0, 0.0), Vector3f::new(1.0, 1.0, 0.0),
                                        RGBSpectrum::new(0.0, 0.0, 0.0), RGBSpectrum::new(1.0, 1.0, 1.0));
        let mut sampler = SequenceSampler { values: vec![0.0, 0.5], cursor: 0 };

        // The u = 0 sample is black and skipped, u = 0.5 gives 0.5 * 0.5.
        let result = segment_light_contribution(&state, &mut sampler, &segment, &incident_ray(), &floor_hit(), 2);
        assert!((result - RGBSpectrum::constant(0.25)).norm() < 1e-6);
        assert_eq!(shading.calls(), 1);
    }

    #[test]
    fn test_compute_light_contribution_sums_all_lights() {
        let scene = Scene::new();
        let features = FeatureConfig::new(false, false, 4);
        let shading = CountingShading::new();
        let color = RGBSpectrum::new(0.5, 0.5, 0.5);
        let lights = vec![
            Light::from(PointLight::new(Vector3f::new(0.0, 5.0, 0.0), RGBSpectrum::new(1.0, 1.0, 1.0))),
            Light::from(SegmentLight::new(Vector3f::new(-1.0, 1.0, 0.0), Vector3f::new(1.0, 1.0, 0.0), color, color)),
            Light::from(ParallelogramLight::uniform(Vector3f::new(-1.0, 1.0, -1.0),
                                                    Vector3f::new(2.0, 0.0, 0.0),
                                                    Vector3f::new(0.0, 0.0, 2.0),
                                                    color)),
        ];
        let state = RenderState::new(&lights, &features, &scene, &shading);
        let mut rng = LcgRng::new(11);

        // point 1.0 + segment 4 * 0.25 + parallelogram mean 0.5
        let result = compute_light_contribution(&state, &mut rng, &incident_ray(), &floor_hit());
        assert!((result - RGBSpectrum::constant(2.5)).norm() < 1e-5);
        assert_eq!(shading.calls(), 9);
    }

    #[test]
    fn test_compute_light_contribution_without_lights_is_black() {
        let scene = Scene::new();
        let features = FeatureConfig::default();
        let shading = CountingShading::new();
        let state = RenderState::new(&[], &features, &scene, &shading);
        let mut rng = LcgRng::new(0);

        let result = compute_light_contribution(&state, &mut rng, &incident_ray(), &floor_hit());
        assert_eq!(result, RGBSpectrum::black());
    }

    #[test]
    fn test_parallelogram_estimate_converges() {
        // Unit-height square light of half-width 1 centred above the origin.
        // Mean of cos^3 over the square is h^2 * solid_angle / area with
        // solid_angle = 4 * asin(a^2 / (a^2 + h^2)) = 2 * pi / 3.
        // The estimate is linear in the light color, here 2.
        let expected: Float = 2.0 * (2.0 * std::f32::consts::PI / 3.0) / 4.0;

        let scene = Scene::new();
        let shading = CubedCosineShading;
        let light = ParallelogramLight::uniform(Vector3f::new(-1.0, 1.0, -1.0),
                                                Vector3f::new(2.0, 0.0, 0.0),
                                                Vector3f::new(0.0, 0.0, 2.0),
                                                RGBSpectrum::constant(2.0));
        let features = FeatureConfig::new(true, false, 0);
        let state = RenderState::new(&[], &features, &scene, &shading);
        let ray = incident_ray();
        let hit = floor_hit();

        let mean_abs_error = |num_samples: u32| -> Float {
            let runs = 32;
            let mut error = 0.0;
            for run in 0..runs {
                let mut rng = LcgRng::new(1000 + run as u64 * 7919);
                let estimate = parallelogram_light_contribution(&state, &mut rng, &light, &ray, &hit, num_samples);
                error += (estimate.x - expected).abs();
            }
            error / runs as Float
        };

        let coarse = mean_abs_error(16);
        let fine = mean_abs_error(4096);
        assert!(fine < coarse);
        assert!(fine < 0.02);
    }
}
