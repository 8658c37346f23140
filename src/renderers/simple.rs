// Copyright @yucwang 2021

use crate::core::integrator::Integrator;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f, Vector3f};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

pub use super::renderer::Renderer;

const BLOCK_SIZE: usize = 32;

pub struct SimpleRenderer {
    integrator: Box<dyn Integrator>,
    camera_id: usize,
    seed: u64,
}

/// Seed of the sample stream owned by pixel `(x, y)`.
pub fn pixel_seed(seed: u64, x: usize, y: usize) -> u64 {
    ((seed & 0xFFF) << 32) | (((y as u64) & 0xFFFF) << 16) | ((x as u64) & 0xFFFF)
}

impl SimpleRenderer {
    pub fn new(integrator: Box<dyn Integrator>, camera_id: usize, seed: u64) -> Self {
        Self {
            integrator,
            camera_id,
            seed,
        }
    }

    fn render_pixel(&self, scene: &Scene, sensor: &dyn Sensor, x: usize, y: usize, spp: u32) -> Vector3f {
        // Each pixel owns its sampler, so results do not depend on scheduling.
        let mut rng = LcgRng::new(pixel_seed(self.seed, x, y));
        let pixel = Vector2f::new(x as Float, y as Float);
        let mut color = Vector3f::zeros();
        for _sample in 0..spp {
            color += self.integrator.trace_ray_forward(scene, sensor, pixel, &mut rng);
        }
        color / (spp as Float)
    }
}

impl Renderer for SimpleRenderer {
    fn render(&self, scene: &mut Scene) -> Bitmap {
        let mut sensor = match scene.take_sensor(self.camera_id) {
            Some(sensor) => sensor,
            None => {
                log::warn!("Camera {} not found, nothing rendered.", self.camera_id);
                return Bitmap::new(0, 0);
            }
        };

        let (width, height) = sensor.film_size();
        if width == 0 || height == 0 {
            scene.insert_sensor(self.camera_id, sensor);
            return Bitmap::new(0, 0);
        }
        let spp = match self.integrator.samples_per_pixel() {
            0 => 1,
            v => v,
        };

        let blocks_x = (width + BLOCK_SIZE - 1) / BLOCK_SIZE;
        let blocks_y = (height + BLOCK_SIZE - 1) / BLOCK_SIZE;
        let total_blocks = blocks_x * blocks_y;
        let scene_ref: &Scene = scene;
        let sensor_ref: &dyn Sensor = sensor.as_ref();

        let progress = ProgressBar::new(total_blocks as u64);
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} blocks")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let next_block = Arc::new(AtomicUsize::new(0));
        let thread_count = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        log::info!("Rendering {}x{} at {} spp on {} threads.", width, height, spp, thread_count);

        let (tx, rx) = mpsc::channel::<(usize, usize, usize, usize, Vec<Vector3f>)>();
        let mut output = vec![Vector3f::zeros(); width * height];

        thread::scope(|scope| {
            for _ in 0..thread_count {
                let next_block = Arc::clone(&next_block);
                let tx = tx.clone();
                scope.spawn(move || {
                    loop {
                        let block_index = next_block.fetch_add(1, Ordering::Relaxed);
                        if block_index >= total_blocks {
                            break;
                        }

                        let x0 = (block_index % blocks_x) * BLOCK_SIZE;
                        let y0 = (block_index / blocks_x) * BLOCK_SIZE;
                        let x1 = (x0 + BLOCK_SIZE).min(width);
                        let y1 = (y0 + BLOCK_SIZE).min(height);

                        let mut block = Vec::with_capacity((x1 - x0) * (y1 - y0));
                        for y in y0..y1 {
                            for x in x0..x1 {
                                block.push(self.render_pixel(scene_ref, sensor_ref, x, y, spp));
                            }
                        }
                        if tx.send((x0, y0, x1, y1, block)).is_err() {
                            break;
                        }
                    }
                });
            }

            drop(tx);
            for (x0, y0, x1, y1, block) in rx.iter() {
                for y in y0..y1 {
                    for x in x0..x1 {
                        output[x + width * y] = block[(x - x0) + (x1 - x0) * (y - y0)];
                    }
                }
                progress.inc(1);
            }
        });
        progress.finish_and_clear();

        let bitmap = sensor.bitmap_mut();
        for y in 0..height {
            for x in 0..width {
                bitmap[(x, y)] = output[x + width * y];
            }
        }
        let bitmap = bitmap.clone();
        scene.insert_sensor(self.camera_id, sensor);
        bitmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::FeatureConfig;
    use crate::core::material::Material;
    use crate::core::scene::SceneObject;
    use crate::emitters::parallelogram::ParallelogramLight;
    use crate::integrators::direct::DirectIntegrator;
    use crate::materials::lambertian::LambertianShading;
    use crate::math::spectrum::RGBSpectrum;
    use crate::sensors::perspective::PerspectiveCamera;
    use crate::shapes::parallelogram::Parallelogram;

    fn scene() -> Scene {
        let mut scene = Scene::new();
        let floor = Parallelogram::new(Vector3f::new(-5.0, 0.0, -5.0),
                                       Vector3f::new(0.0, 0.0, 10.0),
                                       Vector3f::new(10.0, 0.0, 0.0));
        scene.add_object(SceneObject::new(Arc::new(floor), Material::diffuse(RGBSpectrum::new(0.8, 0.8, 0.8))));
        scene.add_light(ParallelogramLight::uniform(Vector3f::new(-0.5, 3.0, -0.5),
                                                    Vector3f::new(1.0, 0.0, 0.0),
                                                    Vector3f::new(0.0, 0.0, 1.0),
                                                    RGBSpectrum::new(1.0, 1.0, 1.0)));
        scene.add_sensor(Box::new(PerspectiveCamera::new(Vector3f::new(0.0, 2.0, 4.0),
                                                         Vector3f::new(0.0, 0.0, 0.0),
                                                         Vector3f::new(0.0, 1.0, 0.0),
                                                         0.8, 1.0, 40, 36, 0.0, 100.0)));
        scene
    }

    fn renderer(seed: u64) -> SimpleRenderer {
        let integrator = DirectIntegrator::new(FeatureConfig::default(), 2, Box::new(LambertianShading));
        SimpleRenderer::new(Box::new(integrator), 0, seed)
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut scene = scene();
        let first = renderer(3).render(&mut scene);
        let second = renderer(3).render(&mut scene);

        assert_eq!(first.width(), 40);
        assert_eq!(first.height(), 36);
        assert_eq!(first.raw_copy(), second.raw_copy());
        assert!(scene.camera(0).is_some());

        let center = first[(20, 18)];
        assert!(center.x > 0.0);
    }

    #[test]
    fn test_render_missing_camera() {
        let mut scene = scene();
        let integrator = DirectIntegrator::new(FeatureConfig::default(), 1, Box::new(LambertianShading));
        let image = SimpleRenderer::new(Box::new(integrator), 3, 0).render(&mut scene);
        assert_eq!(image.width(), 0);
    }

    #[test]
    fn test_pixel_seeds_are_distinct() {
        assert_ne!(pixel_seed(0, 1, 0), pixel_seed(0, 0, 1));
        assert_ne!(pixel_seed(0, 1, 0), pixel_seed(1, 1, 0));
    }
}
