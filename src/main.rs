// Copyright 2020 TwoCookingMice

use lucent::core::config::FeatureConfig;
use lucent::core::scene_loader::load_scene_with_settings;
use lucent::core::shading::ShadingModel;
use lucent::integrators::direct::DirectIntegrator;
use lucent::io::exr_utils;
use lucent::materials::shading_model_by_name;
use lucent::renderers::simple::{ Renderer, SimpleRenderer };

use std::env;

fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <scene.xml> <output.exr> [--spp N] [--seed N] [--camera N] \
                   [--shadow-samples N] [--no-shadows] [--transparency]", args[0]);
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = &args[2];
    let mut spp_override: Option<u32> = None;
    let mut shadow_samples_override: Option<u32> = None;
    let mut shadows_override: Option<bool> = None;
    let mut transparency_override: Option<bool> = None;
    let mut seed: u64 = 0;
    let mut camera_id: usize = 0;

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--spp" => {
                i += 1;
                spp_override = args.get(i).and_then(|v| v.parse::<u32>().ok());
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(0);
            }
            "--camera" => {
                i += 1;
                camera_id = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(0);
            }
            "--shadow-samples" => {
                i += 1;
                shadow_samples_override = args.get(i).and_then(|v| v.parse::<u32>().ok());
            }
            "--no-shadows" => shadows_override = Some(false),
            "--transparency" => transparency_override = Some(true),
            other => log::warn!("Ignoring unknown argument '{}'.", other),
        }
        i += 1;
    }

    let load_result = match load_scene_with_settings(input_path) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("failed to load scene {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let mut scene = load_result.scene;
    let features = FeatureConfig {
        enable_shadows: shadows_override.unwrap_or(load_result.features.enable_shadows),
        enable_transparency: transparency_override.unwrap_or(load_result.features.enable_transparency),
        num_shadow_samples: shadow_samples_override.unwrap_or(load_result.features.num_shadow_samples),
    };
    let spp = spp_override.or(load_result.samples_per_pixel).unwrap_or(1);
    let shading_name = load_result.shading.as_deref().unwrap_or("phong");
    let shading = match shading_model_by_name(shading_name) {
        Some(shading) => shading,
        None => {
            eprintln!("unsupported shading model: {}", shading_name);
            std::process::exit(1);
        }
    };
    log::info!("Features: {:?}, shading: {}.", features, shading.name());

    let integrator = Box::new(DirectIntegrator::new(features, spp, shading));
    let renderer = SimpleRenderer::new(integrator, camera_id, seed);
    let image = renderer.render(&mut scene);
    if let Err(e) = exr_utils::write_exr_to_file(&image, output_path) {
        eprintln!("failed to write {}: {}", output_path, e);
        std::process::exit(1);
    }
}
