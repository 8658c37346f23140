// Copyright @yucwang 2023

pub mod lambertian;
pub mod phong;

use crate::core::shading::ShadingModel;

/// Shading model registered under `name` in scene files.
pub fn shading_model_by_name(name: &str) -> Option<Box<dyn ShadingModel>> {
    match name {
        "lambertian" | "diffuse" => Some(Box::new(lambertian::LambertianShading)),
        "phong" | "blinn_phong" => Some(Box::new(phong::BlinnPhongShading)),
        _ => None,
    }
}
