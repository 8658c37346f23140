// Copyright @yucwang 2026

use crate::core::interaction::HitInfo;
use crate::core::shading::ShadingModel;
use crate::math::constants::Vector3f;
use crate::math::spectrum::{RGBSpectrum, Spectrum};

/// Lambertian diffuse plus a Blinn-Phong lobe `ks * max(0, n.h)^shininess`.
pub struct BlinnPhongShading;

impl ShadingModel for BlinnPhongShading {
    fn name(&self) -> &'static str {
        "phong"
    }

    fn shade(&self,
             view_dir: &Vector3f,
             light_dir: &Vector3f,
             radiance: &RGBSpectrum,
             hit_info: &HitInfo) -> RGBSpectrum {
        let n = hit_info.normal();
        let material = hit_info.material();
        let n_dot_l = n.dot(light_dir);
        if n_dot_l <= 0.0 {
            return RGBSpectrum::black();
        }

        let diffuse = material.kd * n_dot_l;
        let half = (view_dir + light_dir).normalize();
        let n_dot_h = n.dot(&half).max(0.0);
        let specular = material.ks * n_dot_h.powf(material.shininess);

        (diffuse + specular).component_mul(radiance)
    }
}
