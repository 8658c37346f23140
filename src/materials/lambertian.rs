// Copyright @yucwang 2023

use crate::core::interaction::HitInfo;
use crate::core::shading::ShadingModel;
use crate::math::constants::Vector3f;
use crate::math::spectrum::RGBSpectrum;

/// `kd * radiance * max(0, n.l)`.
pub struct LambertianShading;

impl ShadingModel for LambertianShading {
    fn name(&self) -> &'static str {
        "lambertian"
    }

    fn shade(&self,
             _view_dir: &Vector3f,
             light_dir: &Vector3f,
             radiance: &RGBSpectrum,
             hit_info: &HitInfo) -> RGBSpectrum {
        let cos_theta = hit_info.normal().dot(light_dir).max(0.0);
        hit_info.material().kd.component_mul(radiance) * cos_theta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::material::Material;
    use crate::math::constants::Vector2f;
    use crate::math::spectrum::Spectrum;

    fn hit() -> HitInfo {
        HitInfo::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0), Vector2f::zeros(), 1.0)
            .with_material(Material::diffuse(RGBSpectrum::new(0.5, 0.25, 1.0)))
    }

    #[test]
    fn test_lambertian_cosine_falloff() {
        let view = Vector3f::new(0.0, 0.0, 1.0);
        let radiance = RGBSpectrum::new(2.0, 2.0, 2.0);

        let head_on = LambertianShading.shade(&view, &Vector3f::new(0.0, 0.0, 1.0), &radiance, &hit());
        assert!((head_on - RGBSpectrum::new(1.0, 0.5, 2.0)).norm() < 1e-6);

        let oblique_dir = Vector3f::new(1.0, 0.0, 1.0).normalize();
        let oblique = LambertianShading.shade(&view, &oblique_dir, &radiance, &hit());
        assert!((oblique - head_on * std::f32::consts::FRAC_1_SQRT_2).norm() < 1e-5);
    }

    #[test]
    fn test_lambertian_backfacing_is_black() {
        let view = Vector3f::new(0.0, 0.0, 1.0);
        let result = LambertianShading.shade(&view, &Vector3f::new(0.0, 0.0, -1.0),
                                             &RGBSpectrum::constant(1.0), &hit());
        assert!(result.is_black());
    }
}
