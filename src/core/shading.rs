// Copyright @yucwang 2026

use crate::core::interaction::HitInfo;
use crate::math::constants::Vector3f;
use crate::math::spectrum::RGBSpectrum;

/// Converts light arriving from `light_dir` into radiance reflected towards
/// `view_dir`. Both directions are unit vectors pointing away from the
/// surface. Implementations are pure functions of their inputs.
pub trait ShadingModel: Send + Sync {
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
    fn shade(&self,
             view_dir: &Vector3f,
             light_dir: &Vector3f,
             radiance: &RGBSpectrum,
             hit_info: &HitInfo) -> RGBSpectrum;
}
