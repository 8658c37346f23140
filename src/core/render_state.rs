// Copyright @yucwang 2026

use crate::core::config::FeatureConfig;
use crate::core::emitter::Light;
use crate::core::intersector::Intersector;
use crate::core::shading::ShadingModel;

/// Read-only context shared by every shading-point evaluation of a render.
///
/// Holds no sampler: the sampler is the only mutable piece of lighting state
/// and is passed separately so each worker owns its own.
#[derive(Clone, Copy)]
pub struct RenderState<'a> {
    pub lights: &'a [Light],
    pub features: &'a FeatureConfig,
    pub intersector: &'a dyn Intersector,
    pub shading: &'a dyn ShadingModel,
}

impl<'a> RenderState<'a> {
    pub fn new(lights: &'a [Light],
               features: &'a FeatureConfig,
               intersector: &'a dyn Intersector,
               shading: &'a dyn ShadingModel) -> Self {
        Self { lights, features, intersector, shading }
    }
}
