// Copyright @yucwang 2026

/// Switches controlling the direct-lighting estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureConfig {
    pub enable_shadows: bool,
    pub enable_transparency: bool,
    /// Samples taken per segment or parallelogram light.
    pub num_shadow_samples: u32,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            enable_shadows: true,
            enable_transparency: false,
            num_shadow_samples: 16,
        }
    }
}

impl FeatureConfig {
    pub fn new(enable_shadows: bool, enable_transparency: bool, num_shadow_samples: u32) -> Self {
        Self { enable_shadows, enable_transparency, num_shadow_samples }
    }
}
