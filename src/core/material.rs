// Copyright @yucwang 2023

use crate::math::constants::Float;
use crate::math::spectrum::{RGBSpectrum, Spectrum};

/// Surface parameters read by the shading model and by transparency shadows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub kd: RGBSpectrum,
    pub ks: RGBSpectrum,
    pub shininess: Float,
    /// Fraction in [0, 1]; occluders scale light by `kd * (1 - transparency)`.
    pub transparency: Float,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            kd: RGBSpectrum::constant(0.5),
            ks: RGBSpectrum::black(),
            shininess: 1.0,
            transparency: 0.0,
        }
    }
}

impl Material {
    pub fn diffuse(kd: RGBSpectrum) -> Self {
        Self { kd, ..Self::default() }
    }

    pub fn with_specular(mut self, ks: RGBSpectrum, shininess: Float) -> Self {
        self.ks = ks;
        self.shininess = shininess;
        self
    }

    pub fn with_transparency(mut self, transparency: Float) -> Self {
        self.transparency = transparency;
        self
    }

    /// Multiplicative factor applied to light passing through this surface.
    pub fn shadow_attenuation(&self) -> RGBSpectrum {
        self.kd * (1.0 - self.transparency)
    }
}
