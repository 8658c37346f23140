// Copyright @yucwang 2026

use crate::math::constants::Vector3f;
use crate::math::spectrum::RGBSpectrum;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vector3f,
    pub color: RGBSpectrum,
}

impl PointLight {
    pub fn new(position: Vector3f, color: RGBSpectrum) -> Self {
        Self { position, color }
    }
}
