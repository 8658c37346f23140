// Copyright @yucwang 2026

use crate::emitters::parallelogram::ParallelogramLight;
use crate::emitters::point::PointLight;
use crate::emitters::segment::SegmentLight;
use crate::math::constants::Vector3f;
use crate::math::spectrum::RGBSpectrum;

/// Position on a light together with the color emitted there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSample {
    pub position: Vector3f,
    pub color: RGBSpectrum,
}

/// Every light kind the direct-lighting estimator understands. Lights are
/// stored inline so the scene keeps them in one contiguous vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Point(PointLight),
    Segment(SegmentLight),
    Parallelogram(ParallelogramLight),
}

impl Light {
    pub fn name(&self) -> &'static str {
        match self {
            Light::Point(_) => "point",
            Light::Segment(_) => "segment",
            Light::Parallelogram(_) => "parallelogram",
        }
    }
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Light::Point(light)
    }
}

impl From<SegmentLight> for Light {
    fn from(light: SegmentLight) -> Self {
        Light::Segment(light)
    }
}

impl From<ParallelogramLight> for Light {
    fn from(light: ParallelogramLight) -> Self {
        Light::Parallelogram(light)
    }
}
