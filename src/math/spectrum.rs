// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f};

pub type RGBSpectrum = Vector3f;

pub trait Spectrum {
    fn black() -> Self;
    fn constant(value: Float) -> Self;
    /// Exact comparison against the zero vector.
    fn is_black(&self) -> bool;
}

impl Spectrum for RGBSpectrum {
    fn black() -> Self {
        Vector3f::zeros()
    }

    fn constant(value: Float) -> Self {
        Vector3f::new(value, value, value)
    }

    fn is_black(&self) -> bool {
        self[0] == 0.0 && self[1] == 0.0 && self[2] == 0.0
    }
}
