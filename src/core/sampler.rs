// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f};

/// Source of uniform samples for Monte Carlo estimation.
///
/// A sampler is stateful and advances on every call; each worker owns its
/// own instance so that its stream is reproducible.
pub trait Sampler {
    /// Uniform sample in [0, 1).
    fn next_1d(&mut self) -> Float;
    /// Pair of independent uniform samples in [0, 1).
    fn next_2d(&mut self) -> Vector2f;
}
