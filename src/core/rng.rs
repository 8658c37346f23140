// Copyright @yucwang 2026

use crate::core::sampler::Sampler;
use crate::math::constants::{Float, Vector2f};

pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }

    /// Uniform in [0, 1); only the top 24 bits are used so the result is
    /// exactly representable and never rounds up to 1.
    pub fn next_f32(&mut self) -> Float {
        ((self.next_u32() >> 8) as Float) * (1.0 / 16_777_216.0)
    }
}

impl Sampler for LcgRng {
    fn next_1d(&mut self) -> Float {
        self.next_f32()
    }

    fn next_2d(&mut self) -> Vector2f {
        let u = self.next_f32();
        let v = self.next_f32();
        Vector2f::new(u, v)
    }
}
