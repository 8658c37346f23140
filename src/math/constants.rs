/* Copyright 2020 @Yuchen Wong */

use nalgebra::{Vector2, Vector3};

pub type Float = f32;

pub type Vector2f = Vector2<Float>;
pub type Vector3f = Vector3<Float>;

pub const EPSILON: Float = 1e-4;

// Offset applied to shadow-ray origins and subtracted from the distance to
// the light sample when deciding occlusion.
pub const SHADOW_EPSILON: Float = 1e-3;

// Upper bound on the number of occluders walked by a single transparency
// shadow query.
pub const MAX_SHADOW_CHAIN_LENGTH: usize = 64;
