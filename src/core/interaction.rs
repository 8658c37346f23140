// Copyright @yucwang 2023

use crate::core::material::Material;
use crate::math::constants::{ Float, Vector2f, Vector3f };

#[derive(Debug, Clone, Copy)]
pub struct HitInfo {
    p: Vector3f,
    normal: Vector3f,
    uv: Vector2f,
    t: Float,
    material: Material,
}

impl Default for HitInfo {
    fn default() -> Self {
        Self {
            p: Vector3f::zeros(),
            normal: Vector3f::new(0.0, 1.0, 0.0),
            uv: Vector2f::zeros(),
            t: 0.0,
            material: Material::default(),
        }
    }
}

impl HitInfo {
    pub fn new(new_p: Vector3f,
               new_normal: Vector3f,
               new_uv: Vector2f,
               new_t: Float) -> Self {
        Self { p: new_p, normal: new_normal, uv: new_uv, t: new_t,
               material: Material::default() }
    }

    pub fn t(&self) -> Float {
        self.t
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn uv(&self) -> Vector2f {
        self.uv
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn with_material(mut self, new_material: Material) -> Self {
        self.material = new_material;
        self
    }
}
