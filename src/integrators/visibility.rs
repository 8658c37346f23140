// Copyright @yucwang 2026

//! Shadow queries between a shading point and a sampled light position.

use crate::core::interaction::HitInfo;
use crate::core::render_state::RenderState;
use crate::math::constants::{Float, MAX_SHADOW_CHAIN_LENGTH, SHADOW_EPSILON, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::spectrum::{RGBSpectrum, Spectrum};

/// Casts one shadow ray from `p` towards `light_position`, starting
/// `SHADOW_EPSILON` along the way. Returns the cast ray (its `t` is `NO_HIT`
/// on a miss), the occluder if any, and the distance from `p` to the light.
fn cast_shadow_ray(state: &RenderState, p: &Vector3f, light_position: &Vector3f) -> (Ray3f, Option<HitInfo>, Float) {
    let to_light = light_position - p;
    let distance = to_light.norm();
    let dir = to_light / distance;
    let mut shadow_ray = Ray3f::new(p + dir * SHADOW_EPSILON, dir);
    let hit = state.intersector.ray_intersection(&mut shadow_ray);
    (shadow_ray, hit, distance)
}

/// Whether `light_position` can be seen from `p`.
///
/// The sample is occluded iff the nearest hit along the shadow ray is closer
/// than `distance(p, light) - SHADOW_EPSILON`. A miss counts as visible. With
/// shadows disabled no ray is cast and the answer is always `true`.
pub fn visible_binary(state: &RenderState, p: &Vector3f, light_position: &Vector3f) -> bool {
    if !state.features.enable_shadows {
        return true;
    }

    let (shadow_ray, _, distance) = cast_shadow_ray(state, p, light_position);
    !(shadow_ray.t < distance - SHADOW_EPSILON)
}

/// Light color reaching `p` through any semi-transparent occluders.
///
/// Each occluder between `p` and the light scales the color by
/// `kd * (1 - transparency)`. Opaque occluders (transparency 0) therefore
/// attenuate by their diffuse color rather than blocking completely.
pub fn visible_transparency(state: &RenderState,
                            p: &Vector3f,
                            light_color: &RGBSpectrum,
                            light_position: &Vector3f) -> RGBSpectrum {
    if visible_binary(state, p, light_position) {
        return *light_color;
    }

    let mut attenuation = RGBSpectrum::constant(1.0);
    let mut current = *p;
    let mut remaining = (light_position - current).norm();

    for _ in 0..MAX_SHADOW_CHAIN_LENGTH {
        let (shadow_ray, hit, _) = cast_shadow_ray(state, &current, light_position);
        let hit = match hit {
            Some(hit) if shadow_ray.t < remaining - SHADOW_EPSILON => hit,
            _ => return attenuation.component_mul(light_color),
        };

        attenuation = attenuation.component_mul(&hit.material().shadow_attenuation());

        // Every step must move strictly closer to the light.
        let next = shadow_ray.hit_point();
        let next_remaining = (light_position - next).norm();
        if !(next_remaining < remaining) {
            log::debug!("occluder walk stalled at {:?}, remaining distance {}", next, remaining);
            return attenuation.component_mul(light_color);
        }
        current = next;
        remaining = next_remaining;
    }

    log::debug!("occluder walk stopped after {} surfaces", MAX_SHADOW_CHAIN_LENGTH);
    attenuation.component_mul(light_color)
}

/// Light color that reaches `p` from a sample at `light_position`, according
/// to the shadow and transparency switches of the render.
pub fn visibility_of_light_sample(state: &RenderState,
                                  p: &Vector3f,
                                  light_position: &Vector3f,
                                  light_color: &RGBSpectrum) -> RGBSpectrum {
    if !state.features.enable_shadows {
        *light_color
    } else if !state.features.enable_transparency {
        if visible_binary(state, p, light_position) {
            *light_color
        } else {
            RGBSpectrum::black()
        }
    } else {
        visible_transparency(state, p, light_color, light_position)
    }
}
