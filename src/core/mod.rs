// Copyright @yucwang 2021

pub mod config;
pub mod emitter;
pub mod integrator;
pub mod interaction;
pub mod intersector;
pub mod material;
pub mod render_state;
pub mod rng;
pub mod sampler;
pub mod scene;
pub mod scene_loader;
pub mod sensor;
pub mod shading;
pub mod shape;
