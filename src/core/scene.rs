// Copyright @yucwang 2026

use crate::core::emitter::Light;
use crate::core::interaction::HitInfo;
use crate::core::intersector::Intersector;
use crate::core::material::Material;
use crate::core::sensor::Sensor;
use crate::core::shape::Shape;
use crate::math::ray::Ray3f;
use std::sync::Arc;

pub struct SceneObject {
    pub shape: Arc<dyn Shape>,
    pub material: Material,
    pub name: Option<String>,
}

impl SceneObject {
    pub fn new(shape: Arc<dyn Shape>, material: Material) -> Self {
        Self { shape, material, name: None }
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn shape(&self) -> &Arc<dyn Shape> {
        &self.shape
    }
}

pub struct Scene {
    objects: Vec<SceneObject>,
    lights: Vec<Light>,
    sensors: Vec<Box<dyn Sensor>>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            sensors: Vec::new(),
        }
    }

    pub fn with_objects(objects: Vec<SceneObject>, lights: Vec<Light>) -> Self {
        Self { objects, lights, sensors: Vec::new() }
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &Vec<SceneObject> {
        &self.objects
    }

    pub fn add_light<L: Into<Light>>(&mut self, light: L) {
        self.lights.push(light.into());
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn sensors(&self) -> &Vec<Box<dyn Sensor>> {
        &self.sensors
    }

    pub fn add_sensor(&mut self, sensor: Box<dyn Sensor>) {
        self.sensors.push(sensor);
    }

    pub fn take_sensor(&mut self, camera_id: usize) -> Option<Box<dyn Sensor>> {
        if camera_id < self.sensors.len() {
            Some(self.sensors.remove(camera_id))
        } else {
            None
        }
    }

    pub fn insert_sensor(&mut self, camera_id: usize, sensor: Box<dyn Sensor>) {
        if camera_id <= self.sensors.len() {
            self.sensors.insert(camera_id, sensor);
        } else {
            self.sensors.push(sensor);
        }
    }

    pub fn camera(&self, camera_id: usize) -> Option<&dyn Sensor> {
        self.sensors.get(camera_id).map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Intersector for Scene {
    // Linear closest-hit search; `ray.t` shrinks as nearer hits are found so
    // later shapes are tested against the current nearest distance.
    fn ray_intersection(&self, ray: &mut Ray3f) -> Option<HitInfo> {
        let mut closest: Option<HitInfo> = None;
        for object in &self.objects {
            if let Some(hit) = object.shape.ray_intersection(ray) {
                if ray.update(hit.t()) {
                    closest = Some(hit.with_material(object.material));
                }
            }
        }
        closest
    }
}
