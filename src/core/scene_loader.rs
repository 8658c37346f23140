// Copyright @yucwang 2026

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::core::config::FeatureConfig;
use crate::core::material::Material;
use crate::core::scene::{Scene, SceneObject};
use crate::emitters::parallelogram::ParallelogramLight;
use crate::emitters::point::PointLight;
use crate::emitters::segment::SegmentLight;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBSpectrum;
use crate::sensors::perspective::PerspectiveCamera;
use crate::shapes::parallelogram::Parallelogram;
use crate::shapes::triangle::Triangle;

#[derive(Debug)]
pub enum SceneLoadError {
    Io(std::io::Error),
    Parse(String),
    MissingField(&'static str),
}

impl From<std::io::Error> for SceneLoadError {
    fn from(err: std::io::Error) -> Self {
        SceneLoadError::Io(err)
    }
}

impl fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneLoadError::Io(err) => write!(f, "io error: {}", err),
            SceneLoadError::Parse(msg) => write!(f, "parse error: {}", msg),
            SceneLoadError::MissingField(name) => write!(f, "missing field: {}", name),
        }
    }
}

impl std::error::Error for SceneLoadError {}

pub struct SceneLoadResult {
    pub scene: Scene,
    pub features: FeatureConfig,
    pub samples_per_pixel: Option<u32>,
    pub shading: Option<String>,
}

pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, SceneLoadError> {
    let result = load_scene_with_settings(path)?;
    Ok(result.scene)
}

pub fn load_scene_with_settings<P: AsRef<Path>>(path: P) -> Result<SceneLoadResult, SceneLoadError> {
    let path = path.as_ref();
    log::info!("Loading scene from: {}.", path.display());
    let xml = fs::read_to_string(path)?;
    parse_scene(&xml)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum BlockKind {
    Integrator,
    Sensor,
    Bsdf,
    Shape,
    Emitter,
}

impl BlockKind {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"integrator" => Some(BlockKind::Integrator),
            b"sensor" => Some(BlockKind::Sensor),
            b"bsdf" => Some(BlockKind::Bsdf),
            b"shape" => Some(BlockKind::Shape),
            b"emitter" => Some(BlockKind::Emitter),
            _ => None,
        }
    }
}

// Attributes and named properties collected between a block's open and close tags.
struct Block {
    kind: BlockKind,
    type_name: String,
    id: Option<String>,
    props: HashMap<String, String>,
    refs: Vec<String>,
}

impl Block {
    fn raw(&self, name: &'static str) -> Result<&str, SceneLoadError> {
        self.props.get(name).map(|s| s.as_str()).ok_or(SceneLoadError::MissingField(name))
    }

    fn float(&self, name: &'static str) -> Result<Float, SceneLoadError> {
        parse_float(self.raw(name)?)
    }

    fn float_or(&self, name: &'static str, default: Float) -> Result<Float, SceneLoadError> {
        self.props.get(name).map_or(Ok(default), |v| parse_float(v))
    }

    fn u32_opt(&self, name: &'static str) -> Result<Option<u32>, SceneLoadError> {
        self.props.get(name).map(|v| parse_u32(v)).transpose()
    }

    fn bool_or(&self, name: &'static str, default: bool) -> Result<bool, SceneLoadError> {
        self.props.get(name).map_or(Ok(default), |v| parse_bool(v))
    }

    fn vec3(&self, name: &'static str) -> Result<Vector3f, SceneLoadError> {
        parse_vec3(self.raw(name)?)
    }

    fn spectrum_or(&self, name: &'static str, default: RGBSpectrum) -> Result<RGBSpectrum, SceneLoadError> {
        self.props.get(name).map_or(Ok(default), |v| parse_vec3(v))
    }
}

struct SceneBuilder {
    defaults: HashMap<String, String>,
    materials: HashMap<String, Material>,
    block: Option<Block>,
    result: SceneLoadResult,
}

pub fn parse_scene(xml: &str) -> Result<SceneLoadResult, SceneLoadError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();

    let mut builder = SceneBuilder {
        defaults: HashMap::new(),
        materials: HashMap::new(),
        block: None,
        result: SceneLoadResult {
            scene: Scene::new(),
            features: FeatureConfig::default(),
            samples_per_pixel: None,
            shading: None,
        },
    };

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) => builder.open_element(&e)?,
            Ok(Event::Empty(e)) => {
                builder.open_element(&e)?;
                if BlockKind::from_tag(e.name().as_ref()).is_some() {
                    builder.close_block()?;
                }
            }
            Ok(Event::End(e)) => {
                if BlockKind::from_tag(e.name().as_ref()).is_some() {
                    builder.close_block()?;
                }
            }
            Err(e) => {
                return Err(SceneLoadError::Parse(format!("xml error at {}: {}", reader.buffer_position(), e)));
            }
            _ => {}
        }
        buf.clear();
    }

    let result = builder.result;
    log::info!("Scene loaded: {} objects, {} lights, {} sensors.",
               result.scene.len(), result.scene.lights().len(), result.scene.sensors().len());
    Ok(result)
}

impl SceneBuilder {
    fn attribute(&self, e: &BytesStart, key: &[u8]) -> Option<String> {
        e.attributes()
            .flatten()
            .find(|attr| attr.key.as_ref() == key)
            .map(|attr| resolve_value(&attr.unescape_value().unwrap_or_default(), &self.defaults))
    }

    fn open_element(&mut self, e: &BytesStart) -> Result<(), SceneLoadError> {
        let tag = e.name();
        if let Some(kind) = BlockKind::from_tag(tag.as_ref()) {
            if self.block.is_some() {
                return Err(SceneLoadError::Parse(format!(
                    "nested <{}> is not supported", String::from_utf8_lossy(tag.as_ref()))));
            }
            self.block = Some(Block {
                kind,
                type_name: self.attribute(e, b"type").unwrap_or_default(),
                id: self.attribute(e, b"id"),
                props: HashMap::new(),
                refs: Vec::new(),
            });
            return Ok(());
        }

        match tag.as_ref() {
            b"default" => {
                if let (Some(k), Some(v)) = (self.attribute(e, b"name"), self.attribute(e, b"value")) {
                    self.defaults.insert(k, v);
                }
            }
            b"boolean" | b"integer" | b"float" | b"string" | b"rgb" | b"point" | b"vector" => {
                let name = self.attribute(e, b"name");
                let value = self.attribute(e, b"value");
                if let (Some(block), Some(name), Some(value)) = (self.block.as_mut(), name, value) {
                    block.props.insert(name, value);
                }
            }
            b"lookat" => {
                let attrs: Vec<(String, Option<String>)> = ["origin", "target", "up"]
                    .iter()
                    .map(|key| (key.to_string(), self.attribute(e, key.as_bytes())))
                    .collect();
                if let Some(block) = self.block.as_mut() {
                    for (key, value) in attrs {
                        if let Some(value) = value {
                            block.props.insert(key, value);
                        }
                    }
                }
            }
            b"ref" => {
                let id = self.attribute(e, b"id");
                if let (Some(block), Some(id)) = (self.block.as_mut(), id) {
                    block.refs.push(id);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn close_block(&mut self) -> Result<(), SceneLoadError> {
        let block = match self.block.take() {
            Some(block) => block,
            None => return Ok(()),
        };

        match block.kind {
            BlockKind::Integrator => self.finish_integrator(&block),
            BlockKind::Sensor => self.finish_sensor(&block),
            BlockKind::Bsdf => self.finish_bsdf(&block),
            BlockKind::Shape => self.finish_shape(&block),
            BlockKind::Emitter => self.finish_emitter(&block),
        }
    }

    fn finish_integrator(&mut self, block: &Block) -> Result<(), SceneLoadError> {
        if block.type_name != "direct" {
            return Err(SceneLoadError::Parse(format!("unsupported integrator: {}", block.type_name)));
        }

        let defaults = FeatureConfig::default();
        self.result.features = FeatureConfig {
            enable_shadows: block.bool_or("shadows", defaults.enable_shadows)?,
            enable_transparency: block.bool_or("transparency", defaults.enable_transparency)?,
            num_shadow_samples: block.u32_opt("shadow_samples")?.unwrap_or(defaults.num_shadow_samples),
        };
        self.result.samples_per_pixel = block.u32_opt("spp")?;
        self.result.shading = block.props.get("shading").cloned();
        Ok(())
    }

    fn finish_sensor(&mut self, block: &Block) -> Result<(), SceneLoadError> {
        if block.type_name != "perspective" {
            log::warn!("Skipping unsupported sensor type '{}'.", block.type_name);
            return Ok(());
        }

        let width = block.u32_opt("width")?.unwrap_or(256) as usize;
        let height = block.u32_opt("height")?.unwrap_or(256) as usize;
        let fov_deg = block.float_or("fov", 45.0)?;
        let camera = PerspectiveCamera::new(
            block.vec3("origin")?,
            block.vec3("target")?,
            block.props.get("up").map_or(Ok(Vector3f::new(0.0, 1.0, 0.0)), |v| parse_vec3(v))?,
            fov_deg.to_radians(),
            width as Float / height.max(1) as Float,
            width,
            height,
            block.float_or("near_clip", 1e-2)?,
            block.float_or("far_clip", 1e4)?,
        );
        self.result.scene.add_sensor(Box::new(camera));
        Ok(())
    }

    fn finish_bsdf(&mut self, block: &Block) -> Result<(), SceneLoadError> {
        let id = block.id.clone().ok_or(SceneLoadError::MissingField("id"))?;
        let defaults = Material::default();
        let material = Material {
            kd: block.spectrum_or("diffuse", defaults.kd)?,
            ks: block.spectrum_or("specular", defaults.ks)?,
            shininess: block.float_or("shininess", defaults.shininess)?,
            transparency: block.float_or("transparency", defaults.transparency)?,
        };
        self.materials.insert(id, material);
        Ok(())
    }

    fn finish_shape(&mut self, block: &Block) -> Result<(), SceneLoadError> {
        let material = match block.refs.first() {
            Some(id) => *self.materials.get(id)
                .ok_or_else(|| SceneLoadError::Parse(format!("unknown bsdf reference: {}", id)))?,
            None => Material::default(),
        };

        let object = match block.type_name.as_str() {
            "triangle" => SceneObject::new(
                Arc::new(Triangle::new(block.vec3("p0")?, block.vec3("p1")?, block.vec3("p2")?)),
                material),
            "parallelogram" => SceneObject::new(
                Arc::new(Parallelogram::new(block.vec3("origin")?, block.vec3("edge01")?, block.vec3("edge02")?)),
                material),
            other => {
                log::warn!("Skipping unsupported shape type '{}'.", other);
                return Ok(());
            }
        };
        let object = match &block.id {
            Some(name) => object.with_name(name.clone()),
            None => object,
        };
        self.result.scene.add_object(object);
        Ok(())
    }

    fn finish_emitter(&mut self, block: &Block) -> Result<(), SceneLoadError> {
        match block.type_name.as_str() {
            "point" => {
                self.result.scene.add_light(PointLight::new(block.vec3("position")?, block.vec3("color")?));
            }
            "segment" => {
                self.result.scene.add_light(SegmentLight::new(
                    block.vec3("endpoint0")?, block.vec3("endpoint1")?,
                    block.vec3("color0")?, block.vec3("color1")?));
            }
            "parallelogram" => {
                // A single `color` fills any corner that is not given explicitly.
                let fallback = block.props.get("color").map(|v| parse_vec3(v)).transpose()?;
                let corner = |name: &'static str| -> Result<RGBSpectrum, SceneLoadError> {
                    match fallback {
                        Some(color) => block.spectrum_or(name, color),
                        None => block.vec3(name),
                    }
                };
                let colors = [corner("color0")?, corner("color1")?, corner("color2")?, corner("color3")?];
                self.result.scene.add_light(ParallelogramLight::new(
                    block.vec3("origin")?, block.vec3("edge01")?, block.vec3("edge02")?, colors));
            }
            other => {
                log::warn!("Skipping unsupported emitter type '{}'.", other);
            }
        }
        Ok(())
    }
}

fn resolve_value(raw: &str, defaults: &HashMap<String, String>) -> String {
    let mut out = raw.to_string();
    for (k, v) in defaults {
        out = out.replace(&format!("${}", k), v);
    }
    out
}

fn parse_float(value: &str) -> Result<Float, SceneLoadError> {
    value.trim().parse::<Float>().map_err(|_| SceneLoadError::Parse(format!("invalid float: {}", value)))
}

fn parse_u32(value: &str) -> Result<u32, SceneLoadError> {
    value.trim().parse::<u32>().map_err(|_| SceneLoadError::Parse(format!("invalid integer: {}", value)))
}

fn parse_bool(value: &str) -> Result<bool, SceneLoadError> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(SceneLoadError::Parse(format!("invalid boolean: {}", value))),
    }
}

fn parse_vec3(value: &str) -> Result<Vector3f, SceneLoadError> {
    let mut parts = value.split(',').map(|s| s.trim()).filter(|s| !s.is_empty());
    let x = parts.next().ok_or_else(|| SceneLoadError::Parse(format!("invalid vec3: {}", value)))?;
    let y = parts.next().ok_or_else(|| SceneLoadError::Parse(format!("invalid vec3: {}", value)))?;
    let z = parts.next().ok_or_else(|| SceneLoadError::Parse(format!("invalid vec3: {}", value)))?;
    Ok(Vector3f::new(parse_float(x)?, parse_float(y)?, parse_float(z)?))
}
