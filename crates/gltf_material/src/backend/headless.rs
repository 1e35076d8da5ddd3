//! Headless material backend
//!
//! Keeps every property write in memory instead of talking to a GPU. Each
//! shader declares the properties it understands; writes to anything else
//! are dropped, the way a real engine ignores unknown material properties.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use crate::config::ShaderNames;
use crate::foundation::math::{Vec2, Vec4};
use crate::shader::{MaterialFactory, ShaderRegistry};
use crate::target::{properties, MaterialTarget, PropertyId, RenderState};

/// Handle for a texture resource owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Shader known to the headless backend
#[derive(Debug, Clone)]
pub struct HeadlessShader {
    name: Arc<str>,
    properties: Arc<HashSet<PropertyId>>,
}

impl HeadlessShader {
    /// Shader identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the shader declares a property
    pub fn declares(&self, id: PropertyId) -> bool {
        self.properties.contains(&id)
    }
}

/// Value written to a material property
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    /// Scalar value
    Scalar(f32),
    /// RGBA color
    Color(Vec4),
    /// Four-component vector
    Vector(Vec4),
    /// Bound texture
    Texture(TextureHandle),
}

/// Material produced by [`HeadlessBackend`]
#[derive(Debug, Clone)]
pub struct RecordedMaterial {
    shader: HeadlessShader,
    name: String,
    values: HashMap<PropertyId, PropertyValue>,
    texture_offsets: HashMap<PropertyId, Vec2>,
    texture_scales: HashMap<PropertyId, Vec2>,
    keywords: BTreeSet<String>,
    render_state: Option<RenderState>,
}

impl RecordedMaterial {
    fn new(shader: HeadlessShader) -> Self {
        Self {
            shader,
            name: String::new(),
            values: HashMap::new(),
            texture_offsets: HashMap::new(),
            texture_scales: HashMap::new(),
            keywords: BTreeSet::new(),
            render_state: None,
        }
    }

    /// Shader the material was created from
    pub fn shader_name(&self) -> &str {
        self.shader.name()
    }

    /// Material name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw value of a property
    pub fn value(&self, id: PropertyId) -> Option<PropertyValue> {
        self.values.get(&id).copied()
    }

    /// Scalar property value
    pub fn scalar(&self, id: PropertyId) -> Option<f32> {
        match self.value(id)? {
            PropertyValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Color property value
    pub fn color(&self, id: PropertyId) -> Option<Vec4> {
        match self.value(id)? {
            PropertyValue::Color(color) => Some(color),
            _ => None,
        }
    }

    /// Vector property value
    pub fn vector(&self, id: PropertyId) -> Option<Vec4> {
        match self.value(id)? {
            PropertyValue::Vector(value) => Some(value),
            _ => None,
        }
    }

    /// Texture bound to a slot
    pub fn texture(&self, id: PropertyId) -> Option<TextureHandle> {
        match self.value(id)? {
            PropertyValue::Texture(handle) => Some(handle),
            _ => None,
        }
    }

    /// UV offset of a texture slot
    pub fn texture_offset(&self, id: PropertyId) -> Option<Vec2> {
        self.texture_offsets.get(&id).copied()
    }

    /// UV scale of a texture slot
    pub fn texture_scale(&self, id: PropertyId) -> Option<Vec2> {
        self.texture_scales.get(&id).copied()
    }

    /// Check if a keyword is enabled
    pub fn is_keyword_enabled(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }

    /// Enabled keywords in sorted order
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Render state, if one was configured
    pub fn render_state(&self) -> Option<RenderState> {
        self.render_state
    }

    /// Number of properties written
    pub fn property_count(&self) -> usize {
        self.values.len()
    }

    fn write(&mut self, id: PropertyId, value: PropertyValue) {
        if self.shader.declares(id) {
            self.values.insert(id, value);
        } else {
            log::trace!("Shader '{}' has no property {}", self.shader.name(), id.name());
        }
    }
}

impl MaterialTarget for RecordedMaterial {
    type Texture = TextureHandle;

    fn has_property(&self, id: PropertyId) -> bool {
        self.shader.declares(id)
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn set_scalar(&mut self, id: PropertyId, value: f32) {
        self.write(id, PropertyValue::Scalar(value));
    }

    fn set_color(&mut self, id: PropertyId, color: Vec4) {
        self.write(id, PropertyValue::Color(color));
    }

    fn set_vector(&mut self, id: PropertyId, value: Vec4) {
        self.write(id, PropertyValue::Vector(value));
    }

    fn set_texture(&mut self, id: PropertyId, texture: &TextureHandle) {
        self.write(id, PropertyValue::Texture(*texture));
    }

    fn set_texture_offset(&mut self, id: PropertyId, offset: Vec2) {
        if self.shader.declares(id) {
            self.texture_offsets.insert(id, offset);
        }
    }

    fn set_texture_scale(&mut self, id: PropertyId, scale: Vec2) {
        if self.shader.declares(id) {
            self.texture_scales.insert(id, scale);
        }
    }

    fn enable_keyword(&mut self, keyword: &str) {
        self.keywords.insert(keyword.to_string());
    }

    fn disable_keyword(&mut self, keyword: &str) {
        self.keywords.remove(keyword);
    }

    fn set_render_state(&mut self, state: RenderState) {
        self.render_state = Some(state);
    }
}

/// In-memory shader registry, material factory and texture allocator
#[derive(Debug)]
pub struct HeadlessBackend {
    shaders: HashMap<String, HeadlessShader>,
    texture_names: HashMap<TextureHandle, String>,
    next_texture: u32,
}

impl HeadlessBackend {
    /// Create a backend with no shaders registered
    pub fn new() -> Self {
        Self {
            shaders: HashMap::new(),
            texture_names: HashMap::new(),
            next_texture: 1, // Start from 1, reserve 0 for "no texture"
        }
    }

    /// Create a backend with the glTF shaders registered under their default names
    pub fn with_default_shaders() -> Self {
        Self::with_shader_names(&ShaderNames::default())
    }

    /// Create a backend with the glTF shaders registered under custom names
    pub fn with_shader_names(names: &ShaderNames) -> Self {
        use properties::*;

        let mut backend = Self::new();
        backend.register_shader(
            names.metallic_roughness.as_str(),
            [
                COLOR, MAIN_TEX, METALLIC, ROUGHNESS, METALLIC_GLOSS_MAP, BUMP_MAP,
                OCCLUSION_MAP, EMISSION_MAP, EMISSION_COLOR, CUTOFF,
            ],
        );
        backend.register_shader(
            names.specular_glossiness.as_str(),
            [
                COLOR, MAIN_TEX, SPEC_COLOR, GLOSSINESS, SPEC_GLOSS_MAP, BUMP_MAP,
                OCCLUSION_MAP, EMISSION_MAP, EMISSION_COLOR, CUTOFF,
            ],
        );
        backend.register_shader(names.unlit.as_str(), [COLOR]);
        backend
    }

    /// Register a shader and the properties it declares
    pub fn register_shader(
        &mut self,
        name: impl Into<String>,
        properties: impl IntoIterator<Item = PropertyId>,
    ) {
        let name = name.into();
        let shader = HeadlessShader {
            name: Arc::from(name.as_str()),
            properties: Arc::new(properties.into_iter().collect()),
        };
        log::debug!("Registered headless shader '{}'", name);
        self.shaders.insert(name, shader);
    }

    /// Check if a shader identifier is registered
    pub fn has_shader(&self, name: &str) -> bool {
        self.shaders.contains_key(name)
    }

    /// Allocate a texture handle standing in for a decoded image
    pub fn create_texture(&mut self, name: impl Into<String>) -> TextureHandle {
        let handle = TextureHandle(self.next_texture);
        self.next_texture += 1;
        self.texture_names.insert(handle, name.into());
        handle
    }

    /// Name a texture handle was created with
    pub fn texture_name(&self, handle: TextureHandle) -> Option<&str> {
        self.texture_names.get(&handle).map(String::as_str)
    }

    /// Get number of allocated textures
    pub fn texture_count(&self) -> usize {
        self.texture_names.len()
    }
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ShaderRegistry for HeadlessBackend {
    type Shader = HeadlessShader;

    fn find_shader(&self, name: &str) -> Option<HeadlessShader> {
        self.shaders.get(name).cloned()
    }
}

impl MaterialFactory for HeadlessBackend {
    type Material = RecordedMaterial;
    type Resource = TextureHandle;

    fn create_material(&self, shader: &HeadlessShader) -> RecordedMaterial {
        RecordedMaterial::new(shader.clone())
    }
}
