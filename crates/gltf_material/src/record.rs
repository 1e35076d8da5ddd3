//! glTF material records
//!
//! Plain data mirroring the glTF material schema, already parsed by the host.
//! Optional blocks are `Option`s so "extension absent" is a type-level branch.

use serde::{Deserialize, Serialize};

/// Alpha modes defined by glTF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlphaMode {
    /// Alpha ignored
    #[default]
    Opaque,
    /// Alpha tested against `alpha_cutoff`
    Mask,
    /// Alpha blended
    Blend,
}

impl AlphaMode {
    /// Parse a glTF alpha mode name; anything unrecognized is opaque
    pub fn from_gltf_name(name: &str) -> Self {
        match name {
            "MASK" => AlphaMode::Mask,
            "BLEND" => AlphaMode::Blend,
            _ => AlphaMode::Opaque,
        }
    }

    /// Name used in glTF documents
    pub fn gltf_name(self) -> &'static str {
        match self {
            AlphaMode::Opaque => "OPAQUE",
            AlphaMode::Mask => "MASK",
            AlphaMode::Blend => "BLEND",
        }
    }
}

impl From<String> for AlphaMode {
    fn from(name: String) -> Self {
        Self::from_gltf_name(&name)
    }
}

impl From<AlphaMode> for String {
    fn from(mode: AlphaMode) -> Self {
        mode.gltf_name().to_string()
    }
}

/// KHR_texture_transform parameters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureTransform {
    /// UV offset
    pub offset: Option<[f32; 2]>,
    /// UV rotation in radians
    pub rotation: f32,
    /// UV scale
    pub scale: Option<[f32; 2]>,
}

/// Reference from a material to an entry of the texture table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureRef {
    /// Index into the texture table; negative means unset
    pub index: i32,
    /// KHR_texture_transform block, if present
    #[serde(default)]
    pub transform: Option<TextureTransform>,
}

impl TextureRef {
    /// Reference without a texture transform
    pub fn new(index: i32) -> Self {
        Self { index, transform: None }
    }

    /// Attach a texture transform
    pub fn with_transform(mut self, transform: TextureTransform) -> Self {
        self.transform = Some(transform);
        self
    }
}

/// Texture table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Texture {
    /// Index into the image table
    pub source: usize,
}

/// glTF `pbrMetallicRoughness` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PbrMetallicRoughness {
    /// Linear RGBA base color
    pub base_color: [f32; 4],
    /// Metalness in 0..=1
    pub metallic_factor: f32,
    /// Roughness in 0..=1
    pub roughness_factor: f32,
    /// Base color texture
    pub base_color_texture: Option<TextureRef>,
    /// Metallic (B) and roughness (G) texture
    pub metallic_roughness_texture: Option<TextureRef>,
}

impl Default for PbrMetallicRoughness {
    fn default() -> Self {
        Self {
            base_color: [1.0, 1.0, 1.0, 1.0],
            metallic_factor: 1.0,
            roughness_factor: 1.0,
            base_color_texture: None,
            metallic_roughness_texture: None,
        }
    }
}

/// KHR_materials_pbrSpecularGlossiness block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PbrSpecularGlossiness {
    /// Linear RGBA diffuse color
    pub diffuse_color: [f32; 4],
    /// Linear RGB specular color
    pub specular_color: [f32; 3],
    /// Glossiness in 0..=1
    pub glossiness_factor: f32,
    /// Diffuse texture
    pub diffuse_texture: Option<TextureRef>,
    /// Specular (RGB) and glossiness (A) texture
    pub specular_glossiness_texture: Option<TextureRef>,
}

impl Default for PbrSpecularGlossiness {
    fn default() -> Self {
        Self {
            diffuse_color: [1.0, 1.0, 1.0, 1.0],
            specular_color: [1.0, 1.0, 1.0],
            glossiness_factor: 1.0,
            diffuse_texture: None,
            specular_glossiness_texture: None,
        }
    }
}

/// KHR_materials_unlit marker block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Unlit;

/// Material extension container
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialExtensions {
    /// KHR_materials_pbrSpecularGlossiness
    pub specular_glossiness: Option<PbrSpecularGlossiness>,
    /// KHR_materials_unlit
    pub unlit: Option<Unlit>,
}

/// A parsed glTF material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialRecord {
    /// Material name
    pub name: String,
    /// Extension container; `None` when the material has no extensions at all
    pub extensions: Option<MaterialExtensions>,
    /// Metallic-roughness parameters
    pub pbr_metallic_roughness: Option<PbrMetallicRoughness>,
    /// Tangent-space normal map
    pub normal_texture: Option<TextureRef>,
    /// Ambient occlusion map
    pub occlusion_texture: Option<TextureRef>,
    /// Emission map
    pub emissive_texture: Option<TextureRef>,
    /// Linear RGB emission
    pub emissive: [f32; 3],
    /// Alpha mode
    pub alpha_mode: AlphaMode,
    /// Alpha cutoff, used only in mask mode
    pub alpha_cutoff: f32,
    /// Double-sided flag
    pub double_sided: bool,
}

impl Default for MaterialRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            extensions: None,
            pbr_metallic_roughness: None,
            normal_texture: None,
            occlusion_texture: None,
            emissive_texture: None,
            emissive: [0.0, 0.0, 0.0],
            alpha_mode: AlphaMode::Opaque,
            alpha_cutoff: 0.5,
            double_sided: false,
        }
    }
}

impl MaterialRecord {
    /// Create an empty record with a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Specular-glossiness block, if the extension is present
    pub fn specular_glossiness(&self) -> Option<&PbrSpecularGlossiness> {
        self.extensions.as_ref()?.specular_glossiness.as_ref()
    }

    /// True when KHR_materials_unlit is present
    pub fn is_unlit(&self) -> bool {
        self.extensions
            .as_ref()
            .is_some_and(|extensions| extensions.unlit.is_some())
    }

    /// True when the emission color is not black
    pub fn has_emission(&self) -> bool {
        self.emissive != [0.0, 0.0, 0.0]
    }
}
