//! Translator configuration
//!
//! Shader identifiers live in a TOML or RON file picked by extension, so a
//! host can point the translator at its own shader names without code.

pub use serde::{Serialize, Deserialize};

use crate::shader::ShaderVariant;

/// File-backed configuration, serialized as TOML or RON
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load from a `.toml` or `.ron` file; a missing field keeps its default
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Format follows the extension
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Write to a `.toml` or `.ron` file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Errors loading or saving translator configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents are not valid TOML/RON for the config type
    #[error("Parse error: {0}")]
    Parse(String),

    /// Config could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Extension is neither `.toml` nor `.ron`
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Shader identifiers handed to the host's shader registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderNames {
    /// Shader used for the default metallic-roughness workflow
    pub metallic_roughness: String,
    /// Shader used for KHR_materials_pbrSpecularGlossiness
    pub specular_glossiness: String,
    /// Shader used for KHR_materials_unlit
    pub unlit: String,
}

impl Default for ShaderNames {
    fn default() -> Self {
        Self {
            metallic_roughness: "glTF/PbrMetallicRoughness".to_string(),
            specular_glossiness: "glTF/PbrSpecularGlossiness".to_string(),
            unlit: "Unlit/Color".to_string(),
        }
    }
}

impl ShaderNames {
    /// Identifier registered for a shader variant
    pub fn name_for(&self, variant: ShaderVariant) -> &str {
        match variant {
            ShaderVariant::MetallicRoughness => &self.metallic_roughness,
            ShaderVariant::SpecularGlossiness => &self.specular_glossiness,
            ShaderVariant::Unlit => &self.unlit,
        }
    }
}

/// Material translator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Shader identifiers per variant
    pub shaders: ShaderNames,
}

impl Config for TranslatorConfig {}
