//! Shader selection and the per-translator shader cache

use std::collections::HashMap;

use crate::config::ShaderNames;
use crate::error::{TranslateError, TranslateResult};
use crate::record::MaterialRecord;
use crate::target::MaterialTarget;

/// The three shader variants a glTF material can map onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderVariant {
    /// Core metallic-roughness workflow
    MetallicRoughness,
    /// KHR_materials_pbrSpecularGlossiness
    SpecularGlossiness,
    /// KHR_materials_unlit
    Unlit,
}

/// Pick the shader variant for a material
///
/// Specular-glossiness wins over unlit; with neither extension (or no
/// extension container at all) the metallic-roughness default applies.
pub fn select_variant(record: &MaterialRecord) -> ShaderVariant {
    if record.specular_glossiness().is_some() {
        ShaderVariant::SpecularGlossiness
    } else if record.is_unlit() {
        ShaderVariant::Unlit
    } else {
        ShaderVariant::MetallicRoughness
    }
}

/// Host lookup of shaders by identifier
pub trait ShaderRegistry {
    /// Shader handle type
    type Shader: Clone;

    /// Resolve a shader identifier, `None` when the host does not know it
    fn find_shader(&self, name: &str) -> Option<Self::Shader>;
}

/// Host construction of native materials
pub trait MaterialFactory: ShaderRegistry {
    /// Material type produced
    type Material: MaterialTarget;

    /// Auxiliary resource type a translation may hand over to the caller
    type Resource;

    /// Create a fresh material instance using a shader
    fn create_material(&self, shader: &Self::Shader) -> Self::Material;
}

/// Memoized shader handles, keyed by variant
///
/// Owned by one translator and used from one thread at a time. Failed
/// lookups are not cached, so a later call retries the registry.
#[derive(Debug)]
pub struct ShaderCache<S> {
    shaders: HashMap<ShaderVariant, S>,
}

impl<S: Clone> ShaderCache<S> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            shaders: HashMap::new(),
        }
    }

    /// Return the cached handle or resolve it through the registry
    pub fn get_or_resolve<R>(
        &mut self,
        variant: ShaderVariant,
        names: &ShaderNames,
        registry: &R,
    ) -> TranslateResult<S>
    where
        R: ShaderRegistry<Shader = S> + ?Sized,
    {
        if let Some(shader) = self.shaders.get(&variant) {
            return Ok(shader.clone());
        }

        let name = names.name_for(variant);
        let shader = registry
            .find_shader(name)
            .ok_or_else(|| TranslateError::ShaderNotFound(name.to_string()))?;

        log::debug!("Resolved shader {:?} as '{}'", variant, name);
        self.shaders.insert(variant, shader.clone());
        Ok(shader)
    }

    /// Get a cached handle without resolving
    pub fn get_cached(&self, variant: ShaderVariant) -> Option<&S> {
        self.shaders.get(&variant)
    }

    /// Check if a variant is cached
    pub fn is_cached(&self, variant: ShaderVariant) -> bool {
        self.shaders.contains_key(&variant)
    }

    /// Forget every cached handle
    pub fn clear(&mut self) {
        self.shaders.clear();
    }

    /// Get the number of cached handles
    pub fn len(&self) -> usize {
        self.shaders.len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.shaders.is_empty()
    }
}

impl<S: Clone> Default for ShaderCache<S> {
    fn default() -> Self {
        Self::new()
    }
}
