//! Renderer-side material interface
//!
//! Any renderer binding implements [`MaterialTarget`]; the translator only
//! talks to materials through it.

use crate::foundation::math::{Vec2, Vec4};

/// Engine property identifier, resolved ahead of translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyId(pub &'static str);

impl PropertyId {
    /// Symbolic name of the property
    pub fn name(self) -> &'static str {
        self.0
    }
}

/// Property ids and keyword names understood by the glTF shaders
pub mod properties {
    use super::PropertyId;

    /// Base / diffuse color
    pub const COLOR: PropertyId = PropertyId("_Color");
    /// Main (base color / diffuse) texture
    pub const MAIN_TEX: PropertyId = PropertyId("_MainTex");
    /// Metallic factor
    pub const METALLIC: PropertyId = PropertyId("_Metallic");
    /// Roughness factor
    pub const ROUGHNESS: PropertyId = PropertyId("_Roughness");
    /// Metallic-roughness texture
    pub const METALLIC_GLOSS_MAP: PropertyId = PropertyId("_MetallicGlossMap");
    /// Specular color
    pub const SPEC_COLOR: PropertyId = PropertyId("_SpecColor");
    /// Glossiness factor
    pub const GLOSSINESS: PropertyId = PropertyId("_Glossiness");
    /// Specular-glossiness texture
    pub const SPEC_GLOSS_MAP: PropertyId = PropertyId("_SpecGlossMap");
    /// Normal map
    pub const BUMP_MAP: PropertyId = PropertyId("_BumpMap");
    /// Occlusion map
    pub const OCCLUSION_MAP: PropertyId = PropertyId("_OcclusionMap");
    /// Emission map
    pub const EMISSION_MAP: PropertyId = PropertyId("_EmissionMap");
    /// Emission color
    pub const EMISSION_COLOR: PropertyId = PropertyId("_EmissionColor");
    /// Alpha-test threshold
    pub const CUTOFF: PropertyId = PropertyId("_Cutoff");

    /// Specular-glossiness texture bound
    pub const KW_SPEC_GLOSS_MAP: &str = "_SPECGLOSSMAP";
    /// Metallic-roughness texture bound
    pub const KW_METALLIC_ROUGHNESS_MAP: &str = "_METALLICGLOSSMAP";
    /// Normal map bound
    pub const KW_NORMAL_MAP: &str = "_NORMALMAP";
    /// Occlusion map bound
    pub const KW_OCCLUSION: &str = "_OCCLUSION";
    /// Emission active (map or color)
    pub const KW_EMISSION: &str = "_EMISSION";
    /// Alpha test active
    pub const KW_ALPHA_TEST: &str = "_ALPHATEST_ON";
    /// Alpha blending active
    pub const KW_ALPHA_BLEND: &str = "_ALPHABLEND_ON";
}

/// Blend factor applied to source or destination color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    /// Factor of 1
    One,
    /// Factor of 0
    Zero,
    /// Source alpha
    SrcAlpha,
    /// One minus source alpha
    OneMinusSrcAlpha,
}

/// Render type tag used by the host to sort and replace shaders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderType {
    /// Fully opaque geometry
    Opaque,
    /// Opaque geometry with per-pixel discard
    TransparentCutout,
    /// Alpha blended geometry
    Transparent,
}

/// Render queue bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderQueue {
    /// Opaque pass
    Geometry,
    /// Alpha-tested pass, after opaque
    AlphaTest,
    /// Blended pass, back to front
    Transparent,
}

/// Face culling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CullMode {
    /// Cull back faces
    #[default]
    Back,
    /// Cull front faces
    Front,
    /// No culling
    Off,
}

/// Blend and depth configuration of a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderState {
    /// Render type tag
    pub render_type: RenderType,
    /// Source blend factor
    pub src_blend: BlendFactor,
    /// Destination blend factor
    pub dst_blend: BlendFactor,
    /// Whether depth is written
    pub depth_write: bool,
    /// Queue the material renders in
    pub render_queue: RenderQueue,
    /// Face culling
    pub cull_mode: CullMode,
}

impl RenderState {
    /// Standard opaque rendering
    pub fn opaque() -> Self {
        Self {
            render_type: RenderType::Opaque,
            src_blend: BlendFactor::One,
            dst_blend: BlendFactor::Zero,
            depth_write: true,
            render_queue: RenderQueue::Geometry,
            cull_mode: CullMode::Back,
        }
    }

    /// Opaque depth behaviour with per-pixel discard
    pub fn alpha_test() -> Self {
        Self {
            render_type: RenderType::TransparentCutout,
            render_queue: RenderQueue::AlphaTest,
            ..Self::opaque()
        }
    }

    /// Alpha-blended transparency without depth writes
    pub fn alpha_blend() -> Self {
        Self {
            render_type: RenderType::Transparent,
            src_blend: BlendFactor::SrcAlpha,
            dst_blend: BlendFactor::OneMinusSrcAlpha,
            depth_write: false,
            render_queue: RenderQueue::Transparent,
            cull_mode: CullMode::Back,
        }
    }

    /// Check if this state blends with the framebuffer
    pub fn requires_blending(&self) -> bool {
        self.dst_blend != BlendFactor::Zero
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::opaque()
    }
}

/// Capability interface of a renderer-native material
///
/// Setters on properties the shader does not declare are expected to be
/// silently ignored.
pub trait MaterialTarget {
    /// Texture resource type accepted by texture slots
    type Texture;

    /// Check if the material's shader declares a property
    fn has_property(&self, id: PropertyId) -> bool;

    /// Set the material's display name
    fn set_name(&mut self, name: &str);

    /// Set a scalar property
    fn set_scalar(&mut self, id: PropertyId, value: f32);

    /// Set a color property
    fn set_color(&mut self, id: PropertyId, color: Vec4);

    /// Set a vector property
    fn set_vector(&mut self, id: PropertyId, value: Vec4);

    /// Bind a texture to a slot
    fn set_texture(&mut self, id: PropertyId, texture: &Self::Texture);

    /// Set a texture slot's UV offset
    fn set_texture_offset(&mut self, id: PropertyId, offset: Vec2);

    /// Set a texture slot's UV scale
    fn set_texture_scale(&mut self, id: PropertyId, scale: Vec2);

    /// Enable a shader keyword
    fn enable_keyword(&mut self, keyword: &str);

    /// Disable a shader keyword
    fn disable_keyword(&mut self, keyword: &str);

    /// Configure blend and depth state
    fn set_render_state(&mut self, state: RenderState);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_test_keeps_opaque_depth() {
        let state = RenderState::alpha_test();
        assert!(state.depth_write);
        assert!(!state.requires_blending());
        assert_eq!(state.render_queue, RenderQueue::AlphaTest);
    }

    #[test]
    fn test_blend_disables_depth_write() {
        let state = RenderState::alpha_blend();
        assert!(!state.depth_write);
        assert!(state.requires_blending());
        assert!(state.render_queue > RenderQueue::AlphaTest);
    }

    #[test]
    fn test_every_preset_culls_back_faces() {
        for state in [RenderState::opaque(), RenderState::alpha_test(), RenderState::alpha_blend()] {
            assert_eq!(state.cull_mode, CullMode::Back);
        }
    }
}
