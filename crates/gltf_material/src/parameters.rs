//! Parameter binding
//!
//! Copies factors, colors and textures from a record onto a material. Writes
//! are attempted whatever the shader; the material decides what sticks.

use crate::diagnostics::DiagnosticSink;
use crate::error::Diagnostic;
use crate::foundation::math::{rgb_opaque, rgba, Vec2};
use crate::record::{MaterialRecord, PbrMetallicRoughness, PbrSpecularGlossiness};
use crate::target::{properties, MaterialTarget};
use crate::texture_binder::TextureBinder;

/// Main texture UV scale before any transform, flipping V
pub const MAIN_TEXTURE_SCALE: [f32; 2] = [1.0, -1.0];

/// Main texture UV offset before any transform, flipping V
pub const MAIN_TEXTURE_OFFSET: [f32; 2] = [0.0, 1.0];

/// Pre-apply the vertical flip on the main texture slot, if the material has one
pub fn init_main_texture<M: MaterialTarget>(material: &mut M) {
    if material.has_property(properties::MAIN_TEX) {
        material.set_texture_scale(properties::MAIN_TEX, Vec2::from(MAIN_TEXTURE_SCALE));
        material.set_texture_offset(properties::MAIN_TEX, Vec2::from(MAIN_TEXTURE_OFFSET));
    }
}

/// Bind KHR_materials_pbrSpecularGlossiness parameters
pub fn bind_specular_glossiness<M, D>(
    spec_gloss: &PbrSpecularGlossiness,
    material: &mut M,
    binder: &TextureBinder<'_, M::Texture, D>,
) where
    M: MaterialTarget,
    D: DiagnosticSink + ?Sized,
{
    material.set_color(properties::COLOR, rgba(spec_gloss.diffuse_color));
    material.set_vector(properties::SPEC_COLOR, rgb_opaque(spec_gloss.specular_color));
    material.set_scalar(properties::GLOSSINESS, spec_gloss.glossiness_factor);

    binder.try_bind(spec_gloss.diffuse_texture.as_ref(), material, properties::MAIN_TEX);

    if binder.try_bind(
        spec_gloss.specular_glossiness_texture.as_ref(),
        material,
        properties::SPEC_GLOSS_MAP,
    ) {
        material.enable_keyword(properties::KW_SPEC_GLOSS_MAP);
    }
}

/// Bind core metallic-roughness parameters
pub fn bind_metallic_roughness<M, D>(
    pbr: &PbrMetallicRoughness,
    material: &mut M,
    binder: &TextureBinder<'_, M::Texture, D>,
) where
    M: MaterialTarget,
    D: DiagnosticSink + ?Sized,
{
    material.set_color(properties::COLOR, rgba(pbr.base_color));
    material.set_scalar(properties::METALLIC, pbr.metallic_factor);
    material.set_scalar(properties::ROUGHNESS, pbr.roughness_factor);

    binder.try_bind(pbr.base_color_texture.as_ref(), material, properties::MAIN_TEX);

    if binder.try_bind(
        pbr.metallic_roughness_texture.as_ref(),
        material,
        properties::METALLIC_GLOSS_MAP,
    ) {
        material.enable_keyword(properties::KW_METALLIC_ROUGHNESS_MAP);
    }
}

/// Bind normal, occlusion and emission maps shared by every workflow
pub fn bind_common_textures<M, D>(
    record: &MaterialRecord,
    material: &mut M,
    binder: &TextureBinder<'_, M::Texture, D>,
) where
    M: MaterialTarget,
    D: DiagnosticSink + ?Sized,
{
    let maps = [
        (record.normal_texture.as_ref(), properties::BUMP_MAP, properties::KW_NORMAL_MAP),
        (record.occlusion_texture.as_ref(), properties::OCCLUSION_MAP, properties::KW_OCCLUSION),
        (record.emissive_texture.as_ref(), properties::EMISSION_MAP, properties::KW_EMISSION),
    ];

    for (texture_ref, slot, keyword) in maps {
        if binder.try_bind(texture_ref, material, slot) {
            material.enable_keyword(keyword);
        }
    }
}

/// Write the emission color when it is not black
pub fn bind_emission<M: MaterialTarget>(record: &MaterialRecord, material: &mut M) {
    if record.has_emission() {
        material.set_color(properties::EMISSION_COLOR, rgb_opaque(record.emissive));
        material.enable_keyword(properties::KW_EMISSION);
    }
}

/// Report flags the translator observes but does not implement
pub fn report_unsupported<D: DiagnosticSink + ?Sized>(record: &MaterialRecord, sink: &D) {
    if record.double_sided {
        sink.warn(&Diagnostic::DoubleSidedUnsupported);
    }
}
