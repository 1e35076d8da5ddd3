//! End-to-end material generation against the headless backend

use approx::assert_relative_eq;
use gltf_material::prelude::*;
use gltf_material::foundation::math::{Vec2, Vec4};
use gltf_material::target::{CullMode, RenderQueue};

type Translator<'a> = MaterialTranslator<HeadlessBackend, &'a CapturingSink>;

fn translator(sink: &CapturingSink) -> Translator<'_> {
    MaterialTranslator::new(HeadlessBackend::with_default_shaders(), sink)
}

fn generate(translator: &mut Translator<'_>, record: &MaterialRecord) -> RecordedMaterial {
    let textures = [Texture { source: 0 }, Texture { source: 1 }, Texture { source: 9 }];
    let images = [TextureHandle(100), TextureHandle(101)];
    let mut resources = Vec::new();
    let material = translator
        .generate_material(record, Some(&textures[..]), Some(&images[..]), &mut resources)
        .expect("default shaders are registered");
    assert!(resources.is_empty());
    material
}

fn metallic(base_color: [f32; 4], metallic: f32, roughness: f32) -> MaterialRecord {
    MaterialRecord {
        pbr_metallic_roughness: Some(PbrMetallicRoughness {
            base_color,
            metallic_factor: metallic,
            roughness_factor: roughness,
            ..Default::default()
        }),
        ..MaterialRecord::named("metal")
    }
}

#[test]
fn specular_glossiness_selected_over_metallic_roughness() {
    let sink = CapturingSink::new();
    let mut translator = translator(&sink);

    let mut record = metallic([1.0; 4], 0.0, 1.0);
    record.extensions = Some(MaterialExtensions {
        specular_glossiness: Some(PbrSpecularGlossiness::default()),
        unlit: None,
    });

    let material = generate(&mut translator, &record);
    assert_eq!(material.shader_name(), "glTF/PbrSpecularGlossiness");
}

#[test]
fn metallic_roughness_base_texture_wins_main_slot() {
    let sink = CapturingSink::new();
    let mut translator = translator(&sink);

    let mut record = metallic([0.1, 0.2, 0.3, 1.0], 0.0, 1.0);
    if let Some(pbr) = record.pbr_metallic_roughness.as_mut() {
        pbr.base_color_texture = Some(TextureRef::new(1));
    }
    record.extensions = Some(MaterialExtensions {
        specular_glossiness: Some(PbrSpecularGlossiness {
            diffuse_color: [0.9, 0.9, 0.9, 1.0],
            diffuse_texture: Some(TextureRef::new(0)),
            ..Default::default()
        }),
        unlit: None,
    });

    let material = generate(&mut translator, &record);
    assert_eq!(material.shader_name(), "glTF/PbrSpecularGlossiness");
    assert_eq!(material.texture(properties::MAIN_TEX), Some(TextureHandle(101)));
    assert_eq!(material.color(properties::COLOR), Some(Vec4::new(0.1, 0.2, 0.3, 1.0)));
    assert!(sink.is_empty());
}

#[test]
fn unlit_and_default_variants() {
    let sink = CapturingSink::new();
    let mut translator = translator(&sink);

    let unlit = MaterialRecord {
        extensions: Some(MaterialExtensions {
            specular_glossiness: None,
            unlit: Some(Unlit),
        }),
        ..metallic([0.2, 0.4, 0.6, 1.0], 1.0, 1.0)
    };
    let material = generate(&mut translator, &unlit);
    assert_eq!(material.shader_name(), "Unlit/Color");
    assert_eq!(material.color(properties::COLOR), Some(Vec4::new(0.2, 0.4, 0.6, 1.0)));
    assert_eq!(material.texture_scale(properties::MAIN_TEX), None);

    let plain = generate(&mut translator, &MaterialRecord::named("plain"));
    assert_eq!(plain.shader_name(), "glTF/PbrMetallicRoughness");
    assert!(sink.is_empty());
}

#[test]
fn metallic_roughness_parameters_round_trip() {
    let sink = CapturingSink::new();
    let mut translator = translator(&sink);

    let material = generate(&mut translator, &metallic([0.3, 0.6, 0.9, 0.5], 0.25, 0.75));

    assert_eq!(material.name(), "metal");
    assert_eq!(material.color(properties::COLOR), Some(Vec4::new(0.3, 0.6, 0.9, 0.5)));
    assert_eq!(material.scalar(properties::METALLIC), Some(0.25));
    assert_eq!(material.scalar(properties::ROUGHNESS), Some(0.75));
}

#[test]
fn main_texture_starts_flipped() {
    let sink = CapturingSink::new();
    let mut translator = translator(&sink);

    let material = generate(&mut translator, &MaterialRecord::named("flip"));
    assert_eq!(material.texture_scale(properties::MAIN_TEX), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(material.texture_offset(properties::MAIN_TEX), Some(Vec2::new(0.0, 1.0)));
}

#[test]
fn base_color_texture_transform() {
    let sink = CapturingSink::new();
    let mut translator = translator(&sink);

    let mut record = metallic([1.0; 4], 1.0, 1.0);
    if let Some(pbr) = record.pbr_metallic_roughness.as_mut() {
        pbr.base_color_texture = Some(TextureRef::new(1).with_transform(TextureTransform {
            offset: Some([0.2, 0.3]),
            rotation: 0.0,
            scale: Some([2.0, 3.0]),
        }));
    }

    let material = generate(&mut translator, &record);
    assert_eq!(material.texture(properties::MAIN_TEX), Some(TextureHandle(101)));
    let offset = material.texture_offset(properties::MAIN_TEX).unwrap();
    let scale = material.texture_scale(properties::MAIN_TEX).unwrap();
    assert_relative_eq!(offset.x, 0.2);
    assert_relative_eq!(offset.y, 0.7);
    assert_relative_eq!(scale.x, 2.0);
    assert_relative_eq!(scale.y, -3.0);
}

#[test]
fn broken_references_are_skipped_and_logged() {
    let sink = CapturingSink::new();
    let mut translator = translator(&sink);

    let record = MaterialRecord {
        normal_texture: Some(TextureRef::new(7)),
        occlusion_texture: Some(TextureRef::new(2)),
        emissive_texture: Some(TextureRef::new(-1)),
        ..metallic([1.0; 4], 1.0, 1.0)
    };

    let material = generate(&mut translator, &record);
    assert_eq!(material.texture(properties::BUMP_MAP), None);
    assert_eq!(material.texture(properties::OCCLUSION_MAP), None);
    assert_eq!(material.texture(properties::EMISSION_MAP), None);
    assert!(!material.is_keyword_enabled(properties::KW_NORMAL_MAP));
    assert!(!material.is_keyword_enabled(properties::KW_OCCLUSION));
    assert_eq!(
        sink.errors(),
        vec![Diagnostic::TextureNotFound(7), Diagnostic::ImageNotFound(9)]
    );
}

#[test]
fn missing_tables_are_treated_as_empty() {
    let sink = CapturingSink::new();
    let mut translator = translator(&sink);

    let record = MaterialRecord {
        normal_texture: Some(TextureRef::new(0)),
        ..MaterialRecord::named("no tables")
    };
    let mut resources = Vec::new();
    let material = translator
        .generate_material(&record, None, None, &mut resources)
        .unwrap();

    assert_eq!(material.texture(properties::BUMP_MAP), None);
    assert_eq!(sink.errors(), vec![Diagnostic::TextureNotFound(0)]);
}

#[test]
fn alpha_modes() {
    let sink = CapturingSink::new();
    let mut translator = translator(&sink);

    let mask = MaterialRecord {
        alpha_mode: AlphaMode::Mask,
        alpha_cutoff: 0.5,
        ..MaterialRecord::named("mask")
    };
    let material = generate(&mut translator, &mask);
    assert_eq!(material.scalar(properties::CUTOFF), Some(0.5));
    assert_eq!(material.render_state(), Some(RenderState::alpha_test()));

    let blend = MaterialRecord {
        alpha_mode: AlphaMode::Blend,
        alpha_cutoff: 0.5,
        ..MaterialRecord::named("blend")
    };
    let material = generate(&mut translator, &blend);
    assert_eq!(material.scalar(properties::CUTOFF), None);
    let state = material.render_state().unwrap();
    assert!(!state.depth_write);
    assert_eq!(state.render_queue, RenderQueue::Transparent);

    let unknown = MaterialRecord {
        alpha_mode: AlphaMode::from_gltf_name("GLASS"),
        ..MaterialRecord::named("unknown")
    };
    let material = generate(&mut translator, &unknown);
    assert_eq!(material.render_state(), Some(RenderState::opaque()));
}

#[test]
fn emission_color_without_texture() {
    let sink = CapturingSink::new();
    let mut translator = translator(&sink);

    let record = MaterialRecord {
        emissive: [1.0, 0.0, 0.0],
        ..MaterialRecord::named("lamp")
    };
    let material = generate(&mut translator, &record);

    assert_eq!(material.color(properties::EMISSION_COLOR), Some(Vec4::new(1.0, 0.0, 0.0, 1.0)));
    assert!(material.is_keyword_enabled(properties::KW_EMISSION));
    assert_eq!(material.texture(properties::EMISSION_MAP), None);
}

#[test]
fn double_sided_warns_and_keeps_culling() {
    let sink = CapturingSink::new();
    let mut translator = translator(&sink);

    let record = MaterialRecord {
        double_sided: true,
        ..MaterialRecord::named("foliage")
    };
    let material = generate(&mut translator, &record);

    assert_eq!(sink.warnings(), vec![Diagnostic::DoubleSidedUnsupported]);
    assert!(sink.errors().is_empty());
    assert_eq!(material.render_state().map(|s| s.cull_mode), Some(CullMode::Back));
}

#[test]
fn missing_shader_is_fatal() {
    let sink = CapturingSink::new();
    let mut backend = HeadlessBackend::new();
    backend.register_shader("glTF/PbrMetallicRoughness", [properties::COLOR]);
    let mut translator = MaterialTranslator::new(backend, &sink);

    let unlit = MaterialRecord {
        extensions: Some(MaterialExtensions {
            specular_glossiness: None,
            unlit: Some(Unlit),
        }),
        ..MaterialRecord::named("sky")
    };
    let mut resources: Vec<TextureHandle> = Vec::new();
    let result = translator.generate_material(&unlit, None, None, &mut resources);
    assert!(matches!(result, Err(TranslateError::ShaderNotFound(name)) if name == "Unlit/Color"));

    let lit = translator.generate_material(&MaterialRecord::named("lit"), None, None, &mut resources);
    assert!(lit.is_ok());
}

#[test]
fn shaders_are_cached_per_translator() {
    let sink = CapturingSink::new();
    let mut translator = translator(&sink);

    generate(&mut translator, &MaterialRecord::named("a"));
    generate(&mut translator, &MaterialRecord::named("b"));
    assert_eq!(translator.shader_cache().len(), 1);
    assert!(translator.shader_cache().is_cached(ShaderVariant::MetallicRoughness));

    translator.clear_shader_cache();
    assert!(translator.shader_cache().is_empty());
}

#[test]
fn custom_shader_names() {
    let sink = CapturingSink::new();
    let mut config = TranslatorConfig::default();
    config.shaders.metallic_roughness = "Engine/Lit".to_string();
    let backend = HeadlessBackend::with_shader_names(&config.shaders);
    let mut translator = MaterialTranslator::with_config(backend, &sink, config);

    let material = generate(&mut translator, &MaterialRecord::named("custom"));
    assert_eq!(material.shader_name(), "Engine/Lit");
}
