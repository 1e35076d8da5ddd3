//! Translating every material of a glTF document

use gltf_material::import::{material_records, texture_table};
use gltf_material::prelude::*;

const DOCUMENT: &str = r#"{
    "asset": { "version": "2.0" },
    "images": [ { "uri": "spec_gloss.png" } ],
    "textures": [ { "source": 0 } ],
    "materials": [
        {
            "name": "bottle",
            "extensions": {
                "KHR_materials_pbrSpecularGlossiness": {
                    "diffuseFactor": [0.9, 0.9, 1.0, 0.4],
                    "specularGlossinessTexture": {
                        "index": 0,
                        "extensions": { "KHR_texture_transform": { "rotation": 0.5 } }
                    }
                }
            },
            "alphaMode": "BLEND"
        }
    ]
}"#;

#[test]
fn spec_gloss_document_translates() {
    let document = gltf::Gltf::from_slice(DOCUMENT.as_bytes()).unwrap().document;
    let records = material_records(&document);
    let textures = texture_table(&document);

    let mut backend = HeadlessBackend::with_default_shaders();
    let images = vec![backend.create_texture("spec_gloss.png")];

    let sink = CapturingSink::new();
    let mut translator = MaterialTranslator::new(backend, &sink);
    let mut resources = Vec::new();
    let material = translator
        .generate_material(&records[0], Some(&textures[..]), Some(&images[..]), &mut resources)
        .unwrap();

    assert_eq!(material.shader_name(), "glTF/PbrSpecularGlossiness");
    assert_eq!(material.texture(properties::SPEC_GLOSS_MAP), Some(images[0]));
    assert!(material.is_keyword_enabled(properties::KW_SPEC_GLOSS_MAP));
    assert!(material.is_keyword_enabled(properties::KW_ALPHA_BLEND));
    assert_eq!(sink.warnings(), vec![Diagnostic::TextureRotationUnsupported(0.5)]);
    assert_eq!(
        translator.backend().texture_name(images[0]),
        Some("spec_gloss.png")
    );
}
