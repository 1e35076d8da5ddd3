//! glTF document import
//!
//! Builds [`MaterialRecord`]s and the texture table from a document parsed
//! by the `gltf` crate. Image decoding stays with the host.

use crate::record::{
    AlphaMode, MaterialExtensions, MaterialRecord, PbrMetallicRoughness, PbrSpecularGlossiness,
    Texture, TextureRef, TextureTransform, Unlit,
};

/// Texture table of a document
pub fn texture_table(document: &gltf::Document) -> Vec<Texture> {
    document
        .textures()
        .map(|texture| Texture {
            source: texture.source().index(),
        })
        .collect()
}

/// Records for every material of a document, in document order
pub fn material_records(document: &gltf::Document) -> Vec<MaterialRecord> {
    document.materials().map(|material| material_record(&material)).collect()
}

/// Record for a single material
///
/// When KHR_materials_pbrSpecularGlossiness is present the metallic-roughness
/// block is treated as the fallback it is meant to be and left out.
pub fn material_record(material: &gltf::Material<'_>) -> MaterialRecord {
    let specular_glossiness = material.pbr_specular_glossiness().map(|sg| PbrSpecularGlossiness {
        diffuse_color: sg.diffuse_factor(),
        specular_color: sg.specular_factor(),
        glossiness_factor: sg.glossiness_factor(),
        diffuse_texture: sg.diffuse_texture().map(|info| info_ref(&info)),
        specular_glossiness_texture: sg.specular_glossiness_texture().map(|info| info_ref(&info)),
    });
    let unlit = material.unlit().then_some(Unlit);

    let pbr_metallic_roughness = if specular_glossiness.is_some() {
        None
    } else {
        let pbr = material.pbr_metallic_roughness();
        Some(PbrMetallicRoughness {
            base_color: pbr.base_color_factor(),
            metallic_factor: pbr.metallic_factor(),
            roughness_factor: pbr.roughness_factor(),
            base_color_texture: pbr.base_color_texture().map(|info| info_ref(&info)),
            metallic_roughness_texture: pbr.metallic_roughness_texture().map(|info| info_ref(&info)),
        })
    };

    let extensions = (specular_glossiness.is_some() || unlit.is_some()).then(|| MaterialExtensions {
        specular_glossiness,
        unlit,
    });

    MaterialRecord {
        name: material.name().unwrap_or_default().to_string(),
        extensions,
        pbr_metallic_roughness,
        normal_texture: material
            .normal_texture()
            .map(|normal| TextureRef::new(table_index(normal.texture().index()))),
        occlusion_texture: material
            .occlusion_texture()
            .map(|occlusion| TextureRef::new(table_index(occlusion.texture().index()))),
        emissive_texture: material.emissive_texture().map(|info| info_ref(&info)),
        emissive: material.emissive_factor(),
        alpha_mode: match material.alpha_mode() {
            gltf::material::AlphaMode::Opaque => AlphaMode::Opaque,
            gltf::material::AlphaMode::Mask => AlphaMode::Mask,
            gltf::material::AlphaMode::Blend => AlphaMode::Blend,
        },
        alpha_cutoff: material.alpha_cutoff().unwrap_or(0.5),
        double_sided: material.double_sided(),
    }
}

fn info_ref(info: &gltf::texture::Info<'_>) -> TextureRef {
    let texture_ref = TextureRef::new(table_index(info.texture().index()));
    match info.texture_transform() {
        Some(transform) => texture_ref.with_transform(TextureTransform {
            offset: Some(transform.offset()),
            rotation: transform.rotation(),
            scale: Some(transform.scale()),
        }),
        None => texture_ref,
    }
}

// Indices past i32::MAX cannot come from a valid document; map them to -1.
fn table_index(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(-1)
}
