//! The material translator
//!
//! Turns one [`MaterialRecord`] into one renderer-native material:
//! shader selection, parameter and texture binding, then alpha mode.

use crate::alpha::apply_alpha_mode;
use crate::config::TranslatorConfig;
use crate::diagnostics::DiagnosticSink;
use crate::error::TranslateResult;
use crate::parameters;
use crate::record::{MaterialRecord, Texture};
use crate::shader::{select_variant, MaterialFactory, ShaderCache};
use crate::target::MaterialTarget;
use crate::texture_binder::TextureBinder;

/// Image type accepted by a backend's materials
pub type ImageOf<B> = <<B as MaterialFactory>::Material as MaterialTarget>::Texture;

/// Translates glTF material records into host materials
///
/// Shader handles are resolved lazily and cached for the lifetime of the
/// translator. `generate_material` takes `&mut self`, so one instance is
/// driven from one thread at a time; run one translator per thread for
/// parallel imports.
pub struct MaterialTranslator<B: MaterialFactory, D: DiagnosticSink> {
    backend: B,
    sink: D,
    config: TranslatorConfig,
    shaders: ShaderCache<B::Shader>,
}

impl<B: MaterialFactory, D: DiagnosticSink> MaterialTranslator<B, D> {
    /// Create a translator with the default shader names
    pub fn new(backend: B, sink: D) -> Self {
        Self::with_config(backend, sink, TranslatorConfig::default())
    }

    /// Create a translator with a custom configuration
    pub fn with_config(backend: B, sink: D, config: TranslatorConfig) -> Self {
        Self {
            backend,
            sink,
            config,
            shaders: ShaderCache::new(),
        }
    }

    /// Generate a material for a glTF material record
    ///
    /// # Arguments
    /// * `record` - The parsed glTF material
    /// * `textures` - The document's texture table, `None` when absent
    /// * `images` - Decoded images indexed by `Texture::source`, `None` when absent
    /// * `additional_resources` - Receives any resource the translation
    ///   allocates besides the material; the caller owns them afterwards
    ///
    /// # Returns
    /// The configured material. Broken texture references and unsupported
    /// features are reported to the sink and skipped; only a shader the
    /// host cannot resolve fails the call.
    pub fn generate_material(
        &mut self,
        record: &MaterialRecord,
        textures: Option<&[Texture]>,
        images: Option<&[ImageOf<B>]>,
        additional_resources: &mut Vec<B::Resource>,
    ) -> TranslateResult<B::Material> {
        let variant = select_variant(record);
        let shader = self
            .shaders
            .get_or_resolve(variant, &self.config.shaders, &self.backend)?;

        let mut material = self.backend.create_material(&shader);
        material.set_name(&record.name);

        parameters::init_main_texture(&mut material);

        let binder = TextureBinder::new(textures.unwrap_or_default(), images.unwrap_or_default(), &self.sink);

        if let Some(spec_gloss) = record.specular_glossiness() {
            parameters::bind_specular_glossiness(spec_gloss, &mut material, &binder);
        }
        if let Some(pbr) = &record.pbr_metallic_roughness {
            parameters::bind_metallic_roughness(pbr, &mut material, &binder);
        }
        parameters::bind_common_textures(record, &mut material, &binder);

        apply_alpha_mode(&mut material, record.alpha_mode, record.alpha_cutoff);

        parameters::bind_emission(record, &mut material);
        parameters::report_unsupported(record, &self.sink);

        log::info!(
            "Generated material '{}' ({:?}, {} additional resources)",
            record.name,
            variant,
            additional_resources.len()
        );
        Ok(material)
    }

    /// The host backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the host backend
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// The diagnostic sink
    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Active configuration
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Cached shader handles
    pub fn shader_cache(&self) -> &ShaderCache<B::Shader> {
        &self.shaders
    }

    /// Drop cached shader handles, e.g. after the host reloads shaders
    pub fn clear_shader_cache(&mut self) {
        self.shaders.clear();
    }
}
