//! # glTF Material
//!
//! Translates glTF material descriptions into renderer-native materials.
//!
//! ## Features
//!
//! - **Shader Selection**: metallic-roughness, specular-glossiness or unlit
//! - **Parameter Binding**: factors, colors and emission
//! - **Texture Binding**: table resolution plus KHR_texture_transform with
//!   the V-axis flip between glTF and renderer UV space
//! - **Alpha Modes**: opaque, alpha-test and blended render states
//! - **Import**: records straight from a `gltf::Document`
//!
//! ## Quick Start
//!
//! ```rust
//! use gltf_material::prelude::*;
//!
//! let backend = HeadlessBackend::with_default_shaders();
//! let mut translator = MaterialTranslator::new(backend, LogSink);
//!
//! let record = MaterialRecord {
//!     pbr_metallic_roughness: Some(PbrMetallicRoughness {
//!         base_color: [1.0, 0.5, 0.0, 1.0],
//!         ..Default::default()
//!     }),
//!     ..MaterialRecord::named("orange")
//! };
//!
//! let mut resources = Vec::new();
//! let material = translator
//!     .generate_material(&record, None, None, &mut resources)
//!     .unwrap();
//! assert_eq!(material.name(), "orange");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod config;
pub mod error;
pub mod diagnostics;
pub mod record;
pub mod target;
pub mod shader;
pub mod texture_binder;
pub mod parameters;
pub mod alpha;
pub mod translator;
pub mod backend;
pub mod import;

pub use error::{Diagnostic, Severity, TranslateError, TranslateResult};
pub use translator::MaterialTranslator;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        backend::{HeadlessBackend, RecordedMaterial, TextureHandle},
        config::{Config, ShaderNames, TranslatorConfig},
        diagnostics::{CapturingSink, DiagnosticSink, LogSink},
        error::{Diagnostic, Severity, TranslateError, TranslateResult},
        record::{
            AlphaMode, MaterialExtensions, MaterialRecord, PbrMetallicRoughness,
            PbrSpecularGlossiness, Texture, TextureRef, TextureTransform, Unlit,
        },
        shader::{MaterialFactory, ShaderRegistry, ShaderVariant},
        target::{properties, MaterialTarget, PropertyId, RenderState},
        translator::MaterialTranslator,
    };
}
