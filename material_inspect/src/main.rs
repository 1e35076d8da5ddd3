//! Material inspection tool
//!
//! Opens a glTF or GLB file, runs every material through the translator on
//! the headless backend and prints what each one turned into.
//!
//! Usage: `material_inspect <MODEL> [CONFIG]`, see `--help`.

use std::process::ExitCode;

use clap::{Arg, ArgMatches, Command};

use gltf_material::config::ConfigError;
use gltf_material::foundation::logging;
use gltf_material::import::{material_records, texture_table};
use gltf_material::prelude::*;
use thiserror::Error;

/// Inspection errors
#[derive(Error, Debug)]
enum InspectError {
    /// The document could not be opened or parsed
    #[error("glTF error: {0}")]
    Gltf(#[from] gltf::Error),

    /// The translator configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A material could not be translated
    #[error("Translation error: {0}")]
    Translate(#[from] TranslateError),
}

fn cli() -> Command {
    Command::new("material_inspect")
        .about("Translates the materials of a glTF model and prints the result")
        .arg(
            Arg::new("model")
                .value_name("MODEL")
                .help("Path to a .gltf or .glb file")
                .required(true),
        )
        .arg(
            Arg::new("config")
                .value_name("CONFIG")
                .help("Translator configuration (.toml or .ron)"),
        )
}

fn image_label(image: &gltf::Image<'_>) -> String {
    if let Some(name) = image.name() {
        return name.to_string();
    }
    match image.source() {
        gltf::image::Source::Uri { uri, .. } => uri.to_string(),
        gltf::image::Source::View { .. } => format!("image #{}", image.index()),
    }
}

fn describe(material: &RecordedMaterial, backend: &HeadlessBackend) {
    println!("material '{}'", material.name());
    println!("  shader:       {}", material.shader_name());

    let keywords: Vec<&str> = material.keywords().collect();
    println!("  keywords:     {}", keywords.join(" "));

    if let Some(state) = material.render_state() {
        println!(
            "  render state: {:?}, queue {:?}, depth write {}",
            state.render_type, state.render_queue, state.depth_write
        );
    }

    for slot in [
        properties::MAIN_TEX,
        properties::METALLIC_GLOSS_MAP,
        properties::SPEC_GLOSS_MAP,
        properties::BUMP_MAP,
        properties::OCCLUSION_MAP,
        properties::EMISSION_MAP,
    ] {
        if let Some(handle) = material.texture(slot) {
            let label = backend.texture_name(handle).unwrap_or("?");
            match (material.texture_offset(slot), material.texture_scale(slot)) {
                (Some(offset), Some(scale)) => println!(
                    "  {:<18} {} offset ({}, {}) scale ({}, {})",
                    slot.name(), label, offset.x, offset.y, scale.x, scale.y
                ),
                _ => println!("  {:<18} {}", slot.name(), label),
            }
        }
    }
}

fn run(matches: &ArgMatches) -> Result<(), InspectError> {
    let path = matches
        .get_one::<String>("model")
        .map(String::as_str)
        .unwrap_or_default();
    let config = match matches.get_one::<String>("config") {
        Some(config_path) => TranslatorConfig::load_from_file(config_path)?,
        None => TranslatorConfig::default(),
    };

    let gltf = gltf::Gltf::open(&path)?;
    let document = &gltf.document;
    let records = material_records(document);
    let textures = texture_table(document);
    log::info!("Loaded '{}': {} materials, {} textures", path, records.len(), textures.len());

    let mut backend = HeadlessBackend::with_shader_names(&config.shaders);
    let images: Vec<TextureHandle> = document
        .images()
        .map(|image| backend.create_texture(image_label(&image)))
        .collect();

    let mut translator = MaterialTranslator::with_config(backend, LogSink, config);
    let mut resources = Vec::new();

    for record in &records {
        let material = translator.generate_material(
            record,
            Some(textures.as_slice()),
            Some(images.as_slice()),
            &mut resources,
        )?;
        describe(&material, translator.backend());
    }

    if !resources.is_empty() {
        log::info!("{} additional resources created", resources.len());
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    logging::init_with_default("info");

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_model_and_optional_config() {
        let matches = cli()
            .try_get_matches_from(["material_inspect", "scene.gltf", "translator.toml"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("model").map(String::as_str), Some("scene.gltf"));
        assert_eq!(matches.get_one::<String>("config").map(String::as_str), Some("translator.toml"));

        let matches = cli().try_get_matches_from(["material_inspect", "scene.glb"]).unwrap();
        assert!(matches.get_one::<String>("config").is_none());
    }

    #[test]
    fn test_help_is_not_a_model_path() {
        let err = cli().try_get_matches_from(["material_inspect", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_missing_model_rejected() {
        let err = cli().try_get_matches_from(["material_inspect"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_argument_rejected() {
        let err = cli()
            .try_get_matches_from(["material_inspect", "scene.gltf", "translator.toml", "junk"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
