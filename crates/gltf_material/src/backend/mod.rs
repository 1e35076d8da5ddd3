//! Reference implementations of the host collaborators

pub mod headless;

pub use headless::{HeadlessBackend, HeadlessShader, PropertyValue, RecordedMaterial, TextureHandle};
