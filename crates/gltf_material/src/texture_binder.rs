//! Texture reference resolution and binding
//!
//! glTF puts the UV origin at the top-left, the renderer at the bottom-left.
//! Offsets map to `(x, 1 - y)` and scales to `(x, -y)`.

use crate::diagnostics::DiagnosticSink;
use crate::error::Diagnostic;
use crate::foundation::math::Vec2;
use crate::record::{Texture, TextureRef, TextureTransform};
use crate::target::{MaterialTarget, PropertyId};

/// Resolves texture references against the texture and image tables
pub struct TextureBinder<'a, T, D: ?Sized> {
    textures: &'a [Texture],
    images: &'a [T],
    sink: &'a D,
}

impl<'a, T, D: DiagnosticSink + ?Sized> TextureBinder<'a, T, D> {
    /// Create a binder over the given tables
    pub fn new(textures: &'a [Texture], images: &'a [T], sink: &'a D) -> Self {
        Self { textures, images, sink }
    }

    /// Sink receiving binding diagnostics
    pub fn sink(&self) -> &'a D {
        self.sink
    }

    /// Resolve a reference to its image, reporting broken indices
    pub fn resolve(&self, texture_ref: &TextureRef) -> Option<&'a T> {
        let index = usize::try_from(texture_ref.index).ok()?;

        let Some(texture) = self.textures.get(index) else {
            self.sink.error(&Diagnostic::TextureNotFound(index));
            return None;
        };

        let image = self.images.get(texture.source);
        if image.is_none() {
            self.sink.error(&Diagnostic::ImageNotFound(texture.source));
        }
        image
    }

    /// Bind the referenced image to `slot`
    ///
    /// Returns false without touching the material when the reference is
    /// absent, negative, or points outside either table.
    pub fn try_bind<M>(&self, texture_ref: Option<&TextureRef>, material: &mut M, slot: PropertyId) -> bool
    where
        M: MaterialTarget<Texture = T>,
    {
        let Some(texture_ref) = texture_ref else {
            return false;
        };
        let Some(image) = self.resolve(texture_ref) else {
            return false;
        };

        material.set_texture(slot, image);
        if let Some(transform) = &texture_ref.transform {
            self.apply_transform(transform, material, slot);
        }

        log::debug!("Bound texture #{} to {}", texture_ref.index, slot.name());
        true
    }

    fn apply_transform<M: MaterialTarget>(&self, transform: &TextureTransform, material: &mut M, slot: PropertyId) {
        if let Some(offset) = transform.offset {
            material.set_texture_offset(slot, flip_offset(offset));
        }
        if transform.rotation != 0.0 {
            self.sink.warn(&Diagnostic::TextureRotationUnsupported(transform.rotation));
        }
        if let Some(scale) = transform.scale {
            material.set_texture_scale(slot, flip_scale(scale));
        }
    }
}

/// Convert a glTF UV offset to the renderer's convention
pub fn flip_offset(offset: [f32; 2]) -> Vec2 {
    Vec2::new(offset[0], 1.0 - offset[1])
}

/// Convert a glTF UV scale to the renderer's convention
pub fn flip_scale(scale: [f32; 2]) -> Vec2 {
    Vec2::new(scale[0], -scale[1])
}
