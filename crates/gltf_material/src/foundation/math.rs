//! Math utilities and types
//!
//! Vector aliases used by the material property interface.

pub use nalgebra::{Vector2, Vector4};

/// 2D vector type (texture offsets and scales)
pub type Vec2 = Vector2<f32>;

/// 4D vector type (colors and shader vectors)
pub type Vec4 = Vector4<f32>;

/// Build an RGBA vector from a glTF color array
pub fn rgba(color: [f32; 4]) -> Vec4 {
    Vec4::new(color[0], color[1], color[2], color[3])
}

/// Build an opaque RGBA vector from a glTF RGB array
pub fn rgb_opaque(color: [f32; 3]) -> Vec4 {
    Vec4::new(color[0], color[1], color[2], 1.0)
}
