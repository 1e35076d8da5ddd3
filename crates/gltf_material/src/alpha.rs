//! Alpha mode resolution

use crate::record::AlphaMode;
use crate::target::{properties, MaterialTarget, RenderState};

/// Configure blend state, keywords and cutoff for a glTF alpha mode
///
/// `alpha_cutoff` is only written in mask mode.
pub fn apply_alpha_mode<M: MaterialTarget + ?Sized>(material: &mut M, mode: AlphaMode, alpha_cutoff: f32) {
    match mode {
        AlphaMode::Mask => {
            material.set_scalar(properties::CUTOFF, alpha_cutoff);
            material.set_render_state(RenderState::alpha_test());
            material.enable_keyword(properties::KW_ALPHA_TEST);
            material.disable_keyword(properties::KW_ALPHA_BLEND);
        }
        AlphaMode::Blend => {
            material.set_render_state(RenderState::alpha_blend());
            material.disable_keyword(properties::KW_ALPHA_TEST);
            material.enable_keyword(properties::KW_ALPHA_BLEND);
        }
        AlphaMode::Opaque => {
            material.set_render_state(RenderState::opaque());
            material.disable_keyword(properties::KW_ALPHA_TEST);
            material.disable_keyword(properties::KW_ALPHA_BLEND);
        }
    }
}
