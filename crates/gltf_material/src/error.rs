//! Error and diagnostic types for material translation
//!
//! Only [`TranslateError`] aborts a translation. Everything else is a
//! [`Diagnostic`] reported to the sink while the material keeps building.

use thiserror::Error;

/// Fatal translation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The host shader registry could not resolve an identifier
    #[error("Shader not found: {0}")]
    ShaderNotFound(String),
}

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;

/// How loudly a diagnostic should be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Feature ignored, material otherwise intact
    Warning,
    /// Broken reference, binding skipped
    Error,
}

/// Non-fatal problems found while translating a material
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Texture index beyond the texture table
    #[error("Texture #{0} not found")]
    TextureNotFound(usize),

    /// Image index beyond the image table
    #[error("Image #{0} not found")]
    ImageNotFound(usize),

    /// Material requests double-sided rendering
    #[error("Double sided shading is not supported!")]
    DoubleSidedUnsupported,

    /// KHR_texture_transform carries a non-zero rotation
    #[error("texture transform rotation is not supported (rotation = {0})")]
    TextureRotationUnsupported(f32),
}

impl Diagnostic {
    /// Severity this diagnostic is reported with
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::TextureNotFound(_) | Diagnostic::ImageNotFound(_) => Severity::Error,
            Diagnostic::DoubleSidedUnsupported | Diagnostic::TextureRotationUnsupported(_) => {
                Severity::Warning
            }
        }
    }

    /// True for unsupported-feature diagnostics
    pub fn is_unsupported_feature(&self) -> bool {
        self.severity() == Severity::Warning
    }
}
