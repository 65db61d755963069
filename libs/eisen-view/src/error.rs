//! # View Errors

use eisen_mesh::BuildError;
use thiserror::Error;

/// Errors raised by [`crate::RenderContext`].
#[derive(Debug, Error)]
pub enum ViewError {
    /// The compiler rejected the source. No build was attempted.
    #[error("Compile failed: {message}")]
    Compile { message: String },

    /// Scene construction failed; the previous scene is kept.
    #[error("Build failed: {0}")]
    Build(#[from] BuildError),

    /// Export was requested before any frame was rendered.
    #[error("No frame has been rendered yet")]
    NoFrame,

    /// The image encoder failed.
    #[error("Frame encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

impl ViewError {
    /// Creates a compile error.
    pub fn compile(message: impl Into<String>) -> Self {
        Self::Compile {
            message: message.into(),
        }
    }
}
