//! # Build Errors
//!
//! Error types for scene construction. Every variant aborts the whole build;
//! no partial scene is ever returned.

use eisen_ir::InvalidCommand;
use thiserror::Error;

/// Errors that can occur while building a scene.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A command carried an invalid colour or opacity.
    #[error(transparent)]
    InvalidCommand(#[from] InvalidCommand),

    /// Geometries handed to the merger do not share one attribute layout.
    #[error("Schema mismatch: {message}")]
    SchemaMismatch { message: String },
}

impl BuildError {
    /// Creates a schema mismatch error.
    pub fn schema_mismatch(message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            message: message.into(),
        }
    }
}
