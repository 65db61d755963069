//! # Batch Mode
//!
//! One pass over the object code decides how the whole scene is drawn.

use eisen_ir::ObjectCommand;
use std::fmt;

/// How a build turns primitives into draw calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// Vertex-coloured geometries merged under one shared material.
    Merged,
    /// One node and material per primitive.
    PerObject,
}

impl fmt::Display for BatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchMode::Merged => f.write_str("merged"),
            BatchMode::PerObject => f.write_str("per-object"),
        }
    }
}

/// Picks the batch mode for a build.
///
/// The scan stops at the first primitive whose opacity is not exactly 1;
/// primitives after it are never inspected. A fully opaque scene merges only
/// when `optimize` is on.
///
/// # Example
///
/// ```rust
/// use eisen_ir::{PrimitiveCommand, PrimitiveKind};
/// use eisen_mesh::{select_mode, BatchMode};
///
/// let objects = vec![PrimitiveCommand::new(PrimitiveKind::Box, "#ffffff").into()];
/// assert_eq!(select_mode(&objects, true), BatchMode::Merged);
/// assert_eq!(select_mode(&objects, false), BatchMode::PerObject);
/// ```
pub fn select_mode(objects: &[ObjectCommand], optimize: bool) -> BatchMode {
    let translucent = objects
        .iter()
        .filter_map(ObjectCommand::as_primitive)
        .any(|primitive| primitive.is_translucent());

    if translucent || !optimize {
        BatchMode::PerObject
    } else {
        BatchMode::Merged
    }
}
