//! # Geometry Merging
//!
//! Concatenates baked geometries into one buffer set so the whole batch is a
//! single draw call.

use crate::error::BuildError;
use crate::geometry::Geometry;

/// Concatenates geometries in input order.
///
/// Every input must have the same schema as the first one: same topology,
/// positions present, and the same colour layout. Nothing is truncated or
/// padded; a mismatch fails the merge.
///
/// # Errors
///
/// [`BuildError::SchemaMismatch`] for an empty input, an input without
/// positions, or differing schemas.
///
/// # Example
///
/// ```rust
/// use eisen_mesh::{merge_geometries, primitives::{create_cube, create_triangle}};
///
/// let merged = merge_geometries(vec![create_cube(), create_triangle()]).unwrap();
/// assert_eq!(merged.vertex_count(), 36 + 3);
/// ```
pub fn merge_geometries(geometries: Vec<Geometry>) -> Result<Geometry, BuildError> {
    let mut inputs = geometries.into_iter().enumerate();
    let Some((_, mut merged)) = inputs.next() else {
        return Err(BuildError::schema_mismatch("no geometries to merge"));
    };

    let schema = merged.schema();
    if schema.position.is_none() {
        return Err(BuildError::schema_mismatch(
            "geometry #0 has no position attribute",
        ));
    }

    for (index, geometry) in inputs {
        let other = geometry.schema();
        if other.position.is_none() {
            return Err(BuildError::schema_mismatch(format!(
                "geometry #{index} has no position attribute"
            )));
        }
        if other != schema {
            return Err(BuildError::schema_mismatch(format!(
                "geometry #{index} has schema {other:?}, expected {schema:?}"
            )));
        }
        merged.extend_from(geometry);
    }

    Ok(merged)
}
