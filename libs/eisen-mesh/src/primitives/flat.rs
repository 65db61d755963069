//! # Flat Primitives
//!
//! The unit line segment and the ad-hoc triangle.

use crate::geometry::{Geometry, Topology};
use config::constants::{DEFAULT_TRIANGLE, UNIT_LINE};
use glam::DVec3;

/// Creates the unit line segment along X, as a line list.
///
/// # Example
///
/// ```rust
/// use eisen_mesh::primitives::create_line;
/// use eisen_mesh::Topology;
///
/// let line = create_line();
/// assert_eq!(line.topology(), Topology::Lines);
/// assert_eq!(line.vertex_count(), 2);
/// ```
pub fn create_line() -> Geometry {
    Geometry::from_positions(
        Topology::Lines,
        UNIT_LINE.iter().copied().map(DVec3::from_array).collect(),
    )
}

/// Creates the default triangle in the XY plane.
pub fn create_triangle() -> Geometry {
    create_triangle_from(DEFAULT_TRIANGLE.map(DVec3::from_array))
}

/// Creates a triangle from three corners, used verbatim.
pub fn create_triangle_from(corners: [DVec3; 3]) -> Geometry {
    Geometry::from_positions(Topology::Triangles, corners.to_vec())
}
