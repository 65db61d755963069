//! # Cube Primitive
//!
//! Unit cube centred at the origin, shared by the `box` and `grid` kinds.

use crate::geometry::{Geometry, Topology};
use config::constants::UNIT_SIZE;
use glam::DVec3;

/// Corner indices of the 12 triangles, counter-clockwise seen from outside.
const CUBE_TRIANGLES: [[usize; 3]; 12] = [
    // Back face (z = min)
    [0, 2, 1],
    [0, 3, 2],
    // Front face (z = max)
    [4, 5, 6],
    [4, 6, 7],
    // Bottom face (y = min)
    [0, 1, 5],
    [0, 5, 4],
    // Top face (y = max)
    [2, 3, 7],
    [2, 7, 6],
    // Left face (x = min)
    [3, 0, 4],
    [3, 4, 7],
    // Right face (x = max)
    [1, 2, 6],
    [1, 6, 5],
];

/// Creates the unit cube as a triangle list.
///
/// # Returns
///
/// A geometry with 36 vertices (12 triangles, 2 per face).
///
/// # Example
///
/// ```rust
/// use eisen_mesh::primitives::create_cube;
///
/// let geometry = create_cube();
/// assert_eq!(geometry.vertex_count(), 36);
/// ```
pub fn create_cube() -> Geometry {
    let half = UNIT_SIZE / 2.0;
    let (min, max) = (DVec3::splat(-half), DVec3::splat(half));

    let corners = [
        DVec3::new(min.x, min.y, min.z),
        DVec3::new(max.x, min.y, min.z),
        DVec3::new(max.x, max.y, min.z),
        DVec3::new(min.x, max.y, min.z),
        DVec3::new(min.x, min.y, max.z),
        DVec3::new(max.x, min.y, max.z),
        DVec3::new(max.x, max.y, max.z),
        DVec3::new(min.x, max.y, max.z),
    ];

    let positions = CUBE_TRIANGLES
        .iter()
        .flat_map(|triangle| triangle.map(|corner| corners[corner]))
        .collect();

    Geometry::from_positions(Topology::Triangles, positions)
}
