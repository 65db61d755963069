//! # Cylinder Primitive
//!
//! Generates the capped unit cylinder, axis along Y.

use crate::geometry::{Geometry, Topology};
use config::constants::{DEFAULT_SEGMENTS, MIN_SEGMENTS, UNIT_RADIUS, UNIT_SIZE};
use glam::DVec3;
use std::f64::consts::TAU;

/// Creates a capped cylinder triangle list centred at the origin.
///
/// # Arguments
///
/// * `radius` - Radius of both caps
/// * `height` - Extent along Y
/// * `segments` - Number of segments around the circumference, at least
///   [`MIN_SEGMENTS`]
///
/// # Returns
///
/// `4 * segments` triangles: two per side quad and one per cap wedge.
///
/// # Example
///
/// ```rust
/// use eisen_mesh::primitives::create_cylinder;
///
/// let geometry = create_cylinder(0.5, 1.0, 16);
/// assert_eq!(geometry.primitive_count(), 64);
/// ```
pub fn create_cylinder(radius: f64, height: f64, segments: u32) -> Geometry {
    let segments = segments.max(MIN_SEGMENTS);
    let half_height = height / 2.0;
    let ring = |y: f64| -> Vec<DVec3> {
        (0..=segments)
            .map(|j| {
                let theta = TAU * j as f64 / segments as f64;
                let (sin_theta, cos_theta) = theta.sin_cos();
                DVec3::new(radius * sin_theta, y, radius * cos_theta)
            })
            .collect()
    };

    let top = ring(half_height);
    let bottom = ring(-half_height);
    let top_centre = DVec3::new(0.0, half_height, 0.0);
    let bottom_centre = DVec3::new(0.0, -half_height, 0.0);

    let mut positions = Vec::with_capacity(segments as usize * 12);

    for j in 0..segments as usize {
        // Side quad
        let (a, b, c, d) = (top[j], bottom[j], bottom[j + 1], top[j + 1]);
        positions.extend([a, b, d]);
        positions.extend([b, c, d]);

        // Caps
        positions.extend([top[j], top[j + 1], top_centre]);
        positions.extend([bottom[j + 1], bottom[j], bottom_centre]);
    }

    Geometry::from_positions(Topology::Triangles, positions)
}

/// Creates the unit-diameter, unit-height cylinder used by the `cylinder` kind.
pub fn create_unit_cylinder() -> Geometry {
    create_cylinder(UNIT_RADIUS, UNIT_SIZE, DEFAULT_SEGMENTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cylinder_triangle_count() {
        assert_eq!(create_unit_cylinder().primitive_count(), 4 * 32);
    }

    #[test]
    fn test_cylinder_bounding_box() {
        let (min, max) = create_unit_cylinder().bounding_box();
        assert_relative_eq!(min.y, -0.5);
        assert_relative_eq!(max.y, 0.5);
        assert_relative_eq!(max.z, 0.5, epsilon = 1e-12);
        assert_relative_eq!(min.z, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_segments_are_raised_to_minimum() {
        assert_eq!(create_cylinder(1.0, 1.0, 1).primitive_count(), 4 * 3);
    }

    #[test]
    fn test_cylinder_faces_point_outward() {
        let geometry = create_cylinder(1.0, 2.0, 8);
        for triangle in geometry.positions().chunks(3) {
            let normal = (triangle[1] - triangle[0]).cross(triangle[2] - triangle[0]);
            let centre = (triangle[0] + triangle[1] + triangle[2]) / 3.0;
            assert!(normal.dot(centre) > 0.0);
        }
    }
}
