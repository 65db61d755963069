//! # Sphere Primitive
//!
//! Generates the unit-diameter sphere (and its squashed variant) using
//! latitude/longitude tessellation.

use crate::geometry::{Geometry, Topology};
use config::constants::{DEFAULT_SEGMENTS, MIN_SEGMENTS, SQUASH_Y_SCALE, UNIT_RADIUS};
use glam::DVec3;
use std::f64::consts::{PI, TAU};

/// Creates a sphere triangle list using latitude/longitude tessellation.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `width_segments` - Segments around the equator
/// * `height_segments` - Segments from pole to pole
///
/// # Algorithm
///
/// - A `(height + 1) x (width + 1)` vertex grid, Y up, poles on the Y axis
/// - Each grid cell becomes two triangles, except at the poles where one of
///   the two would be degenerate and is skipped
///
/// Triangle count is `width * (2 * height - 2)`. `width` is raised to at
/// least [`MIN_SEGMENTS`] and `height` to at least 2.
///
/// # Example
///
/// ```rust
/// use eisen_mesh::primitives::create_sphere;
///
/// let geometry = create_sphere(0.5, 8, 4);
/// assert_eq!(geometry.primitive_count(), 8 * (2 * 4 - 2));
/// ```
pub fn create_sphere(radius: f64, width_segments: u32, height_segments: u32) -> Geometry {
    let width = width_segments.max(MIN_SEGMENTS) as usize;
    let height = height_segments.max(2) as usize;

    let grid: Vec<Vec<DVec3>> = (0..=height)
        .map(|iy| {
            let theta = PI * iy as f64 / height as f64;
            let (sin_theta, cos_theta) = theta.sin_cos();

            (0..=width)
                .map(|ix| {
                    let phi = TAU * ix as f64 / width as f64;
                    let (sin_phi, cos_phi) = phi.sin_cos();
                    DVec3::new(
                        -radius * cos_phi * sin_theta,
                        radius * cos_theta,
                        radius * sin_phi * sin_theta,
                    )
                })
                .collect()
        })
        .collect();

    let mut positions = Vec::with_capacity(width * (2 * height).saturating_sub(2) * 3);

    for iy in 0..height {
        for ix in 0..width {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];

            // Top row collapses to the north pole
            if iy != 0 {
                positions.extend([a, b, d]);
            }
            // Bottom row collapses to the south pole
            if iy != height - 1 {
                positions.extend([b, c, d]);
            }
        }
    }

    Geometry::from_positions(Topology::Triangles, positions)
}

/// Creates the unit-diameter sphere used by the `sphere` kind.
pub fn create_unit_sphere() -> Geometry {
    create_sphere(UNIT_RADIUS, DEFAULT_SEGMENTS, DEFAULT_SEGMENTS)
}

/// Creates the unit sphere with its Y axis halved, used by the `squash` kind.
///
/// The scale is baked at construction, before the command's own transform.
pub fn create_squash() -> Geometry {
    let mut geometry = create_unit_sphere();
    geometry.scale(DVec3::new(1.0, SQUASH_Y_SCALE, 1.0));
    geometry
}
