//! # Geometry
//!
//! Non-indexed vertex buffers: a position per vertex and, after baking, an
//! RGBA colour per vertex. Topology is implied by the vertex count: every
//! three positions form a triangle, or every two a line segment.

use config::constants::{COLOR_COMPONENTS, POSITION_COMPONENTS};
use glam::{DMat4, DVec3};

/// How consecutive vertices are grouped into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Three vertices per triangle.
    Triangles,
    /// Two vertices per line segment.
    Lines,
}

impl Topology {
    /// Vertices consumed by one primitive.
    #[inline]
    pub fn vertices_per_primitive(self) -> usize {
        match self {
            Topology::Triangles => 3,
            Topology::Lines => 2,
        }
    }
}

/// Attribute layout of a geometry, compared by the merger.
///
/// `None` means the attribute is absent; `Some(n)` gives its component count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSchema {
    pub topology: Topology,
    pub position: Option<usize>,
    pub color: Option<usize>,
}

/// Vertex buffers for one primitive or one merged batch.
///
/// Positions use f64; colours are f32 because they go straight to the GPU.
///
/// # Example
///
/// ```rust
/// use eisen_mesh::{Geometry, Topology};
/// use glam::{DMat4, DVec3};
///
/// let mut geometry = Geometry::from_positions(
///     Topology::Triangles,
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
/// );
/// geometry.apply_matrix(&DMat4::from_translation(DVec3::Z));
/// assert_eq!(geometry.positions()[0], DVec3::Z);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    topology: Topology,
    positions: Vec<DVec3>,
    colors: Option<Vec<[f32; 4]>>,
}

impl Geometry {
    /// Creates an empty geometry.
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            positions: Vec::new(),
            colors: None,
        }
    }

    /// Creates a geometry from positions.
    pub fn from_positions(topology: Topology, positions: Vec<DVec3>) -> Self {
        Self {
            topology,
            positions,
            colors: None,
        }
    }

    /// Returns the topology.
    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles or line segments.
    #[inline]
    pub fn primitive_count(&self) -> usize {
        self.positions.len() / self.topology.vertices_per_primitive()
    }

    /// Returns true if the geometry has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the baked vertex colours.
    #[inline]
    pub fn colors(&self) -> Option<&[[f32; 4]]> {
        self.colors.as_deref()
    }

    /// Sets one RGBA colour per vertex.
    pub(crate) fn set_colors(&mut self, colors: Vec<[f32; 4]>) {
        debug_assert_eq!(colors.len(), self.positions.len());
        self.colors = Some(colors);
    }

    /// Describes the attribute layout.
    pub fn schema(&self) -> AttributeSchema {
        AttributeSchema {
            topology: self.topology,
            position: (!self.positions.is_empty()).then_some(POSITION_COMPONENTS),
            color: self.colors.as_ref().map(|_| COLOR_COMPONENTS),
        }
    }

    /// Multiplies every position by an affine matrix, in place.
    ///
    /// The matrix is not checked for invertibility: a singular matrix simply
    /// flattens the geometry.
    pub fn apply_matrix(&mut self, matrix: &DMat4) {
        for position in &mut self.positions {
            *position = matrix.transform_point3(*position);
        }
    }

    /// Scales every position component-wise, in place.
    pub fn scale(&mut self, factors: DVec3) {
        for position in &mut self.positions {
            *position *= factors;
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.positions.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)))
    }

    /// Appends another geometry's buffers. The caller checks schemas.
    pub(crate) fn extend_from(&mut self, other: Geometry) {
        self.positions.extend(other.positions);
        if let (Some(colors), Some(other_colors)) = (&mut self.colors, other.colors) {
            colors.extend(other_colors);
        }
    }

    /// Exports positions as a flat f32 array for the GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        self.positions
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    /// Exports colours as a flat f32 array for the GPU.
    pub fn colors_f32(&self) -> Option<Vec<f32>> {
        self.colors
            .as_ref()
            .map(|colors| colors.iter().flatten().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle() -> Geometry {
        Geometry::from_positions(
            Topology::Triangles,
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
        )
    }

    #[test]
    fn test_identity_leaves_positions_unchanged() {
        let mut geometry = triangle();
        let before = geometry.positions().to_vec();
        geometry.apply_matrix(&DMat4::IDENTITY);
        assert_eq!(geometry.positions(), &before[..]);
    }

    #[test]
    fn test_apply_matrix_translates_and_scales() {
        let mut geometry = triangle();
        let matrix = DMat4::from_translation(DVec3::new(1.0, 2.0, 3.0))
            * DMat4::from_scale(DVec3::splat(2.0));
        geometry.apply_matrix(&matrix);
        assert_eq!(geometry.positions()[1], DVec3::new(3.0, 2.0, 3.0));
    }

    #[test]
    fn test_singular_matrix_flattens() {
        let mut geometry = triangle();
        geometry.apply_matrix(&DMat4::from_scale(DVec3::new(1.0, 0.0, 1.0)));
        for position in geometry.positions() {
            assert_relative_eq!(position.y, 0.0);
        }
    }

    #[test]
    fn test_schema_reflects_attributes() {
        let mut geometry = triangle();
        assert_eq!(geometry.schema().position, Some(3));
        assert_eq!(geometry.schema().color, None);

        geometry.set_colors(vec![[1.0, 1.0, 1.0, 1.0]; 3]);
        assert_eq!(geometry.schema().color, Some(4));

        assert_eq!(Geometry::new(Topology::Lines).schema().position, None);
    }

    #[test]
    fn test_primitive_count_follows_topology() {
        assert_eq!(triangle().primitive_count(), 1);
        let line = Geometry::from_positions(Topology::Lines, vec![DVec3::ZERO, DVec3::X]);
        assert_eq!(line.primitive_count(), 1);
    }

    #[test]
    fn test_flat_exports() {
        let mut geometry = triangle();
        assert_eq!(
            geometry.positions_f32(),
            vec![0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        );
        geometry.set_colors(vec![[0.5, 0.25, 1.0, -100.0]; 3]);
        assert_eq!(geometry.colors_f32().unwrap().len(), 12);
    }

    #[test]
    fn test_bounding_box() {
        let (min, max) = triangle().bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(1.0, 1.0, 0.0));
    }
}
