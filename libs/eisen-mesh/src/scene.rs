//! # Scene Graph
//!
//! The assembled scene: background, the fixed light rig, and a single group
//! holding every renderable node. Transforms are already baked into node
//! geometry; the group only carries the animation rotation.

use crate::geometry::{Geometry, Topology};
use crate::material::Material;
use config::constants::{DEFAULT_BACKGROUND, LIGHT_COLOR, LIGHT_INTENSITY, LIGHT_POSITIONS};
use eisen_ir::Rgb;
use glam::{DMat4, DVec3, EulerRot};

/// How a node's geometry is rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Filled triangles.
    Mesh,
    /// Line segments.
    Line,
}

impl From<Topology> for NodeKind {
    fn from(topology: Topology) -> Self {
        match topology {
            Topology::Triangles => NodeKind::Mesh,
            Topology::Lines => NodeKind::Line,
        }
    }
}

/// Geometry plus the material it is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    pub kind: NodeKind,
    pub geometry: Geometry,
    pub material: Material,
}

impl RenderNode {
    /// Wraps a geometry, choosing the node kind from its topology.
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self {
            kind: geometry.topology().into(),
            geometry,
            material,
        }
    }
}

/// The single group every node is added to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneGroup {
    nodes: Vec<RenderNode>,
    /// Euler angles (XYZ order) in radians.
    pub rotation: DVec3,
}

impl SceneGroup {
    /// Adds a node; nodes draw in insertion order.
    pub fn add(&mut self, node: RenderNode) {
        self.nodes.push(node);
    }

    /// Returns the nodes in draw order.
    #[inline]
    pub fn nodes(&self) -> &[RenderNode] {
        &self.nodes
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the group has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Advances the X and Y rotation.
    pub fn rotate(&mut self, dx: f64, dy: f64) {
        self.rotation.x += dx;
        self.rotation.y += dy;
    }

    /// World matrix of the group.
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}

/// A white point light with no distance falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: DVec3,
    pub color: Rgb,
    pub intensity: f64,
}

/// Builds the fixed three-point light rig.
pub fn three_point_lights() -> Vec<PointLight> {
    LIGHT_POSITIONS
        .iter()
        .map(|position| PointLight {
            position: DVec3::from_array(*position),
            color: Rgb::from_hex(LIGHT_COLOR),
            intensity: LIGHT_INTENSITY,
        })
        .collect()
}

/// A ready-to-present scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: Rgb,
    pub lights: Vec<PointLight>,
    pub group: SceneGroup,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates an empty scene with the default background and light rig.
    pub fn new() -> Self {
        Self {
            background: Rgb::from_hex(DEFAULT_BACKGROUND),
            lights: three_point_lights(),
            group: SceneGroup::default(),
        }
    }

    /// Total vertex count across all nodes.
    pub fn vertex_count(&self) -> usize {
        self.group
            .nodes()
            .iter()
            .map(|node| node.geometry.vertex_count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{create_cube, create_line};
    use approx::assert_relative_eq;

    #[test]
    fn test_new_scene_defaults() {
        let scene = Scene::new();
        assert_eq!(scene.background.to_hex(), DEFAULT_BACKGROUND);
        assert_eq!(scene.lights.len(), 3);
        assert!(scene.group.is_empty());
    }

    #[test]
    fn test_node_kind_follows_topology() {
        let material = Material::phong(Rgb::WHITE, 1.0);
        assert_eq!(RenderNode::new(create_cube(), material.clone()).kind, NodeKind::Mesh);
        assert_eq!(RenderNode::new(create_line(), material).kind, NodeKind::Line);
    }

    #[test]
    fn test_vertex_count_sums_nodes() {
        let material = Material::phong(Rgb::WHITE, 1.0);
        let mut scene = Scene::new();
        assert_eq!(scene.vertex_count(), 0);

        scene.group.add(RenderNode::new(create_cube(), material.clone()));
        scene.group.add(RenderNode::new(create_line(), material));
        assert_eq!(scene.vertex_count(), 36 + 2);
    }

    #[test]
    fn test_group_rotation_matrix() {
        let mut group = SceneGroup::default();
        assert_eq!(group.matrix(), DMat4::IDENTITY);

        group.rotate(0.0, std::f64::consts::FRAC_PI_2);
        let rotated = group.matrix().transform_point3(DVec3::X);
        assert_relative_eq!(rotated.z, -1.0, epsilon = 1e-12);
    }
}
