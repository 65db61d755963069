//! # Node Handle
//!
//! WASM-friendly wrapper for one render node: flat vertex buffers plus the
//! material parameters a Three.js host needs to recreate it.

use eisen_mesh::{NodeKind, RenderNode, Side};
use wasm_bindgen::prelude::*;

/// A handle to one node's buffers and material.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const scene = build_scene(objectCodeJson, true, false);
///
/// for (let i = 0; i < scene.node_count; i++) {
///   const node = scene.node(i);
///   const geometry = new THREE.BufferGeometry();
///   geometry.setAttribute('position', new THREE.BufferAttribute(node.positions(), 3));
///   if (node.has_colors()) {
///     geometry.setAttribute('color', new THREE.BufferAttribute(node.colors(), 4));
///   }
///   const material = new THREE.MeshPhongMaterial({
///     color: node.color, emissive: node.emissive, opacity: node.opacity,
///     transparent: node.transparent, vertexColors: node.vertex_colors,
///     wireframe: node.wireframe, flatShading: true,
///     side: node.double_sided ? THREE.DoubleSide : THREE.FrontSide,
///   });
///   group.add(node.is_line ? new THREE.Line(geometry, material) : new THREE.Mesh(geometry, material));
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct NodeHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    positions: Vec<f32>,
    /// Optional baked vertex colours as [r, g, b, sentinel, ...]
    colors: Option<Vec<f32>>,
    vertex_count: u32,
    is_line: bool,
    color: u32,
    specular: u32,
    emissive: u32,
    shininess: f64,
    opacity: f64,
    transparent: bool,
    vertex_colors: bool,
    wireframe: bool,
    double_sided: bool,
}

#[wasm_bindgen]
impl NodeHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// True for a line node, false for a mesh.
    #[wasm_bindgen(getter)]
    pub fn is_line(&self) -> bool {
        self.is_line
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.positions[..])
    }

    /// Returns the baked vertex colours as a Float32Array, if any.
    ///
    /// Length: vertex_count * 4
    #[wasm_bindgen]
    pub fn colors(&self) -> Option<js_sys::Float32Array> {
        self.colors
            .as_ref()
            .map(|c| js_sys::Float32Array::from(&c[..]))
    }

    /// Returns true if the node carries vertex colours.
    #[wasm_bindgen]
    pub fn has_colors(&self) -> bool {
        self.colors.is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn color(&self) -> u32 {
        self.color
    }

    #[wasm_bindgen(getter)]
    pub fn specular(&self) -> u32 {
        self.specular
    }

    #[wasm_bindgen(getter)]
    pub fn emissive(&self) -> u32 {
        self.emissive
    }

    #[wasm_bindgen(getter)]
    pub fn shininess(&self) -> f64 {
        self.shininess
    }

    #[wasm_bindgen(getter)]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    #[wasm_bindgen(getter)]
    pub fn transparent(&self) -> bool {
        self.transparent
    }

    #[wasm_bindgen(getter)]
    pub fn vertex_colors(&self) -> bool {
        self.vertex_colors
    }

    #[wasm_bindgen(getter)]
    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    #[wasm_bindgen(getter)]
    pub fn double_sided(&self) -> bool {
        self.double_sided
    }
}

impl NodeHandle {
    /// Creates a handle from a scene node.
    pub fn from_node(node: &RenderNode) -> Self {
        let material = &node.material;
        Self {
            positions: node.geometry.positions_f32(),
            colors: node.geometry.colors_f32(),
            vertex_count: u32::try_from(node.geometry.vertex_count()).unwrap_or(u32::MAX),
            is_line: node.kind == NodeKind::Line,
            color: material.color.to_hex(),
            specular: material.specular.to_hex(),
            emissive: material.emissive.to_hex(),
            shininess: material.shininess,
            opacity: material.opacity,
            transparent: material.transparent,
            vertex_colors: material.vertex_colors,
            wireframe: material.wireframe,
            double_sided: material.side == Side::Double,
        }
    }

    /// Position buffer without a JS round trip.
    pub fn position_data(&self) -> &[f32] {
        &self.positions
    }

    /// Colour buffer without a JS round trip.
    pub fn color_data(&self) -> Option<&[f32]> {
        self.colors.as_deref()
    }
}
