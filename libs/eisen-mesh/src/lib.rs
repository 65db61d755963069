//! # Eisen Mesh
//!
//! Builds a renderable scene from Eisen object code and batches its geometry.
//!
//! ## Architecture
//!
//! ```text
//! ObjectCode → select_mode ─┬─ Merged:    factory → transform → bake  → merge → 1 node
//!                           └─ PerObject: factory → transform → material → N nodes
//! ```
//!
//! - **Merged**: every primitive is opaque and optimization is on. Colours
//!   are baked into vertices and the batch is drawn in one call.
//! - **PerObject**: any translucent primitive (or optimization off). Each
//!   primitive keeps its own material and draw order.
//!
//! ## Usage
//!
//! ```rust
//! use config::ViewerConfig;
//! use eisen_ir::decode_object_code;
//! use eisen_mesh::build_scene;
//!
//! let code = decode_object_code(r##"{"objects": [
//!     {"type": "background", "color": "#112233"},
//!     {"type": "primitive", "name": "box", "color": "#ff0000"}
//! ]}"##).unwrap();
//!
//! let built = build_scene(code, &ViewerConfig::default()).unwrap();
//! assert_eq!(built.scene.background.to_hex(), 0x112233);
//! assert_eq!(built.report.created, 1);
//! ```

pub mod assemble;
pub mod bake;
pub mod batch;
pub mod error;
pub mod geometry;
pub mod material;
pub mod merge;
pub mod primitives;
pub mod scene;

pub use assemble::{build_scene, BuildReport, BuiltScene, SceneAssembler, SkippedCommand};
pub use bake::bake_vertex_colors;
pub use batch::{select_mode, BatchMode};
pub use error::BuildError;
pub use geometry::{AttributeSchema, Geometry, Topology};
pub use material::{build_material, Material, Side};
pub use merge::merge_geometries;
pub use primitives::{build_primitive, Primitive};
pub use scene::{three_point_lights, NodeKind, PointLight, RenderNode, Scene, SceneGroup};
