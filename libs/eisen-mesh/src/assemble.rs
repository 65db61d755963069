//! # Scene Assembly
//!
//! Turns validated object code into a [`Scene`].
//!
//! ## Pipeline
//!
//! ```text
//! ObjectCode → validate → select_mode → per primitive:
//!     factory → transform → (bake | material + node)
//! → merge batches (merged mode) → Scene
//! ```
//!
//! Background commands replace the background as they are reached, so the
//! last one wins. In merged mode the baked geometries are grouped by topology
//! and each group becomes a single node under the shared material.

use crate::bake::bake_vertex_colors;
use crate::batch::{select_mode, BatchMode};
use crate::error::BuildError;
use crate::geometry::{Geometry, Topology};
use crate::material::{build_material, Material};
use crate::merge::merge_geometries;
use crate::primitives::{build_for_command, Primitive};
use crate::scene::{RenderNode, Scene};
use config::ViewerConfig;
use eisen_ir::{InvalidCommand, ObjectCode, ObjectCommand, PrimitiveCommand, PrimitiveKind};

/// A primitive that produced no geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedCommand {
    /// Position of the command in the object code.
    pub index: usize,
    pub kind: PrimitiveKind,
}

/// Summary of one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub mode: BatchMode,
    /// Primitives that produced geometry, in either mode.
    pub created: usize,
    pub skipped: Vec<SkippedCommand>,
}

/// A finished build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltScene {
    pub scene: Scene,
    pub report: BuildReport,
}

/// Accumulates nodes or baked batches while commands are applied in order.
#[derive(Debug)]
pub struct SceneAssembler {
    mode: BatchMode,
    wireframe: bool,
    scene: Scene,
    triangles: Vec<Geometry>,
    lines: Vec<Geometry>,
    report: BuildReport,
}

impl SceneAssembler {
    /// Creates an assembler for an already chosen mode.
    pub fn new(mode: BatchMode, wireframe: bool) -> Self {
        Self {
            mode,
            wireframe,
            scene: Scene::new(),
            triangles: Vec::new(),
            lines: Vec::new(),
            report: BuildReport {
                mode,
                created: 0,
                skipped: Vec::new(),
            },
        }
    }

    /// Applies one command.
    ///
    /// # Errors
    ///
    /// [`BuildError::InvalidCommand`] if the primitive's colour does not parse.
    pub fn apply(&mut self, index: usize, command: ObjectCommand) -> Result<(), BuildError> {
        match command {
            ObjectCommand::Background { color } => {
                self.scene.background = color;
                Ok(())
            }
            ObjectCommand::Primitive(primitive) => self.add_primitive(index, &primitive),
        }
    }

    fn add_primitive(&mut self, index: usize, primitive: &PrimitiveCommand) -> Result<(), BuildError> {
        let mut geometry = match build_for_command(primitive) {
            Primitive::Built(geometry) => geometry,
            Primitive::Unsupported(kind) => {
                log::warn!("Skipping unsupported primitive '{kind}' (command #{index})");
                self.report.skipped.push(SkippedCommand { index, kind });
                return Ok(());
            }
        };

        geometry.apply_matrix(&primitive.transform);

        match self.mode {
            BatchMode::Merged => {
                let color = primitive
                    .color()
                    .map_err(|reason| InvalidCommand::new(index, reason))?;
                bake_vertex_colors(&mut geometry, color);
                match geometry.topology() {
                    Topology::Triangles => self.triangles.push(geometry),
                    Topology::Lines => self.lines.push(geometry),
                }
            }
            BatchMode::PerObject => {
                let material = build_material(primitive, self.wireframe)
                    .map_err(|reason| InvalidCommand::new(index, reason))?;
                self.scene.group.add(RenderNode::new(geometry, material));
            }
        }

        self.report.created += 1;
        Ok(())
    }

    /// Merges any pending batches and returns the scene.
    ///
    /// In merged mode triangles and lines cannot share a draw call, so a
    /// scene with line primitives gets two nodes: one mesh holding every
    /// triangle, then one line node. Without lines it is a single node.
    /// Empty batches produce no node.
    ///
    /// # Errors
    ///
    /// [`BuildError::SchemaMismatch`] if a batch cannot be merged.
    pub fn finish(mut self) -> Result<BuiltScene, BuildError> {
        for batch in [
            std::mem::take(&mut self.triangles),
            std::mem::take(&mut self.lines),
        ] {
            if batch.is_empty() {
                continue;
            }
            let merged = merge_geometries(batch)?;
            let material = Material::shared_vertex_colored(self.wireframe);
            self.scene.group.add(RenderNode::new(merged, material));
        }

        log::info!(
            "Build done: {} objects ({} mode)",
            self.report.created,
            self.mode
        );

        Ok(BuiltScene {
            scene: self.scene,
            report: self.report,
        })
    }
}

/// Builds a scene from object code.
///
/// The object code is validated first, so no partial scene is ever produced
/// for an invalid command. Commands are applied in order.
///
/// # Errors
///
/// - [`BuildError::InvalidCommand`] for a bad colour or non-finite opacity
/// - [`BuildError::SchemaMismatch`] if merging fails
///
/// # Example
///
/// ```rust
/// use config::ViewerConfig;
/// use eisen_ir::{ObjectCode, PrimitiveCommand, PrimitiveKind};
/// use eisen_mesh::{build_scene, BatchMode};
///
/// let code = ObjectCode::new(vec![
///     PrimitiveCommand::new(PrimitiveKind::Box, "#ff0000").into(),
///     PrimitiveCommand::new(PrimitiveKind::Sphere, "#00ff00").into(),
/// ]);
/// let built = build_scene(code, &ViewerConfig::default()).unwrap();
/// assert_eq!(built.report.mode, BatchMode::Merged);
/// assert_eq!(built.scene.group.len(), 1);
/// ```
pub fn build_scene(mut code: ObjectCode, config: &ViewerConfig) -> Result<BuiltScene, BuildError> {
    code.validate()?;

    let mode = select_mode(code.commands(), config.optimize);
    if config.optimize && mode == BatchMode::PerObject {
        log::warn!(
            "Translucent objects disable merging; {} primitives will be drawn individually",
            code.primitives().count()
        );
    }

    let mut assembler = SceneAssembler::new(mode, config.wireframe);
    for (index, command) in code.into_iter().enumerate() {
        assembler.apply(index, command)?;
    }
    assembler.finish()
}
