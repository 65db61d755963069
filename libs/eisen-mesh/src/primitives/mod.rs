//! # Primitives
//!
//! Unit-scale geometry for every primitive kind. Kinds map to factory
//! functions through a lookup table; kinds without a factory come back as
//! [`Primitive::Unsupported`].

pub mod cube;
pub mod cylinder;
pub mod flat;
pub mod sphere;

pub use cube::create_cube;
pub use cylinder::{create_cylinder, create_unit_cylinder};
pub use flat::{create_line, create_triangle, create_triangle_from};
pub use sphere::{create_sphere, create_squash, create_unit_sphere};

use crate::geometry::Geometry;
use eisen_ir::{PrimitiveCommand, PrimitiveKind};

/// Builds the unit geometry of one kind.
pub type GeometryFactory = fn() -> Geometry;

/// Result of asking the factory for a kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Freshly built unit geometry.
    Built(Geometry),
    /// The kind is declared but has no geometry.
    Unsupported(PrimitiveKind),
}

impl Primitive {
    /// Returns the geometry, if the kind is supported.
    pub fn into_geometry(self) -> Option<Geometry> {
        match self {
            Primitive::Built(geometry) => Some(geometry),
            Primitive::Unsupported(_) => None,
        }
    }
}

/// Factory for each kind. `grid` shares the cube; only its material differs.
const FACTORIES: [(PrimitiveKind, Option<GeometryFactory>); 10] = [
    (PrimitiveKind::Box, Some(create_cube)),
    (PrimitiveKind::Grid, Some(create_cube)),
    (PrimitiveKind::Sphere, Some(create_unit_sphere)),
    (PrimitiveKind::Line, Some(create_line)),
    (PrimitiveKind::Point, None),
    (PrimitiveKind::Mesh, None),
    (PrimitiveKind::Cylinder, Some(create_unit_cylinder)),
    (PrimitiveKind::Tube, None),
    (PrimitiveKind::Triangle, Some(create_triangle)),
    (PrimitiveKind::Squash, Some(create_squash)),
];

/// Looks up the factory for a kind.
pub fn factory_for(kind: PrimitiveKind) -> Option<GeometryFactory> {
    FACTORIES
        .iter()
        .find(|(entry, _)| *entry == kind)
        .and_then(|(_, factory)| *factory)
}

/// Builds the unit geometry for a kind.
///
/// # Example
///
/// ```rust
/// use eisen_ir::PrimitiveKind;
/// use eisen_mesh::primitives::{build_primitive, Primitive};
///
/// assert!(matches!(build_primitive(PrimitiveKind::Box), Primitive::Built(_)));
/// assert_eq!(
///     build_primitive(PrimitiveKind::Tube),
///     Primitive::Unsupported(PrimitiveKind::Tube)
/// );
/// ```
pub fn build_primitive(kind: PrimitiveKind) -> Primitive {
    match factory_for(kind) {
        Some(factory) => Primitive::Built(factory()),
        None => Primitive::Unsupported(kind),
    }
}

/// Builds the unit geometry for a command, honouring explicit triangle
/// corners. The command's transform is not applied here.
pub fn build_for_command(command: &PrimitiveCommand) -> Primitive {
    match (command.kind, command.explicit_coords) {
        (PrimitiveKind::Triangle, Some(corners)) => Primitive::Built(create_triangle_from(corners)),
        (kind, Some(_)) => {
            log::debug!("ignoring explicit coordinates on {kind} primitive");
            build_primitive(kind)
        }
        (kind, None) => build_primitive(kind),
    }
}
