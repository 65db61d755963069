//! # Object Code Commands
//!
//! The ordered command list produced by the Eisen compiler. Each command is
//! either a background change or a primitive to draw.

use crate::color::Rgb;
use crate::error::{InvalidCommand, IrError};
use glam::{DMat4, DVec3};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// PRIMITIVE KIND
// =============================================================================

/// The closed set of primitive kinds the compiler can emit.
///
/// `Point`, `Mesh` and `Tube` are declared by the language but have no
/// geometry; see [`PrimitiveKind::is_supported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Box,
    Grid,
    Sphere,
    Line,
    Point,
    Mesh,
    Cylinder,
    Tube,
    Triangle,
    Squash,
}

impl PrimitiveKind {
    /// Every kind, in declaration order.
    pub const ALL: [PrimitiveKind; 10] = [
        PrimitiveKind::Box,
        PrimitiveKind::Grid,
        PrimitiveKind::Sphere,
        PrimitiveKind::Line,
        PrimitiveKind::Point,
        PrimitiveKind::Mesh,
        PrimitiveKind::Cylinder,
        PrimitiveKind::Tube,
        PrimitiveKind::Triangle,
        PrimitiveKind::Squash,
    ];

    /// Wire name used by the compiler.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Box => "box",
            PrimitiveKind::Grid => "grid",
            PrimitiveKind::Sphere => "sphere",
            PrimitiveKind::Line => "line",
            PrimitiveKind::Point => "point",
            PrimitiveKind::Mesh => "mesh",
            PrimitiveKind::Cylinder => "cylinder",
            PrimitiveKind::Tube => "tube",
            PrimitiveKind::Triangle => "triangle",
            PrimitiveKind::Squash => "squash",
        }
    }

    /// Returns false for kinds that are declared but have no geometry.
    pub fn is_supported(self) -> bool {
        !matches!(
            self,
            PrimitiveKind::Point | PrimitiveKind::Mesh | PrimitiveKind::Tube
        )
    }
}

impl FromStr for PrimitiveKind {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| IrError::UnknownKind { name: s.to_string() })
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

/// A primitive draw command.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveCommand {
    /// What to draw.
    pub kind: PrimitiveKind,
    /// 24-bit colour as emitted by the compiler, e.g. `#ff7733`.
    pub color_hex: String,
    /// Opacity in `[0, 1]`; anything below 1 forces per-object rendering.
    pub opacity: f64,
    /// Affine placement, baked into the vertices at build time.
    pub transform: DMat4,
    /// Ad-hoc triangle corners replacing the default triangle.
    pub explicit_coords: Option<[DVec3; 3]>,
}

impl PrimitiveCommand {
    /// Creates a fully opaque primitive with an identity transform.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eisen_ir::{PrimitiveCommand, PrimitiveKind};
    ///
    /// let cube = PrimitiveCommand::new(PrimitiveKind::Box, "#ffffff").with_opacity(0.5);
    /// assert_eq!(cube.opacity, 0.5);
    /// ```
    pub fn new(kind: PrimitiveKind, color_hex: impl Into<String>) -> Self {
        Self {
            kind,
            color_hex: color_hex.into(),
            opacity: 1.0,
            transform: DMat4::IDENTITY,
            explicit_coords: None,
        }
    }

    /// Sets the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the transform.
    pub fn with_transform(mut self, transform: DMat4) -> Self {
        self.transform = transform;
        self
    }

    /// Sets explicit triangle corners.
    pub fn with_coords(mut self, coords: [DVec3; 3]) -> Self {
        self.explicit_coords = Some(coords);
        self
    }

    /// Parses the colour string.
    pub fn color(&self) -> Result<Rgb, IrError> {
        Rgb::parse_hex(&self.color_hex)
    }

    /// True when the primitive needs alpha blending.
    #[inline]
    pub fn is_translucent(&self) -> bool {
        self.opacity != 1.0
    }

    /// Checks the colour and opacity, clamping an out-of-range opacity into
    /// `[0, 1]` with a warning.
    pub fn validate(&mut self) -> Result<(), IrError> {
        self.color()?;

        if !self.opacity.is_finite() {
            return Err(IrError::InvalidOpacity {
                value: self.opacity,
            });
        }

        if !(0.0..=1.0).contains(&self.opacity) {
            let clamped = self.opacity.clamp(0.0, 1.0);
            log::warn!(
                "{} opacity {} is outside [0, 1]; clamped to {}",
                self.kind,
                self.opacity,
                clamped
            );
            self.opacity = clamped;
        }

        Ok(())
    }
}

/// One entry of the object code.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectCommand {
    /// Replace the scene background.
    Background { color: Rgb },
    /// Draw a primitive.
    Primitive(PrimitiveCommand),
}

impl ObjectCommand {
    /// Returns the primitive payload, if any.
    pub fn as_primitive(&self) -> Option<&PrimitiveCommand> {
        match self {
            ObjectCommand::Primitive(primitive) => Some(primitive),
            ObjectCommand::Background { .. } => None,
        }
    }
}

impl From<PrimitiveCommand> for ObjectCommand {
    fn from(primitive: PrimitiveCommand) -> Self {
        ObjectCommand::Primitive(primitive)
    }
}

// =============================================================================
// OBJECT CODE
// =============================================================================

/// The ordered command list for one build.
///
/// Order matters: it is the draw order of per-object nodes and decides which
/// background command wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectCode {
    commands: Vec<ObjectCommand>,
}

impl ObjectCode {
    /// Creates object code from commands.
    pub fn new(commands: Vec<ObjectCommand>) -> Self {
        Self { commands }
    }

    /// Returns the commands in order.
    #[inline]
    pub fn commands(&self) -> &[ObjectCommand] {
        &self.commands
    }

    /// Returns the number of commands.
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if there are no commands.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates over primitive commands only.
    pub fn primitives(&self) -> impl Iterator<Item = &PrimitiveCommand> {
        self.commands.iter().filter_map(ObjectCommand::as_primitive)
    }

    /// Validates every primitive, stopping at the first invalid one.
    ///
    /// Opacity values outside `[0, 1]` are clamped in place.
    pub fn validate(&mut self) -> Result<(), InvalidCommand> {
        for (index, command) in self.commands.iter_mut().enumerate() {
            if let ObjectCommand::Primitive(primitive) = command {
                primitive
                    .validate()
                    .map_err(|reason| InvalidCommand::new(index, reason))?;
            }
        }
        Ok(())
    }
}

impl From<Vec<ObjectCommand>> for ObjectCode {
    fn from(commands: Vec<ObjectCommand>) -> Self {
        Self::new(commands)
    }
}

impl IntoIterator for ObjectCode {
    type Item = ObjectCommand;
    type IntoIter = std::vec::IntoIter<ObjectCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(kind.name().parse::<PrimitiveKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind() {
        assert!(matches!(
            "torus".parse::<PrimitiveKind>(),
            Err(IrError::UnknownKind { .. })
        ));
    }

    #[test]
    fn test_unsupported_kinds() {
        let unsupported: Vec<_> = PrimitiveKind::ALL
            .into_iter()
            .filter(|kind| !kind.is_supported())
            .collect();
        assert_eq!(
            unsupported,
            vec![PrimitiveKind::Point, PrimitiveKind::Mesh, PrimitiveKind::Tube]
        );
    }

    #[test]
    fn test_validate_clamps_opacity() {
        let mut primitive = PrimitiveCommand::new(PrimitiveKind::Box, "#ffffff").with_opacity(1.5);
        primitive.validate().unwrap();
        assert_eq!(primitive.opacity, 1.0);

        let mut primitive = PrimitiveCommand::new(PrimitiveKind::Box, "#ffffff").with_opacity(-0.2);
        primitive.validate().unwrap();
        assert_eq!(primitive.opacity, 0.0);
    }

    #[test]
    fn test_validate_rejects_nan_opacity() {
        let mut primitive =
            PrimitiveCommand::new(PrimitiveKind::Box, "#ffffff").with_opacity(f64::NAN);
        assert!(matches!(
            primitive.validate(),
            Err(IrError::InvalidOpacity { .. })
        ));
    }

    #[test]
    fn test_object_code_validate_reports_index() {
        let mut code = ObjectCode::new(vec![
            ObjectCommand::Background {
                color: Rgb::from_hex(0x000000),
            },
            PrimitiveCommand::new(PrimitiveKind::Box, "#ffffff").into(),
            PrimitiveCommand::new(PrimitiveKind::Sphere, "#zzzzzz").into(),
        ]);
        let err = code.validate().unwrap_err();
        assert_eq!(err.index, 2);
        assert!(matches!(err.reason, IrError::InvalidColor { .. }));
    }

    #[test]
    fn test_primitives_skips_background() {
        let code = ObjectCode::new(vec![
            ObjectCommand::Background { color: Rgb::WHITE },
            PrimitiveCommand::new(PrimitiveKind::Line, "#ffffff").into(),
        ]);
        assert_eq!(code.primitives().count(), 1);
    }
}
