//! # Wire Format
//!
//! JSON shape emitted by the Eisen compiler:
//!
//! ```json
//! { "objects": [
//!     { "type": "background", "color": "#112233" },
//!     { "type": "primitive", "name": "box", "color": "#ff7733", "opacity": 1,
//!       "matrix": { "elements": [1,0,0,0, 0,1,0,0, 0,0,1,0, 0,0,0,1] },
//!       "coords": [[0,0,0],[1,0,0],[0,1,0]] }
//! ] }
//! ```
//!
//! Matrix elements are column-major. `opacity` defaults to 1, `matrix` to
//! identity, and `coords` is optional.

use crate::color::Rgb;
use crate::command::{ObjectCode, ObjectCommand, PrimitiveCommand, PrimitiveKind};
use crate::error::{InvalidCommand, IrError};
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// Top-level compiler output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireObjectCode {
    pub objects: Vec<WireObject>,
}

/// One compiler output entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WireObject {
    Background { color: String },
    Primitive(WirePrimitive),
}

/// Primitive entry as emitted by the compiler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WirePrimitive {
    pub name: String,
    pub color: String,
    #[serde(default = "full_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub matrix: WireMatrix,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<[[f64; 3]; 3]>,
}

/// 4x4 matrix in column-major order. Defaults to identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMatrix {
    pub elements: [f64; 16],
}

impl Default for WireMatrix {
    fn default() -> Self {
        Self {
            elements: DMat4::IDENTITY.to_cols_array(),
        }
    }
}

fn full_opacity() -> f64 {
    1.0
}

impl WireObject {
    fn into_command(self) -> Result<ObjectCommand, IrError> {
        match self {
            WireObject::Background { color } => Ok(ObjectCommand::Background {
                color: Rgb::parse_hex(&color)?,
            }),
            WireObject::Primitive(primitive) => {
                let kind: PrimitiveKind = primitive.name.parse()?;
                Ok(ObjectCommand::Primitive(PrimitiveCommand {
                    kind,
                    color_hex: primitive.color,
                    opacity: primitive.opacity,
                    transform: DMat4::from_cols_array(&primitive.matrix.elements),
                    explicit_coords: primitive
                        .coords
                        .map(|corners| corners.map(DVec3::from_array)),
                }))
            }
        }
    }
}

impl From<&ObjectCommand> for WireObject {
    fn from(command: &ObjectCommand) -> Self {
        match command {
            ObjectCommand::Background { color } => WireObject::Background {
                color: color.to_string(),
            },
            ObjectCommand::Primitive(primitive) => WireObject::Primitive(WirePrimitive {
                name: primitive.kind.name().to_string(),
                color: primitive.color_hex.clone(),
                opacity: primitive.opacity,
                matrix: WireMatrix {
                    elements: primitive.transform.to_cols_array(),
                },
                coords: primitive
                    .explicit_coords
                    .map(|corners| corners.map(|corner| corner.to_array())),
            }),
        }
    }
}

/// Error from [`decode_object_code`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The document is not valid JSON or has the wrong shape.
    #[error(transparent)]
    Malformed(#[from] IrError),
    /// An entry has an unknown kind or unparsable background colour.
    #[error(transparent)]
    InvalidCommand(#[from] InvalidCommand),
}

/// Decodes compiler JSON into [`ObjectCode`].
///
/// Primitive colours and opacities are kept as emitted; they are checked by
/// [`ObjectCode::validate`] when the scene is built.
///
/// # Example
///
/// ```rust
/// use eisen_ir::decode_object_code;
///
/// let code = decode_object_code(r##"{"objects": [{"type": "background", "color": "#000000"}]}"##).unwrap();
/// assert_eq!(code.len(), 1);
/// ```
pub fn decode_object_code(json: &str) -> Result<ObjectCode, DecodeError> {
    let wire: WireObjectCode = serde_json::from_str(json).map_err(IrError::from)?;

    let commands = wire
        .objects
        .into_iter()
        .enumerate()
        .map(|(index, object)| {
            object
                .into_command()
                .map_err(|reason| InvalidCommand::new(index, reason))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ObjectCode::new(commands))
}

/// Encodes [`ObjectCode`] back into compiler JSON.
pub fn encode_object_code(code: &ObjectCode) -> Result<String, IrError> {
    let wire = WireObjectCode {
        objects: code.commands().iter().map(WireObject::from).collect(),
    };
    Ok(serde_json::to_string(&wire)?)
}
