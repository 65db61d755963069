//! # Eisen IR
//!
//! Object code emitted by the external Eisen DSL compiler: an ordered list of
//! background and primitive commands.
//!
//! ## Architecture
//!
//! ```text
//! Eisen compiler (JSON) → eisen-ir (ObjectCode) → eisen-mesh (Scene)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use eisen_ir::{ObjectCode, ObjectCommand, PrimitiveCommand, PrimitiveKind, Rgb};
//!
//! let mut code = ObjectCode::new(vec![
//!     ObjectCommand::Background { color: Rgb::from_hex(0x112233) },
//!     PrimitiveCommand::new(PrimitiveKind::Box, "#ff7733").into(),
//! ]);
//! code.validate().unwrap();
//! assert_eq!(code.primitives().count(), 1);
//! ```

pub mod color;
pub mod command;
pub mod error;
pub mod wire;

pub use color::Rgb;
pub use command::{ObjectCode, ObjectCommand, PrimitiveCommand, PrimitiveKind};
pub use error::{InvalidCommand, IrError};
pub use wire::{decode_object_code, encode_object_code, DecodeError};
