//! # IR Errors
//!
//! Error types for decoding and validating object code.

use thiserror::Error;

/// Errors raised while decoding or validating a single command.
#[derive(Debug, Error)]
pub enum IrError {
    /// Object code was not valid JSON or did not match the wire format.
    #[error("Malformed object code: {0}")]
    Json(#[from] serde_json::Error),

    /// Colour string is not a 24-bit RGB hex value.
    #[error("Invalid color '{value}': expected a 24-bit hex string such as #ff7733")]
    InvalidColor { value: String },

    /// Opacity is NaN or infinite.
    #[error("Invalid opacity {value}: must be a finite number in [0, 1]")]
    InvalidOpacity { value: f64 },

    /// Primitive name outside the closed kind set.
    #[error("Unknown primitive kind '{name}'")]
    UnknownKind { name: String },
}

impl IrError {
    /// Creates an invalid color error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }
}

/// A command that failed validation, identified by its position in the
/// object code.
#[derive(Debug, Error)]
#[error("Invalid command #{index}: {reason}")]
pub struct InvalidCommand {
    /// Zero-based position of the offending command.
    pub index: usize,
    /// Why the command was rejected.
    #[source]
    pub reason: IrError,
}

impl InvalidCommand {
    /// Wraps `reason` with the command position.
    pub fn new(index: usize, reason: IrError) -> Self {
        Self { index, reason }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_command_names_index() {
        let err = InvalidCommand::new(3, IrError::invalid_color("#12"));
        let message = err.to_string();
        assert!(message.contains("#3"));
        assert!(message.contains("#12"));
    }
}
