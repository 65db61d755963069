//! # Compiler Boundary
//!
//! The Eisen DSL compiler is external. [`Compiler`] is the seam a host plugs
//! it into; [`JsonCompiler`] accepts object code the compiler already emitted.

use eisen_ir::{decode_object_code, ObjectCode};

/// Turns source text into object code.
pub trait Compiler {
    /// Compiles `source`, returning a human-readable message on failure.
    fn compile(&self, source: &str) -> Result<ObjectCode, String>;
}

/// Reads pre-compiled object code in its JSON wire form.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCompiler;

impl Compiler for JsonCompiler {
    fn compile(&self, source: &str) -> Result<ObjectCode, String> {
        decode_object_code(source).map_err(|err| err.to_string())
    }
}

impl<F> Compiler for F
where
    F: Fn(&str) -> Result<ObjectCode, String>,
{
    fn compile(&self, source: &str) -> Result<ObjectCode, String> {
        self(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_compiler_decodes() {
        let code = JsonCompiler
            .compile(r##"{"objects": [{"type": "background", "color": "#000000"}]}"##)
            .unwrap();
        assert_eq!(code.len(), 1);
    }

    #[test]
    fn test_json_compiler_reports_malformed_input() {
        assert!(JsonCompiler.compile("set maxdepth 100").is_err());
    }

    #[test]
    fn test_closure_is_a_compiler() {
        let failing = |_: &str| -> Result<ObjectCode, String> { Err("syntax error".into()) };
        assert_eq!(failing.compile("box").unwrap_err(), "syntax error");
    }
}
