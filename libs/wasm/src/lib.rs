//! WASM-facing entry points for the Eisen scene builder.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The JS host keeps its own WebGL renderer; Rust builds and
//! batches the scene and hands back per-node buffers. Native tests use
//! `build_scene_internal` to avoid depending on a JS host.
//!
//! ```
//! use config::ViewerConfig;
//!
//! let json = r##"{"objects": [{"type": "primitive", "name": "box", "color": "#ff0000"}]}"##;
//! let scene = eisen_wasm::build_scene_internal(json, &ViewerConfig::default()).unwrap();
//! assert_eq!(scene.node_count(), 1);
//! ```

use config::ViewerConfig;
use eisen_ir::{decode_object_code, DecodeError};
use eisen_mesh::{build_scene as build_scene_graph, BatchMode, BuildError};
use thiserror::Error;
use wasm_bindgen::prelude::*;

mod node_handle;

pub use node_handle::NodeHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "eisen-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Why a scene could not be built.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The object code could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The object code decoded but the build failed.
    #[error(transparent)]
    Build(#[from] BuildError),
    /// The viewer configuration JSON is malformed.
    #[error("Invalid viewer config: {0}")]
    Config(#[from] serde_json::Error),
}

/// A built scene, flattened for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct SceneHandle {
    background: u32,
    merged: bool,
    created: u32,
    skipped: u32,
    nodes: Vec<NodeHandle>,
}

#[wasm_bindgen]
impl SceneHandle {
    /// Background colour as `0xRRGGBB`.
    #[wasm_bindgen(getter)]
    pub fn background(&self) -> u32 {
        self.background
    }

    /// True when the scene was batched into merged draw calls.
    #[wasm_bindgen(getter)]
    pub fn merged(&self) -> bool {
        self.merged
    }

    /// Primitives that produced geometry.
    #[wasm_bindgen(getter)]
    pub fn created(&self) -> u32 {
        self.created
    }

    /// Primitives skipped as unsupported.
    #[wasm_bindgen(getter)]
    pub fn skipped(&self) -> u32 {
        self.skipped
    }

    /// Number of render nodes.
    #[wasm_bindgen(getter)]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns a node by draw order.
    pub fn node(&self, index: usize) -> Option<NodeHandle> {
        self.nodes.get(index).cloned()
    }
}

impl SceneHandle {
    /// Nodes in draw order.
    pub fn nodes(&self) -> &[NodeHandle] {
        &self.nodes
    }
}

fn to_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Builds a scene from compiler JSON.
///
/// This is the primary entry point used from JavaScript; demo-embedding and
/// animation are host concerns and do not affect the build.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when decoding or building fails.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const scene = build_scene(JSON.stringify(objectCode), true, false);
/// // renderer.setClearColor(scene.background);
/// ```
#[wasm_bindgen]
pub fn build_scene(json: &str, optimize: bool, wireframe: bool) -> Result<SceneHandle, JsValue> {
    let config = ViewerConfig {
        optimize,
        wireframe,
        ..ViewerConfig::default()
    };
    build_scene_internal(json, &config).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Builds a scene with the viewer configuration given as JSON, e.g.
/// `{"optimize": false, "wireframe": true}`. Missing fields keep their
/// defaults.
///
/// # Errors
/// Returns a JavaScript error value when the config, decoding or the build
/// fails.
#[wasm_bindgen]
pub fn build_scene_with_config(json: &str, config_json: &str) -> Result<SceneHandle, JsValue> {
    parse_config(config_json)
        .and_then(|config| build_scene_internal(json, &config))
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Parses a viewer configuration from JSON.
pub fn parse_config(config_json: &str) -> Result<ViewerConfig, SceneError> {
    Ok(serde_json::from_str(config_json)?)
}

/// Host-only helper that decodes and builds a scene.
///
/// # Examples
/// ```
/// use config::ViewerConfig;
///
/// let json = r##"{"objects": [{"type": "background", "color": "#112233"}]}"##;
/// let scene = eisen_wasm::build_scene_internal(json, &ViewerConfig::default()).unwrap();
/// assert_eq!(scene.background(), 0x112233);
/// ```
pub fn build_scene_internal(json: &str, config: &ViewerConfig) -> Result<SceneHandle, SceneError> {
    let code = decode_object_code(json).map_err(|err| {
        log::error!("Compile failed: {err}");
        err
    })?;
    let built = build_scene_graph(code, config)?;

    Ok(SceneHandle {
        background: built.scene.background.to_hex(),
        merged: built.report.mode == BatchMode::Merged,
        created: to_u32(built.report.created),
        skipped: to_u32(built.report.skipped.len()),
        nodes: built
            .scene
            .group
            .nodes()
            .iter()
            .map(NodeHandle::from_node)
            .collect(),
    })
}

#[cfg(test)]
mod tests;
