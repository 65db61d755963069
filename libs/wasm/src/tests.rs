//! Tests for the WASM-facing build helpers.

use super::*;
use config::constants::{MERGED_EMISSIVE, VERTEX_COLOR_SENTINEL};

const IDENTITY: &str = r#"{"elements": [1,0,0,0, 0,1,0,0, 0,0,1,0, 0,0,0,1]}"#;

fn primitive(name: &str, color: &str, opacity: f64) -> String {
    format!(
        r#"{{"type": "primitive", "name": "{name}", "color": "{color}", "opacity": {opacity}, "matrix": {IDENTITY}}}"#
    )
}

fn object_code(objects: &[String]) -> String {
    format!(r#"{{"objects": [{}]}}"#, objects.join(","))
}

/// An opaque scene comes back as one merged, vertex-coloured node.
#[test]
fn opaque_scene_builds_single_merged_node() {
    let json = object_code(&[primitive("box", "#ff0000", 1.0), primitive("sphere", "#00ff00", 1.0)]);
    let scene = build_scene_internal(&json, &ViewerConfig::default()).expect("build succeeds");

    assert!(scene.merged());
    assert_eq!(scene.created(), 2);
    assert_eq!(scene.node_count(), 1);

    let node = &scene.nodes()[0];
    assert!(node.vertex_colors());
    assert!(node.double_sided());
    assert_eq!(node.emissive(), MERGED_EMISSIVE);
    assert_eq!(node.position_data().len(), node.vertex_count() as usize * 3);

    let colors = node.color_data().expect("merged node carries colours");
    assert_eq!(colors.len(), node.vertex_count() as usize * 4);
    assert_eq!(colors[3], VERTEX_COLOR_SENTINEL);
}

/// A translucent primitive turns every primitive into its own node.
#[test]
fn translucent_scene_builds_node_per_primitive() {
    let json = object_code(&[primitive("box", "#ff0000", 1.0), primitive("line", "#00ff00", 0.5)]);
    let scene = build_scene_internal(&json, &ViewerConfig::default()).expect("build succeeds");

    assert!(!scene.merged());
    assert_eq!(scene.node_count(), 2);
    assert!(!scene.nodes()[0].is_line());
    assert!(scene.nodes()[1].is_line());
    assert_eq!(scene.nodes()[1].opacity(), 0.5);
    assert!(scene.nodes()[1].color_data().is_none());
}

/// Config JSON keeps defaults for missing fields.
#[test]
fn config_json_overrides_only_given_fields() {
    let config = parse_config(r#"{"wireframe": true}"#).expect("valid config");
    assert!(config.optimize);
    assert!(config.wireframe);

    let json = object_code(&[primitive("box", "#ffffff", 1.0)]);
    let scene = build_scene_internal(&json, &config).expect("build succeeds");
    assert!(scene.nodes()[0].wireframe());
}

/// Malformed JSON and invalid commands surface explicit errors.
#[test]
fn invalid_input_is_rejected() {
    let err = build_scene_internal("{", &ViewerConfig::default()).unwrap_err();
    assert!(matches!(err, SceneError::Decode(_)));

    let json = object_code(&[primitive("box", "#nothex", 1.0)]);
    let err = build_scene_internal(&json, &ViewerConfig::default()).unwrap_err();
    assert!(matches!(err, SceneError::Build(_)));
    assert!(!err.to_string().is_empty());

    assert!(matches!(parse_config("[]"), Err(SceneError::Config(_))));
}

/// Unsupported kinds are counted but produce no node.
#[test]
fn unsupported_kinds_are_counted() {
    let json = object_code(&[primitive("point", "#ffffff", 1.0)]);
    let scene = build_scene_internal(&json, &ViewerConfig::default()).expect("build succeeds");
    assert_eq!(scene.skipped(), 1);
    assert_eq!(scene.node_count(), 0);
}
