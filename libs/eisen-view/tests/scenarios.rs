use config::ViewerConfig;
use eisen_mesh::{BatchMode, NodeKind};
use eisen_view::{ImageFormat, JsonCompiler, RenderContext, ViewError};
use glam::DVec3;

const IDENTITY: &str = r#"{"elements": [1,0,0,0, 0,1,0,0, 0,0,1,0, 0,0,0,1]}"#;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn object_code(objects: &[String]) -> String {
    format!(r#"{{"objects": [{}]}}"#, objects.join(","))
}

fn primitive(name: &str, color: &str, opacity: f64) -> String {
    format!(
        r#"{{"type": "primitive", "name": "{name}", "color": "{color}", "opacity": {opacity}, "matrix": {IDENTITY}}}"#
    )
}

fn context() -> RenderContext {
    init_logging();
    RenderContext::new(ViewerConfig::default(), 96, 72)
}

#[test]
fn opaque_box_and_sphere_render_as_one_node() {
    let mut context = context();
    let source = object_code(&[
        primitive("box", "#ff0000", 1.0),
        primitive("sphere", "#00ff00", 1.0),
    ]);

    let report = context.load_source(&source, &JsonCompiler).unwrap();
    assert_eq!(report.mode, BatchMode::Merged);
    assert_eq!(report.created, 2);
    assert_eq!(context.scene().unwrap().group.len(), 1);
}

#[test]
fn translucent_sphere_forces_per_object_nodes() {
    let mut context = context();
    let source = object_code(&[
        primitive("box", "#ff0000", 1.0),
        primitive("sphere", "#00ff00", 0.5),
    ]);

    let report = context.load_source(&source, &JsonCompiler).unwrap();
    assert_eq!(report.mode, BatchMode::PerObject);

    let nodes = context.scene().unwrap().group.nodes();
    assert_eq!(nodes.len(), 2);
    assert!(!nodes[0].material.blends());
    assert!(nodes[1].material.blends());
}

#[test]
fn background_command_colours_the_frame() {
    let mut context = context();
    let source = object_code(&[
        r##"{"type": "background", "color": "#112233"}"##.to_string(),
        primitive("box", "#ffffff", 1.0),
    ]);
    context.load_source(&source, &JsonCompiler).unwrap();
    assert_eq!(context.scene().unwrap().background.to_hex(), 0x112233);

    assert!(context.render_frame());
    let corner = context.frame().unwrap().pixel(0, 0).unwrap();
    assert_eq!(corner, [0x11, 0x22, 0x33, 0xff]);
}

#[test]
fn explicit_triangle_coordinates_are_kept_exactly() {
    let mut context = context();
    let source = object_code(&[format!(
        r##"{{"type": "primitive", "name": "triangle", "color": "#ffffff", "matrix": {IDENTITY},
             "coords": [[0,0,0],[1,0,0],[0,1,0]]}}"##
    )]);
    context.load_source(&source, &JsonCompiler).unwrap();

    let node = &context.scene().unwrap().group.nodes()[0];
    assert_eq!(
        node.geometry.positions(),
        &[DVec3::ZERO, DVec3::X, DVec3::Y]
    );
}

#[test]
fn lines_become_line_nodes() {
    let mut context = context();
    let source = object_code(&[primitive("line", "#ffffff", 1.0)]);
    context.load_source(&source, &JsonCompiler).unwrap();

    let node = &context.scene().unwrap().group.nodes()[0];
    assert_eq!(node.kind, NodeKind::Line);
}

#[test]
fn unsupported_primitives_are_reported_not_fatal() {
    let mut context = context();
    let source = object_code(&[
        primitive("tube", "#ffffff", 1.0),
        primitive("mesh", "#ffffff", 1.0),
        primitive("box", "#ffffff", 1.0),
    ]);

    let report = context.load_source(&source, &JsonCompiler).unwrap();
    assert_eq!(report.created, 1);
    assert_eq!(report.skipped.len(), 2);
}

#[test]
fn invalid_colour_names_the_command() {
    let mut context = context();
    let source = object_code(&[
        primitive("box", "#ffffff", 1.0),
        primitive("box", "#ff00", 1.0),
    ]);

    let err = context.load_source(&source, &JsonCompiler).unwrap_err();
    assert!(matches!(err, ViewError::Build(_)));
    assert!(err.to_string().contains("#1"), "{err}");
    assert!(context.scene().is_none());
}

#[test]
fn out_of_range_opacity_is_clamped() {
    let mut context = context();
    let source = object_code(&[primitive("box", "#ffffff", 1.5)]);

    let report = context.load_source(&source, &JsonCompiler).unwrap();
    assert_eq!(report.mode, BatchMode::Merged);
}

#[test]
fn render_then_export_every_format() {
    let mut context = context();
    let source = object_code(&[primitive("cylinder", "#3366ff", 1.0)]);
    context.load_source(&source, &JsonCompiler).unwrap();
    assert!(context.render_frame());

    for format in [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Gif] {
        let bytes = context.export_frame(format).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (96, 72), "{format}");
    }
}
