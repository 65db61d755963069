//! Renders compiled Eisen object code to an image file.
//!
//! ```bash
//! eisen-render scene.json -o scene.png --frames 60 --animate
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgAction, Command};
use config::constants::DEFAULT_SURFACE_SIZE;
use config::ViewerConfig;
use eisen_view::{FrameLoop, ImageFormat, JsonCompiler, RenderContext};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT: &str = "eisen.png";

fn cli() -> Command {
    Command::new("eisen-render")
        .about("Builds a scene from Eisen object code and writes a rendered frame")
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .help("Object-code JSON emitted by the Eisen compiler")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Image to write; the extension picks the format")
                .default_value(DEFAULT_OUTPUT),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("png|jpg|gif")
                .help("Override the format implied by the output extension"),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_name("PIXELS")
                .help("Frame width [default: 800]")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_name("PIXELS")
                .help("Frame height [default: 600]")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("frames")
                .short('n')
                .long("frames")
                .value_name("COUNT")
                .help("Frames to run before exporting")
                .value_parser(clap::value_parser!(usize))
                .default_value("1"),
        )
        .arg(
            Arg::new("no-optimize")
                .long("no-optimize")
                .help("Never merge geometry into a single draw call")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("wireframe")
                .long("wireframe")
                .help("Draw every primitive as wireframe")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("animate")
                .long("animate")
                .help("Rotate the scene on every frame")
                .action(ArgAction::SetTrue),
        )
}

fn output_format(path: &Path, explicit: Option<&String>) -> Result<ImageFormat> {
    let name = match explicit {
        Some(name) => name.as_str(),
        None => path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| anyhow!("cannot infer image format from {}", path.display()))?,
    };
    name.parse::<ImageFormat>().map_err(|err| anyhow!(err))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli().get_matches();
    let input = matches
        .get_one::<String>("input")
        .map(PathBuf::from)
        .context("missing input file")?;
    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .context("missing output file")?;
    let format = output_format(&output, matches.get_one::<String>("format"))?;
    let width = matches.get_one::<u32>("width").copied().unwrap_or(DEFAULT_SURFACE_SIZE.0);
    let height = matches.get_one::<u32>("height").copied().unwrap_or(DEFAULT_SURFACE_SIZE.1);
    let frames = matches.get_one::<usize>("frames").copied().unwrap_or(1).max(1);

    let config = ViewerConfig {
        optimize: !matches.get_flag("no-optimize"),
        wireframe: matches.get_flag("wireframe"),
        demo_embedding: false,
        animate: matches.get_flag("animate"),
    };

    let source = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let mut context = RenderContext::new(config, width, height);
    let report = context
        .load_source(&source, &JsonCompiler)
        .with_context(|| format!("failed to build {}", input.display()))?;
    log::info!(
        "{} primitives in {} mode, {} skipped",
        report.created,
        report.mode,
        report.skipped.len()
    );
    if let Some(scene) = context.scene() {
        log::debug!("{} vertices in {} nodes", scene.vertex_count(), scene.group.len());
    }

    let mut frame_loop = FrameLoop::new();
    frame_loop.run(&mut context, frames);
    frame_loop.cancel();

    let bytes = context
        .export_frame(format)
        .context("failed to export frame")?;
    fs::write(&output, bytes).with_context(|| format!("failed to write {}", output.display()))?;
    log::info!(
        "Wrote {} as {} ({} frames)",
        output.display(),
        format.mime_type(),
        frame_loop.frames_drawn()
    );

    Ok(())
}
