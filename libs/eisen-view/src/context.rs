//! # Render Context
//!
//! Owns everything a viewer needs between frames: the configuration, the
//! camera, the current scene and the last rendered frame.
//!
//! ## Lifecycle
//!
//! ```text
//! new → load_source / build → render_frame* → export_frame
//!              ↑___________________|   (rebuild replaces the scene)
//! ```
//!
//! A failed compile or build leaves the previous scene in place.

use crate::camera::Camera;
use crate::compiler::Compiler;
use crate::error::ViewError;
use crate::export::{encode_frame, ImageFormat};
use crate::framebuffer::FrameBuffer;
use crate::raster::{Rasterizer, SoftwareRasterizer};
use config::constants::ROTATION_STEP;
use config::ViewerConfig;
use eisen_ir::ObjectCode;
use eisen_mesh::{build_scene, BuildReport, Scene};
use std::time::Instant;

/// Viewer state for one output surface.
#[derive(Debug)]
pub struct RenderContext<R: Rasterizer = SoftwareRasterizer> {
    config: ViewerConfig,
    camera: Camera,
    rasterizer: R,
    scene: Option<Scene>,
    report: Option<BuildReport>,
    frame: Option<FrameBuffer>,
    pointer_inside: bool,
}

impl RenderContext {
    /// Creates a context with the software rasterizer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::ViewerConfig;
    /// use eisen_view::RenderContext;
    ///
    /// let context = RenderContext::new(ViewerConfig::default(), 320, 240);
    /// assert!(context.scene().is_none());
    /// ```
    pub fn new(config: ViewerConfig, width: u32, height: u32) -> Self {
        Self::with_rasterizer(config, width, height, SoftwareRasterizer::new())
    }
}

impl<R: Rasterizer> RenderContext<R> {
    /// Creates a context drawing through `rasterizer`.
    pub fn with_rasterizer(config: ViewerConfig, width: u32, height: u32, rasterizer: R) -> Self {
        Self {
            config,
            camera: Camera::new(width, height),
            rasterizer,
            scene: None,
            report: None,
            frame: None,
            pointer_inside: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Replaces the configuration. Takes effect on the next build or frame.
    pub fn set_config(&mut self, config: ViewerConfig) {
        self.config = config;
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The current scene, if a build has succeeded.
    #[inline]
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Report of the last successful build.
    #[inline]
    pub fn report(&self) -> Option<&BuildReport> {
        self.report.as_ref()
    }

    /// The last rendered frame.
    #[inline]
    pub fn frame(&self) -> Option<&FrameBuffer> {
        self.frame.as_ref()
    }

    /// Compiles `source` and builds the result.
    ///
    /// A compiler failure is logged and returned; no build is attempted.
    ///
    /// # Errors
    ///
    /// [`ViewError::Compile`] or any error from [`Self::build`].
    pub fn load_source(
        &mut self,
        source: &str,
        compiler: &impl Compiler,
    ) -> Result<&BuildReport, ViewError> {
        let started = Instant::now();
        let code = compiler.compile(source).map_err(|message| {
            log::error!("Compile failed: {message}");
            ViewError::compile(message)
        })?;
        log::info!("Compile time: {}ms", started.elapsed().as_millis());

        self.build(code)
    }

    /// Builds a new scene, replacing the current one on success.
    ///
    /// A successful build discards the last frame, since it shows the old
    /// scene. In demo-embedding mode the new scene is rendered once
    /// immediately, without advancing the rotation.
    ///
    /// # Errors
    ///
    /// [`ViewError::Build`] if the object code is invalid or merging fails.
    pub fn build(&mut self, code: ObjectCode) -> Result<&BuildReport, ViewError> {
        let started = Instant::now();
        let built = build_scene(code, &self.config).map_err(|err| {
            log::error!("Build failed: {err}");
            ViewError::from(err)
        })?;

        self.scene = Some(built.scene);
        self.frame = None;
        if self.config.demo_embedding {
            self.draw();
        }
        log::info!("Render time: {}ms", started.elapsed().as_millis());

        Ok(self.report.insert(built.report))
    }

    /// Runs one frame of the redraw cycle. Returns whether a frame was drawn.
    ///
    /// - Demo embedding: draws only while the pointer is inside, advancing
    ///   the rotation on each drawn frame.
    /// - Otherwise: always draws, advancing the rotation when `animate` is on.
    pub fn render_frame(&mut self) -> bool {
        let rotate = if self.config.demo_embedding {
            if !self.pointer_inside {
                return false;
            }
            true
        } else {
            self.config.animate
        };

        let Some(scene) = self.scene.as_mut() else {
            return false;
        };
        if rotate {
            scene.group.rotate(ROTATION_STEP, ROTATION_STEP);
        }
        self.draw()
    }

    /// The pointer entered the output surface.
    pub fn pointer_enter(&mut self) {
        self.pointer_inside = true;
    }

    /// The pointer left the output surface.
    pub fn pointer_leave(&mut self) {
        self.pointer_inside = false;
    }

    /// Follows a surface resize. The last frame is discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
        self.frame = None;
    }

    /// Encodes the last rendered frame.
    ///
    /// # Errors
    ///
    /// - [`ViewError::NoFrame`] before the first render, or after a resize
    ///   or rebuild
    /// - [`ViewError::Encode`] if encoding fails
    pub fn export_frame(&self, format: ImageFormat) -> Result<Vec<u8>, ViewError> {
        let frame = self.frame.as_ref().ok_or(ViewError::NoFrame)?;
        encode_frame(frame, format)
    }

    fn draw(&mut self) -> bool {
        let Some(scene) = self.scene.as_ref() else {
            return false;
        };
        let (width, height) = self.camera.size();
        let mut frame = match self.frame.take() {
            Some(frame) if frame.width() == width && frame.height() == height => frame,
            _ => FrameBuffer::new(width, height),
        };
        self.rasterizer.render(scene, &self.camera, &mut frame);
        self.frame = Some(frame);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::JsonCompiler;
    use approx::assert_relative_eq;
    use eisen_ir::{ObjectCommand, PrimitiveCommand, PrimitiveKind, Rgb};

    fn one_box() -> ObjectCode {
        ObjectCode::new(vec![PrimitiveCommand::new(PrimitiveKind::Box, "#ff0000").into()])
    }

    fn demo_config() -> ViewerConfig {
        ViewerConfig {
            demo_embedding: true,
            ..ViewerConfig::default()
        }
    }

    #[test]
    fn test_no_frame_before_render() {
        let mut context = RenderContext::new(ViewerConfig::default(), 64, 48);
        context.build(one_box()).unwrap();
        assert!(matches!(
            context.export_frame(ImageFormat::Png),
            Err(ViewError::NoFrame)
        ));
        assert!(context.render_frame());
        assert!(context.export_frame(ImageFormat::Png).is_ok());
    }

    #[test]
    fn test_render_without_scene_draws_nothing() {
        let mut context = RenderContext::new(ViewerConfig::default(), 64, 48);
        assert!(!context.render_frame());
    }

    #[test]
    fn test_animate_rotates_each_frame() {
        let config = ViewerConfig {
            animate: true,
            ..ViewerConfig::default()
        };
        let mut context = RenderContext::new(config, 64, 48);
        context.build(one_box()).unwrap();
        context.render_frame();
        context.render_frame();

        let rotation = context.scene().unwrap().group.rotation;
        assert_relative_eq!(rotation.x, 2.0 * ROTATION_STEP);
        assert_relative_eq!(rotation.y, 2.0 * ROTATION_STEP);
    }

    #[test]
    fn test_static_view_does_not_rotate() {
        let mut context = RenderContext::new(ViewerConfig::default(), 64, 48);
        context.build(one_box()).unwrap();
        assert!(context.render_frame());
        assert_eq!(context.scene().unwrap().group.rotation.x, 0.0);
    }

    #[test]
    fn test_demo_mode_renders_once_after_build() {
        let mut context = RenderContext::new(demo_config(), 64, 48);
        context.build(one_box()).unwrap();
        assert!(context.frame().is_some());
        assert_eq!(context.scene().unwrap().group.rotation.x, 0.0);
    }

    #[test]
    fn test_demo_mode_renders_only_while_hovered() {
        let mut context = RenderContext::new(demo_config(), 64, 48);
        context.build(one_box()).unwrap();
        assert!(!context.render_frame());

        context.pointer_enter();
        assert!(context.render_frame());
        assert_relative_eq!(context.scene().unwrap().group.rotation.y, ROTATION_STEP);

        context.pointer_leave();
        assert!(!context.render_frame());
        assert_relative_eq!(context.scene().unwrap().group.rotation.y, ROTATION_STEP);
    }

    #[test]
    fn test_compile_failure_keeps_previous_scene() {
        let mut context = RenderContext::new(ViewerConfig::default(), 64, 48);
        context.build(one_box()).unwrap();

        let result = context.load_source("not json", &JsonCompiler);
        assert!(matches!(result, Err(ViewError::Compile { .. })));
        assert_eq!(context.scene().unwrap().group.len(), 1);
    }

    #[test]
    fn test_build_failure_keeps_previous_scene() {
        let mut context = RenderContext::new(ViewerConfig::default(), 64, 48);
        context.build(one_box()).unwrap();

        let bad = ObjectCode::new(vec![PrimitiveCommand::new(PrimitiveKind::Box, "#zzzzzz").into()]);
        assert!(matches!(context.build(bad), Err(ViewError::Build(_))));
        assert!(context.scene().is_some());
    }

    fn background(hex: u32) -> ObjectCode {
        ObjectCode::new(vec![ObjectCommand::Background {
            color: Rgb::from_hex(hex),
        }])
    }

    fn exported_corner(context: &RenderContext) -> [u8; 4] {
        let bytes = context.export_frame(ImageFormat::Png).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        decoded.get_pixel(0, 0).0
    }

    #[test]
    fn test_rebuild_discards_stale_frame() {
        let mut context = RenderContext::new(ViewerConfig::default(), 64, 48);
        context.build(background(0x112233)).unwrap();
        assert!(context.render_frame());
        assert_eq!(exported_corner(&context), [0x11, 0x22, 0x33, 0xff]);

        context.build(background(0xaabbcc)).unwrap();
        assert!(matches!(
            context.export_frame(ImageFormat::Png),
            Err(ViewError::NoFrame)
        ));

        assert!(context.render_frame());
        assert_eq!(exported_corner(&context), [0xaa, 0xbb, 0xcc, 0xff]);
    }

    #[test]
    fn test_demo_rebuild_exports_new_scene() {
        let mut context = RenderContext::new(demo_config(), 64, 48);
        context.build(background(0x112233)).unwrap();
        context.build(background(0xaabbcc)).unwrap();
        assert_eq!(exported_corner(&context), [0xaa, 0xbb, 0xcc, 0xff]);
    }

    #[test]
    fn test_failed_rebuild_keeps_frame() {
        let mut context = RenderContext::new(ViewerConfig::default(), 64, 48);
        context.build(background(0x112233)).unwrap();
        context.render_frame();

        let bad = ObjectCode::new(vec![PrimitiveCommand::new(PrimitiveKind::Box, "#zzzzzz").into()]);
        assert!(context.build(bad).is_err());
        assert_eq!(exported_corner(&context), [0x11, 0x22, 0x33, 0xff]);
    }

    #[test]
    fn test_resize_discards_frame() {
        let mut context = RenderContext::new(ViewerConfig::default(), 64, 48);
        context.build(one_box()).unwrap();
        context.render_frame();
        context.resize(32, 32);
        assert!(context.frame().is_none());

        context.render_frame();
        let frame = context.frame().unwrap();
        assert_eq!((frame.width(), frame.height()), (32, 32));
    }
}
