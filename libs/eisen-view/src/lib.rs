//! # Eisen View
//!
//! Hosts a built scene: the [`RenderContext`] owns the camera, current scene
//! and last frame, the [`FrameLoop`] drives the redraw cycle, and frames are
//! drawn by a [`Rasterizer`] (the CPU [`SoftwareRasterizer`] by default).
//!
//! ## Usage
//!
//! ```rust
//! use config::ViewerConfig;
//! use eisen_view::{ImageFormat, JsonCompiler, RenderContext};
//!
//! let source = r##"{"objects": [
//!     {"type": "primitive", "name": "box", "color": "#ff7733",
//!      "matrix": {"elements": [1,0,0,0, 0,1,0,0, 0,0,1,0, 0,0,0,1]}}
//! ]}"##;
//!
//! let mut context = RenderContext::new(ViewerConfig::default(), 64, 48);
//! context.load_source(source, &JsonCompiler).unwrap();
//! assert!(context.render_frame());
//!
//! let png = context.export_frame(ImageFormat::Png).unwrap();
//! assert!(!png.is_empty());
//! ```

pub mod camera;
pub mod compiler;
pub mod context;
pub mod error;
pub mod export;
pub mod frame_loop;
pub mod framebuffer;
pub mod raster;

pub use camera::Camera;
pub use compiler::{Compiler, JsonCompiler};
pub use context::RenderContext;
pub use error::ViewError;
pub use export::{encode_frame, ImageFormat};
pub use frame_loop::FrameLoop;
pub use framebuffer::FrameBuffer;
pub use raster::{Rasterizer, SoftwareRasterizer};
