//! # Frame Loop
//!
//! Cooperative redraw cycle. The host calls [`FrameLoop::tick`] from its own
//! scheduler; each tick runs one frame and reports whether the loop wants to
//! be scheduled again. Cancelling simply stops the re-arming.

use crate::context::RenderContext;
use crate::raster::Rasterizer;

/// Re-arming per-frame task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLoop {
    armed: bool,
    frames_drawn: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    /// Creates an armed loop.
    pub fn new() -> Self {
        Self {
            armed: true,
            frames_drawn: 0,
        }
    }

    /// Runs one frame if armed. Returns whether the host should schedule
    /// another tick.
    pub fn tick<R: Rasterizer>(&mut self, context: &mut RenderContext<R>) -> bool {
        if !self.armed {
            return false;
        }
        if context.render_frame() {
            self.frames_drawn += 1;
        }
        self.armed
    }

    /// Stops re-arming. The current frame, if any, is not interrupted.
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    /// Frames actually drawn so far; gated frames are not counted.
    #[inline]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Ticks until cancelled or `max_ticks` is reached. Returns the number of
    /// ticks run.
    pub fn run<R: Rasterizer>(&mut self, context: &mut RenderContext<R>, max_ticks: usize) -> usize {
        let mut ticks = 0;
        while ticks < max_ticks && self.tick(context) {
            ticks += 1;
        }
        ticks
    }
}
