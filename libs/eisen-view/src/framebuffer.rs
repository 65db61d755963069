//! # Frame Buffer
//!
//! RGBA8 colour target, row-major from the top-left pixel.

use eisen_ir::Rgb;

/// An RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    /// Creates a transparent black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Fills every pixel with an opaque colour.
    pub fn clear(&mut self, color: Rgb) {
        let [r, g, b] = color.to_rgb8();
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[r, g, b, 255]);
        }
    }

    /// Reads one pixel, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let offset = self.offset(x, y)?;
        let mut pixel = [0; 4];
        pixel.copy_from_slice(&self.pixels[offset..offset + 4]);
        Some(pixel)
    }

    /// Blends `color` (linear `[0, 1]` channels) over the pixel with `alpha`.
    /// Writes outside the buffer are dropped.
    pub fn blend(&mut self, x: u32, y: u32, color: [f64; 3], alpha: f64) {
        let Some(offset) = self.offset(x, y) else {
            return;
        };
        let alpha = alpha.clamp(0.0, 1.0);
        let dst = &mut self.pixels[offset..offset + 4];
        for (channel, src) in dst.iter_mut().zip(color) {
            let under = f64::from(*channel) / 255.0;
            let mixed = src.clamp(0.0, 1.0) * alpha + under * (1.0 - alpha);
            *channel = (mixed * 255.0).round() as u8;
        }
        dst[3] = 255;
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize * self.width as usize + x as usize) * 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut frame = FrameBuffer::new(3, 2);
        frame.clear(Rgb::from_hex(0x112233));
        assert!(frame
            .pixels()
            .chunks_exact(4)
            .all(|p| p == [0x11, 0x22, 0x33, 0xff]));
    }

    #[test]
    fn test_opaque_blend_replaces() {
        let mut frame = FrameBuffer::new(1, 1);
        frame.clear(Rgb::from_hex(0x000000));
        frame.blend(0, 0, [1.0, 0.0, 0.0], 1.0);
        assert_eq!(frame.pixel(0, 0), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_half_blend_mixes() {
        let mut frame = FrameBuffer::new(1, 1);
        frame.clear(Rgb::from_hex(0x000000));
        frame.blend(0, 0, [1.0, 1.0, 1.0], 0.5);
        assert_eq!(frame.pixel(0, 0), Some([128, 128, 128, 255]));
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut frame = FrameBuffer::new(2, 2);
        frame.blend(5, 5, [1.0, 1.0, 1.0], 1.0);
        assert_eq!(frame.pixel(5, 5), None);
    }
}
