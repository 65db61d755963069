//! # Frame Export
//!
//! Encodes a rendered [`FrameBuffer`] with the `image` crate. Where the bytes
//! go is up to the host.

use crate::error::ViewError;
use crate::framebuffer::FrameBuffer;
use image::{DynamicImage, RgbaImage};
use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
}

impl ImageFormat {
    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Gif => "gif",
        }
    }

    /// MIME type for data URLs.
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
        }
    }
}

impl From<ImageFormat> for image::ImageFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Gif => image::ImageFormat::Gif,
        }
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "gif" => Ok(ImageFormat::Gif),
            other => Err(format!("unsupported image format '{other}'")),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Encodes a frame. JPEG drops the alpha channel.
///
/// # Errors
///
/// [`ViewError::Encode`] if the encoder fails.
pub fn encode_frame(frame: &FrameBuffer, format: ImageFormat) -> Result<Vec<u8>, ViewError> {
    let rgba = RgbaImage::from_raw(frame.width(), frame.height(), frame.pixels().to_vec())
        .ok_or(ViewError::NoFrame)?;
    let image = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(rgba).to_rgb8()),
        ImageFormat::Png | ImageFormat::Gif => DynamicImage::ImageRgba8(rgba),
    };

    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, format.into())?;
    Ok(bytes.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eisen_ir::Rgb;

    fn frame() -> FrameBuffer {
        let mut frame = FrameBuffer::new(8, 4);
        frame.clear(Rgb::from_hex(0x336699));
        frame
    }

    #[test]
    fn test_png_signature() {
        let bytes = encode_frame(&frame(), ImageFormat::Png).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_jpeg_signature() {
        let bytes = encode_frame(&frame(), ImageFormat::Jpeg).unwrap();
        assert_eq!(&bytes[..2], [0xff, 0xd8]);
    }

    #[test]
    fn test_gif_signature() {
        let bytes = encode_frame(&frame(), ImageFormat::Gif).unwrap();
        assert_eq!(&bytes[..3], b"GIF");
    }

    #[test]
    fn test_png_decodes_to_same_pixels() {
        let bytes = encode_frame(&frame(), ImageFormat::Png).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.as_raw(), frame().pixels());
    }

    #[test]
    fn test_format_names() {
        assert_eq!("JPG".parse::<ImageFormat>(), Ok(ImageFormat::Jpeg));
        assert_eq!("jpeg".parse::<ImageFormat>(), Ok(ImageFormat::Jpeg));
        assert!("bmp".parse::<ImageFormat>().is_err());
        assert_eq!(ImageFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(ImageFormat::Gif.extension(), "gif");
    }
}
