//! # Colour
//!
//! Linear RGB colour with components in `[0, 1]`, parsed from the 24-bit hex
//! strings the compiler emits.

use crate::error::IrError;
use std::fmt;
use std::str::FromStr;

/// An RGB colour with `f32` components in `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use eisen_ir::Rgb;
///
/// let color: Rgb = "#ff8000".parse().unwrap();
/// assert_eq!(color.to_hex(), 0xff8000);
/// assert_eq!(color.r, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Rgb {
    /// Pure white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a colour from channel values.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a colour from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Parses a hex string with an optional `#` or `0x` prefix.
    ///
    /// Exactly six hex digits are required; anything else is rejected rather
    /// than producing a partial colour.
    pub fn parse_hex(value: &str) -> Result<Self, IrError> {
        let trimmed = value.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IrError::invalid_color(value));
        }

        u32::from_str_radix(digits, 16)
            .map(Self::from_hex)
            .map_err(|_| IrError::invalid_color(value))
    }

    /// Packs the colour back into `0xRRGGBB`.
    pub fn to_hex(self) -> u32 {
        let [r, g, b] = self.to_rgb8();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Quantizes the colour to 8-bit channels.
    pub fn to_rgb8(self) -> [u8; 3] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    /// Returns the channels as an array.
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Rgb {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}
