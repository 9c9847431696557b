//! Conversions between renderer pixels and `Rgb565`

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
use parallax_core::Color;

/// Convert a packed frame buffer pixel
#[inline]
pub fn to_rgb565(pixel: u16) -> Rgb565 {
    Rgb565::from(RawU16::new(pixel))
}

/// Pack an `Rgb565` back into a frame buffer pixel
#[inline]
pub fn from_rgb565(color: Rgb565) -> u16 {
    color.into_storage()
}

/// Quantize an 8-bit color the same way the frame buffer does
pub fn rgb565(color: Color) -> Rgb565 {
    Rgb565::new(color.r >> 3, color.g >> 2, color.b >> 3)
}
