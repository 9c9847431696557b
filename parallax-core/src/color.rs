//! Color model
//!
//! Colors are kept at 8 bits per channel while compositing and only
//! quantized to the panel's 16-bit RGB565 format when written to a frame
//! buffer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 8-bit-per-channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure black
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `factor`
    ///
    /// Each channel is multiplied and truncated toward zero. The factor is
    /// expected to lie in `[0, 1]`; it is not clamped, so supplying a sane
    /// value is the caller's job. Products above 255 saturate.
    pub fn darken(self, factor: f32) -> Self {
        Self {
            r: (self.r as f32 * factor) as u8,
            g: (self.g as f32 * factor) as u8,
            b: (self.b as f32 * factor) as u8,
        }
    }

    /// Linear interpolation `self * (1 - t) + other * t`
    ///
    /// `t` is clamped to `[0, 1]`, so `t = 0` yields `self` and `t = 1`
    /// yields `other` exactly.
    pub fn blend(self, other: Self, t: f32) -> Self {
        let t = if t < 0.0 {
            0.0
        } else if t > 1.0 {
            1.0
        } else {
            t
        };
        let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t) as u8;

        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Pack into RGB565 (`rrrrrggg gggbbbbb`)
    ///
    /// The low bits of every channel are dropped, so this is lossy.
    pub const fn encode16(self) -> u16 {
        ((self.r as u16 >> 3) << 11) | ((self.g as u16 >> 2) << 5) | (self.b as u16 >> 3)
    }
}

/// Built-in palette of the landscape scene
pub mod palette {
    use super::Color;

    pub const SKY: Color = Color::new(138, 245, 255);
    pub const SUN: Color = Color::new(255, 255, 0);
    pub const TREE_BARK: Color = Color::new(148, 108, 22);
    pub const GRASS: Color = Color::new(42, 250, 0);
    pub const WATER: Color = Color::new(0, 255, 255);
    pub const MOUNTAIN: Color = Color::new(97, 97, 96);
    pub const TREE_LEAF: Color = Color::new(1, 97, 15);
}
