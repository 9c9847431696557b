//! Fixed-size RGB565 frame buffer

use core::fmt;

use super::diff::Region;
use crate::color::Color;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Wrap a horizontal coordinate into `0..width`
///
/// Every drawing stage that can produce off-screen columns goes through
/// this, so pixels leaving the left edge reappear on the right.
/// `width` must be non-zero.
#[inline]
pub fn wrap_x(x: i32, width: usize) -> usize {
    // i64 keeps the negation of i32::MIN and large widths in range
    (x as i64).rem_euclid(width as i64) as usize
}

/// Row-major grid of RGB565 pixels
///
/// Rows are stored contiguously, so any run of rows from `y` to the bottom
/// edge is a single slice.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer<const W: usize = SCREEN_WIDTH, const H: usize = SCREEN_HEIGHT> {
    rows: [[u16; W]; H],
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    /// Buffer with every pixel set to `pixel`
    pub const fn new(pixel: u16) -> Self {
        Self {
            rows: [[pixel; W]; H],
        }
    }

    /// Buffer cleared to `color`
    pub const fn filled(color: Color) -> Self {
        Self::new(color.encode16())
    }

    /// Clear every pixel to `color`
    pub fn fill(&mut self, color: Color) {
        let pixel = color.encode16();
        for row in &mut self.rows {
            row.fill(pixel);
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> usize {
        W
    }

    /// Height in pixels
    pub const fn height(&self) -> usize {
        H
    }

    /// Pixel at `(x, y)`, or `None` outside the frame
    pub fn get(&self, x: usize, y: usize) -> Option<u16> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Write an in-bounds pixel
    ///
    /// Panics if `(x, y)` is outside the frame.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, pixel: u16) {
        self.rows[y][x] = pixel;
    }

    /// Write a pixel with horizontal wraparound and vertical clipping
    ///
    /// `x` is wrapped modulo the width; rows outside the frame are skipped.
    /// Returns whether a pixel was written.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, pixel: u16) -> bool {
        let Ok(y) = usize::try_from(y) else {
            return false;
        };
        if y >= H || W == 0 {
            return false;
        }
        self.rows[y][wrap_x(x, W)] = pixel;
        true
    }

    /// One row of pixels
    ///
    /// Panics if `y` is outside the frame.
    pub fn row(&self, y: usize) -> &[u16; W] {
        &self.rows[y]
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> &[u16] {
        self.rows.as_flattened()
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> &[[u16; W]; H] {
        &self.rows
    }

    /// Sub-rectangle from `origin_row` to the bottom edge
    ///
    /// `origin_row == H` yields an empty region.
    pub fn region_from(&self, origin_row: usize) -> Region<'_> {
        let origin_row = origin_row.min(H);
        Region {
            origin_row,
            width: W,
            height: H - origin_row,
            pixels: self.rows[origin_row..].as_flattened(),
        }
    }
}

impl<const W: usize, const H: usize> fmt::Debug for FrameBuffer<W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &W)
            .field("height", &H)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "defmt")]
impl<const W: usize, const H: usize> defmt::Format for FrameBuffer<W, H> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "FrameBuffer[{}x{}]", W, H);
    }
}
