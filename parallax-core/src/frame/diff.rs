//! Top-down frame diff
//!
//! Background layers higher on the screen scroll slower, so the top rows
//! are the ones most likely to match the previous frame. Scanning from the
//! top and forwarding everything from the first changed row down trades a
//! few redundant rows for a single contiguous transfer.

use super::buffer::FrameBuffer;

/// Rows of a frame handed to a render sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region<'a> {
    /// First frame row contained in `pixels`
    pub origin_row: usize,
    /// Row width in pixels
    pub width: usize,
    /// Number of rows, from `origin_row` to the bottom edge
    pub height: usize,
    /// `width * height` RGB565 pixels, row-major
    pub pixels: &'a [u16],
}

impl<'a> Region<'a> {
    /// True if the region has no rows
    pub fn is_empty(&self) -> bool {
        self.height == 0
    }

    /// Rows of the region, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &'a [u16]> + 'a {
        let width = self.width.max(1);
        self.pixels.chunks_exact(width)
    }
}

/// First row where `current` differs from `previous`
///
/// Returns `H` if the frames are identical.
pub fn first_changed_row<const W: usize, const H: usize>(
    current: &FrameBuffer<W, H>,
    previous: &FrameBuffer<W, H>,
) -> usize {
    current
        .rows()
        .iter()
        .zip(previous.rows())
        .position(|(now, before)| now != before)
        .unwrap_or(H)
}
