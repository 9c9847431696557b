//! Tree renderer
//!
//! A tree is a trunk rectangle under three stacked triangular leaf bands.
//! Trees drift left with time and wrap around the horizontal edges; rows
//! that fall outside the frame are clipped.

use crate::color::Color;
use crate::config::{Scene, TreeSpec};
use crate::frame::FrameBuffer;

/// Leftmost column of the tree's local origin at `time`
///
/// `floor(pos_x - time * speed)`, reduced modulo `width` before the
/// subtraction so arbitrarily large times cannot overflow. The result is
/// congruent to the unreduced position modulo `width`.
pub fn scrolled_x(tree: &TreeSpec, time: f64, width: usize) -> i32 {
    let width = width.max(1) as f64;
    let drift = libm::fmod(time * tree.speed as f64, width);
    // |drift| < width, so this stays well inside i32
    libm::floor(tree.pos_x as f64 - drift) as i32
}

/// Inclusive column span of leaf row `row`, relative to the tree origin
///
/// Row `r` spans `width - r + width / 2 ..= width + r - width / 2`. The span
/// is empty above row `width / 2`, a single column (`width`) at that row,
/// and grows by one column on each side per row below it.
pub fn leaf_span(width: i32, row: i32) -> (i32, i32) {
    (width - row + width / 2, width + row - width / 2)
}

/// Draw every tree of `scene`, in order
///
/// Later trees overwrite earlier ones where they overlap.
pub fn plant_trees<const W: usize, const H: usize>(
    scene: &Scene<'_>,
    time: f64,
    frame: &mut FrameBuffer<W, H>,
) {
    for tree in scene.trees {
        draw_tree(tree, scene.bark, scene.leaf, time, frame);
    }
}

/// Draw one tree at its position for `time`
pub fn draw_tree<const W: usize, const H: usize>(
    tree: &TreeSpec,
    bark: Color,
    leaf: Color,
    time: f64,
    frame: &mut FrameBuffer<W, H>,
) {
    let origin_x = scrolled_x(tree, time, W);
    let space = tree.height / 2;

    // Trunk, centred under the canopy and below the lowest leaf band
    let bark = bark.encode16();
    let trunk_x = origin_x + (tree.width + tree.root_width) / 2;
    let trunk_y = tree.pos_y + tree.height + space;
    for dy in 0..tree.root_height {
        for dx in 0..tree.root_width {
            frame.plot(trunk_x + dx, trunk_y + dy, bark);
        }
    }

    for (offset, shade) in [-space, 0, space].into_iter().zip(tree.leaf_shades) {
        draw_leaf_band(tree, origin_x, offset, leaf.darken(shade), frame);
    }
}

fn draw_leaf_band<const W: usize, const H: usize>(
    tree: &TreeSpec,
    origin_x: i32,
    offset: i32,
    color: Color,
    frame: &mut FrameBuffer<W, H>,
) {
    let pixel = color.encode16();
    for row in 0..tree.height {
        let (first, last) = leaf_span(tree.width, row);
        let y = tree.pos_y + offset + row;
        for x in first..=last {
            frame.plot(origin_x + x, y, pixel);
        }
    }
}
