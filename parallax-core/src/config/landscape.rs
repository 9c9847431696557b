//! Built-in landscape scene
//!
//! Three mountain ridges, three grass banks and a water line, with five
//! trees planted on the grass.

use super::scene::{LayerSpec, Scene, SunGlow, TreeSpec};
use crate::color::{palette, Color};

const fn layer(
    color: Color,
    amplitude: f32,
    frequency: f32,
    pos_y: i32,
    speed: f32,
    darken: f32,
) -> LayerSpec {
    LayerSpec {
        color,
        amplitude,
        frequency,
        pos_y,
        speed,
        darken,
    }
}

const fn tree(pos_x: i32, pos_y: i32) -> TreeSpec {
    TreeSpec {
        pos_x,
        pos_y,
        leaf_shades: [1.0, 0.6, 1.0],
        height: 10,
        width: 5,
        root_height: 7,
        root_width: 3,
        speed: 6.0,
    }
}

/// Landscape layers, back to front
pub const LANDSCAPE_LAYERS: [LayerSpec; 8] = [
    layer(palette::MOUNTAIN, 7.0, 17.0, 10, 0.0, 0.6),
    layer(palette::MOUNTAIN, 5.0, 8.0, 15, 0.5, 0.8),
    layer(palette::MOUNTAIN, 4.0, 5.0, 20, 1.0, 1.0),
    layer(palette::GRASS, 5.0, 4.0, 30, 3.0, 0.6),
    layer(palette::GRASS, 3.0, 3.0, 32, 6.0, 0.8),
    layer(palette::GRASS, 3.0, 2.0, 40, 16.0, 1.0),
    layer(palette::WATER, 2.0, 20.0, 60, 5.0, 0.6),
    layer(palette::WATER, 2.0, 20.0, 60, 10.0, 1.0),
];

/// Landscape trees, drawn in this order
pub const LANDSCAPE_TREES: [TreeSpec; 5] = [
    tree(10, 25),
    tree(40, 27),
    tree(30, 30),
    tree(60, 33),
    tree(63, 35),
];

/// Sun glow in the top-right corner
pub const LANDSCAPE_SUN: SunGlow = SunGlow {
    color: palette::SUN,
    range: 5000.0,
};

/// The default scene
pub const LANDSCAPE: Scene<'static> = Scene {
    sky: palette::SKY,
    sun: Some(LANDSCAPE_SUN),
    bark: palette::TREE_BARK,
    leaf: palette::TREE_LEAF,
    blank: Color::WHITE,
    layers: &LANDSCAPE_LAYERS,
    trees: &LANDSCAPE_TREES,
};
