//! Layer compositor
//!
//! Paints the sky, the sine-displaced background layers and the sun glow
//! into a frame buffer. Every pixel of the frame is written.

use heapless::Vec;

use super::sine::{scroll_index, scroll_offset, SineTable};
use crate::color::Color;
use crate::config::{LayerSpec, Scene, SceneError, SunGlow, MAX_LAYERS};
use crate::frame::FrameBuffer;

/// A layer paired with its precomputed sine table
#[derive(Debug, Clone)]
pub struct Layer {
    spec: LayerSpec,
    table: SineTable,
}

impl Layer {
    /// Build the layer's table
    pub fn new(spec: LayerSpec) -> Self {
        Self {
            table: SineTable::build(spec.frequency),
            spec,
        }
    }

    /// Layer parameters
    pub fn spec(&self) -> &LayerSpec {
        &self.spec
    }

    /// Precomputed sine table
    pub fn table(&self) -> &SineTable {
        &self.table
    }

    /// Ridge row of this layer at table `index`
    #[inline]
    fn ridge(&self, index: usize) -> f32 {
        self.table.get(index) * self.spec.amplitude + self.spec.pos_y as f32
    }
}

/// The layer stack of a scene, tables built once
#[derive(Debug, Clone, Default)]
pub struct LayerStack {
    layers: Vec<Layer, MAX_LAYERS>,
}

impl LayerStack {
    /// Stack with no layers
    pub const fn empty() -> Self {
        Self { layers: Vec::new() }
    }

    /// Build sine tables for every layer of `scene`
    pub fn build(scene: &Scene<'_>) -> Result<Self, SceneError> {
        let mut layers = Vec::new();
        for spec in scene.layers {
            layers
                .push(Layer::new(*spec))
                .map_err(|_| SceneError::TooManyLayers)?;
        }
        Ok(Self { layers })
    }

    /// Number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True if the stack has no layers
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layers, back to front
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Paint the background of one frame
    ///
    /// `sky` fills every pixel no layer claims.
    pub fn compose<const W: usize, const H: usize>(
        &self,
        sky: Color,
        sun: Option<&SunGlow>,
        time: f64,
        frame: &mut FrameBuffer<W, H>,
    ) {
        // Scroll offsets change per frame, not per pixel
        let mut offsets: Vec<usize, MAX_LAYERS> = Vec::new();
        for layer in &self.layers {
            // Capacity matches self.layers
            let _ = offsets.push(scroll_offset(time, layer.spec.speed));
        }

        for y in 0..H {
            for x in 0..W {
                let mut color = self.layer_color(sky, &offsets, x, y);
                if let Some(sun) = sun {
                    color = sun_glow(sun, color, W, x, y);
                }
                frame.set(x, y, color.encode16());
            }
        }
    }

    /// Color of pixel `(x, y)` from the layer stack alone
    fn layer_color(&self, sky: Color, offsets: &[usize], x: usize, y: usize) -> Color {
        let row = y as f32;
        let last = self.layers.len().saturating_sub(1);
        let mut color = sky;

        for (i, (layer, offset)) in self.layers.iter().zip(offsets).enumerate() {
            let next = if i < last {
                &self.layers[i + 1]
            } else {
                // Floor fill below the front layer's band
                if layer.spec.band_bottom() < row {
                    color = layer.spec.color;
                }
                layer
            };

            if layer.spec.band_top() <= row && next.spec.band_bottom() >= row {
                let index = scroll_index(x, *offset);
                if layer.ridge(index) < row {
                    color = layer.spec.color.darken(layer.spec.darken);
                }
            }
        }

        color
    }
}

/// Blend the sun into `color` near the top-right corner
///
/// The squared distance `d2` to `(width, 0)` is mapped to
/// `t = 1 - (1 - d2 / range)^4`; at the corner the sun color is used as is
/// and it fades to `color` at `range`.
pub fn sun_glow(sun: &SunGlow, color: Color, width: usize, x: usize, y: usize) -> Color {
    let dx = width as f32 - x as f32;
    let dy = y as f32;
    let d2 = dx * dx + dy * dy;
    if d2 >= sun.range {
        return color;
    }

    let invert = 1.0 - d2 / sun.range;
    let curve = 1.0 - invert * invert * invert * invert;
    sun.color.blend(color, curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette;
    use crate::config::LANDSCAPE;

    const FLAT: LayerSpec = LayerSpec {
        color: palette::GRASS,
        amplitude: 0.0,
        frequency: 0.0,
        pos_y: 32,
        speed: 0.0,
        darken: 1.0,
    };

    fn scene(layers: &[LayerSpec]) -> Scene<'_> {
        Scene {
            sky: palette::SKY,
            sun: None,
            bark: palette::TREE_BARK,
            leaf: palette::TREE_LEAF,
            blank: Color::WHITE,
            layers,
            trees: &[],
        }
    }

    fn compose(layers: &[LayerSpec], time: f64) -> FrameBuffer<96, 64> {
        let scene = scene(layers);
        let stack = LayerStack::build(&scene).unwrap();
        let mut frame = FrameBuffer::new(0);
        stack.compose(scene.sky, scene.sun.as_ref(), time, &mut frame);
        frame
    }

    #[test]
    fn test_sky_only() {
        let frame = compose(&[], 3.0);
        let sky = palette::SKY.encode16();
        assert!(frame.pixels().iter().all(|p| *p == sky));
    }

    #[test]
    fn test_flat_layer_splits_at_baseline() {
        let sky = palette::SKY.encode16();
        let ground = palette::GRASS.encode16();
        for time in [0.0, 1.5, 1.0e6] {
            let frame = compose(&[FLAT], time);
            for y in 0..64 {
                let expected = if y <= 32 { sky } else { ground };
                assert!(
                    frame.row(y).iter().all(|p| *p == expected),
                    "row {y} at time {time}"
                );
            }
        }
    }

    #[test]
    fn test_floor_fill_is_undarkened() {
        let layer = LayerSpec { darken: 0.5, ..FLAT };
        let frame = compose(&[layer], 0.0);
        assert_eq!(frame.get(10, 33), Some(palette::GRASS.encode16()));
        assert_eq!(frame.get(10, 63), Some(palette::GRASS.encode16()));
    }

    #[test]
    fn test_band_uses_darkened_color() {
        // The back layer's band reaches down to the front layer's band
        let back = LayerSpec {
            color: palette::MOUNTAIN,
            pos_y: 20,
            darken: 0.6,
            ..FLAT
        };
        let front = LayerSpec { pos_y: 40, ..FLAT };
        let frame = compose(&[back, front], 0.0);

        let shaded = palette::MOUNTAIN.darken(0.6).encode16();
        assert_eq!(frame.get(0, 20), Some(palette::SKY.encode16()));
        assert_eq!(frame.get(0, 21), Some(shaded));
        assert_eq!(frame.get(0, 40), Some(shaded));
        assert_eq!(frame.get(0, 41), Some(palette::GRASS.encode16()));
    }

    #[test]
    fn test_front_layer_wins_overlap() {
        let back = LayerSpec {
            color: palette::MOUNTAIN,
            amplitude: 2.0,
            pos_y: 30,
            ..FLAT
        };
        let front = LayerSpec {
            color: palette::WATER,
            amplitude: 2.0,
            pos_y: 30,
            darken: 0.6,
            ..FLAT
        };
        let frame = compose(&[back, front], 0.0);
        assert_eq!(frame.get(5, 31), Some(palette::WATER.darken(0.6).encode16()));
    }

    #[test]
    fn test_ridge_follows_table() {
        let layer = LayerSpec {
            amplitude: 5.0,
            frequency: 1.0,
            pos_y: 30,
            ..FLAT
        };
        let scene = scene(core::slice::from_ref(&layer));
        let stack = LayerStack::build(&scene).unwrap();
        let mut frame: FrameBuffer<96, 64> = FrameBuffer::new(0);
        stack.compose(scene.sky, None, 0.0, &mut frame);

        let table = stack.layers()[0].table();
        for x in 0..96 {
            let ridge = table.get(x) * 5.0 + 30.0;
            for y in 25..=35 {
                let expected = if ridge < y as f32 {
                    palette::GRASS.encode16()
                } else {
                    palette::SKY.encode16()
                };
                assert_eq!(frame.get(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_scrolling_shifts_ridge() {
        let layer = LayerSpec {
            amplitude: 5.0,
            frequency: 3.0,
            pos_y: 30,
            speed: 1.0,
            ..FLAT
        };
        let at_zero = compose(&[layer], 0.0);
        let at_one = compose(&[layer], 1.0);
        // One second at speed 1 moves the ridge one column left
        for y in 0..64 {
            assert_eq!(&at_one.row(y)[..95], &at_zero.row(y)[1..]);
        }
    }

    #[test]
    fn test_sun_glow_corner() {
        let sun = LANDSCAPE.sun.unwrap();
        // Distance 1 from the corner: almost pure sun
        let near = sun_glow(&sun, palette::SKY, 96, 95, 0);
        let invert = 1.0 - 1.0 / 5000.0f32;
        let t = 1.0 - invert * invert * invert * invert;
        assert_eq!(near, palette::SUN.blend(palette::SKY, t));
        assert_eq!(sun_glow(&sun, palette::SKY, 96, 96, 0), palette::SUN);
        // Outside the range the pixel is untouched
        assert_eq!(sun_glow(&sun, palette::SKY, 96, 0, 63), palette::SKY);
    }

    #[test]
    fn test_landscape_layers_build() {
        let stack = LayerStack::build(&LANDSCAPE).unwrap();
        assert_eq!(stack.len(), LANDSCAPE.layer_count());
        for (layer, spec) in stack.layers().iter().zip(LANDSCAPE.layers) {
            assert_eq!(layer.table(), &SineTable::build(spec.frequency));
        }
    }
}
