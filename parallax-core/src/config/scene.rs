//! Scene description types
//!
//! A scene is the sky palette, an ordered stack of background layers and a
//! list of trees. Layers are ordered from the back (index 0) to the front;
//! later layers win where two of them claim the same pixel.

use crate::color::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of background layers a scene may declare
pub const MAX_LAYERS: usize = 16;

/// Scene validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SceneError {
    /// More layers than `MAX_LAYERS`
    TooManyLayers,
    /// A layer has a NaN or infinite parameter
    NonFiniteLayer {
        /// Index of the offending layer
        index: usize,
    },
    /// A tree has a NaN or infinite parameter
    NonFiniteTree {
        /// Index of the offending tree
        index: usize,
    },
    /// The sun glow range is NaN or infinite
    NonFiniteSun,
}

/// One background layer (mountain ridge, grass bank, water line)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerSpec {
    /// Base color; used raw for the floor fill below the front layer
    pub color: Color,
    /// Vertical ridge displacement in pixels
    pub amplitude: f32,
    /// Spatial frequency (phase multiplier of the sine table)
    pub frequency: f32,
    /// Baseline row of the ridge
    pub pos_y: i32,
    /// Horizontal scroll speed in table entries per second
    pub speed: f32,
    /// Shading factor applied to `color` inside the ridge band
    pub darken: f32,
}

impl LayerSpec {
    /// Top row of this layer's band
    pub fn band_top(&self) -> f32 {
        self.pos_y as f32 - self.amplitude
    }

    /// Bottom row of this layer's band
    pub fn band_bottom(&self) -> f32 {
        self.pos_y as f32 + self.amplitude
    }

    fn is_finite(&self) -> bool {
        self.amplitude.is_finite()
            && self.frequency.is_finite()
            && self.speed.is_finite()
            && self.darken.is_finite()
    }
}

/// A tree: trunk plus three stacked triangular leaf bands
///
/// Trees are shape descriptors only. Their on-screen position is derived
/// from the anchor and elapsed time at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeSpec {
    /// Horizontal anchor at time zero
    pub pos_x: i32,
    /// Vertical anchor of the canopy
    pub pos_y: i32,
    /// Darken factors of the upper, middle and lower leaf band
    pub leaf_shades: [f32; 3],
    /// Height of one leaf band
    pub height: i32,
    /// Canopy width parameter
    pub width: i32,
    /// Trunk height
    pub root_height: i32,
    /// Trunk width
    pub root_width: i32,
    /// Leftward drift in pixels per second
    pub speed: f32,
}

impl TreeSpec {
    fn is_finite(&self) -> bool {
        self.speed.is_finite() && self.leaf_shades.iter().all(|s| s.is_finite())
    }
}

/// Radial glow blended in around the top-right corner
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunGlow {
    /// Glow color at the corner
    pub color: Color,
    /// Squared pixel distance at which the glow fades out
    pub range: f32,
}

/// Complete scene description
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scene<'a> {
    /// Color of every pixel no layer claims
    pub sky: Color,
    /// Optional sun glow
    pub sun: Option<SunGlow>,
    /// Trunk color
    pub bark: Color,
    /// Undarkened leaf color
    pub leaf: Color,
    /// Color both frame buffers are cleared to at startup
    pub blank: Color,
    /// Background layers, back to front
    pub layers: &'a [LayerSpec],
    /// Trees, drawn in order (later trees overwrite earlier ones)
    pub trees: &'a [TreeSpec],
}

impl Scene<'_> {
    /// Number of background layers
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Number of trees
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Check the scene can be rendered
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.layers.len() > MAX_LAYERS {
            return Err(SceneError::TooManyLayers);
        }
        if let Some(index) = self.layers.iter().position(|l| !l.is_finite()) {
            return Err(SceneError::NonFiniteLayer { index });
        }
        if let Some(index) = self.trees.iter().position(|t| !t.is_finite()) {
            return Err(SceneError::NonFiniteTree { index });
        }
        if let Some(sun) = &self.sun {
            if !sun.range.is_finite() {
                return Err(SceneError::NonFiniteSun);
            }
        }
        Ok(())
    }
}
