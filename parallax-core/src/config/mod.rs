//! Scene configuration
//!
//! Scenes are compiled-in data. They are built once as `const` values and
//! handed to the renderer by reference.

pub mod landscape;
pub mod scene;

pub use landscape::LANDSCAPE;
pub use scene::*;

/// Panel width in pixels (SSD1331)
pub const SCREEN_WIDTH: usize = 96;

/// Panel height in pixels (SSD1331)
pub const SCREEN_HEIGHT: usize = 64;
