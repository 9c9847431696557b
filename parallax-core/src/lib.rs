//! Board-agnostic core of the parallax landscape renderer
//!
//! This crate contains everything that turns elapsed time into pixels,
//! without depending on a particular display or timer:
//!
//! - Color model and RGB565 encoding
//! - Per-layer sine lookup tables
//! - Layer compositor (sine ridges, floor fill, sun glow)
//! - Tree renderer with horizontal wraparound
//! - Double frame buffers and the top-down diff engine
//! - Scene driver state machine
//! - Sink and clock traits implemented by the board or host

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod driver;
pub mod frame;
pub mod render;
pub mod state;
pub mod traits;

pub use color::Color;
pub use config::{Scene, SceneError, LANDSCAPE, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use driver::{DriverError, FrameReport, SceneDriver};
pub use frame::{FrameBuffer, Region};
pub use traits::{Clock, RenderSink};
