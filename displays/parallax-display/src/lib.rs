//! Display sinks for the parallax renderer
//!
//! This crate provides:
//! - `DrawTargetSink`, a `RenderSink` for any `embedded-graphics`
//!   `DrawTarget<Color = Rgb565>` (SSD1331, ST7735, simulator windows)
//! - Color conversions between the renderer's packed pixels and `Rgb565`
//!
//! # Architecture
//!
//! The renderer only decides which rows changed. Display drivers already
//! speak `embedded-graphics`, so the sink streams the changed rows into the
//! driver's `fill_contiguous`, which maps to a single address-window write
//! on controllers that support it.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod color;

// Re-export key types
pub use backend::{DrawTargetSink, SinkError};
pub use color::{from_rgb565, rgb565, to_rgb565};
