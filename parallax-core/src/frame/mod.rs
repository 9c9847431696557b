//! Frame buffers and change detection
//!
//! The renderer draws into a full-size RGB565 buffer, compares it with the
//! previously forwarded buffer and hands only the changed rows to the sink.

pub mod buffer;
pub mod diff;

pub use buffer::{wrap_x, FrameBuffer};
pub use diff::{first_changed_row, Region};
