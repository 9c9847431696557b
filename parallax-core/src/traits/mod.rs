//! Collaborator traits
//!
//! These traits define the interface between the renderer and the board
//! or host: where changed rows go and where time comes from.

pub mod clock;
pub mod sink;

pub use clock::{Clock, FixedStepClock};
pub use sink::RenderSink;
