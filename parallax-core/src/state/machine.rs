//! State machine definition
//!
//! `Uninitialized -> Ready` happens once. `Ready` means the panel content
//! is unknown and the next frame must be forwarded in full; `Rendering` is
//! the steady state where only changed rows are forwarded.

use super::events::Event;

/// Driver states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Sine tables not built yet
    #[default]
    Uninitialized,
    /// Tables built; the next frame is sent whole
    Ready,
    /// Steady state; frames are diffed against the last forwarded one
    Rendering,
}

impl State {
    /// Check if frames may be rendered in this state
    pub fn can_render(&self) -> bool {
        matches!(self, State::Ready | State::Rendering)
    }

    /// Check if the next frame must be forwarded from row 0
    pub fn needs_full_frame(&self) -> bool {
        matches!(self, State::Ready)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Uninitialized, Initialized) => Ready,

            (Ready, FrameForwarded) => Rendering,
            // An unchanged frame in Ready cannot happen (it is always sent
            // whole), but staying put keeps the next frame full
            (Ready, FrameUnchanged) => Ready,
            (Ready, SinkFailed) => Ready,

            (Rendering, FrameForwarded) => Rendering,
            (Rendering, FrameUnchanged) => Rendering,
            (Rendering, SinkFailed) => Ready,

            // Default: stay in current state
            _ => self,
        }
    }
}
