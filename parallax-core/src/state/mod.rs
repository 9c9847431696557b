//! Scene driver state machine
//!
//! The driver is explicit, finite and deterministic: one event per step,
//! no terminal state.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
