//! Events that move the scene driver between states

/// Driver events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Sine tables built and both buffers cleared
    Initialized,
    /// A frame was rendered and its changed rows accepted by the sink
    FrameForwarded,
    /// A frame was rendered but nothing changed since the last one
    FrameUnchanged,
    /// The sink rejected a region; panel content is unknown
    SinkFailed,
}

impl Event {
    /// Check if this event reports a completed frame
    pub fn is_frame(&self) -> bool {
        matches!(self, Event::FrameForwarded | Event::FrameUnchanged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_frame() {
        assert!(Event::FrameForwarded.is_frame());
        assert!(Event::FrameUnchanged.is_frame());
        assert!(!Event::Initialized.is_frame());
        assert!(!Event::SinkFailed.is_frame());
    }
}
