//! Clock source trait

/// Monotonic elapsed time source
///
/// Read once per frame. Reading has no side effects on the renderer.
pub trait Clock {
    /// Seconds since start
    fn elapsed_secs(&mut self) -> f64;
}

impl<F: FnMut() -> f64> Clock for F {
    fn elapsed_secs(&mut self) -> f64 {
        self()
    }
}

/// Clock that advances by a fixed step on every read
///
/// Useful for deterministic rendering on a host: the first read returns
/// `start`, each following read `step` seconds more.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedStepClock {
    next: f64,
    step: f64,
}

impl FixedStepClock {
    /// Clock starting at `start` seconds, advancing `step` seconds per read
    pub const fn new(start: f64, step: f64) -> Self {
        Self { next: start, step }
    }

    /// Clock advancing at `fps` frames per second from zero
    pub fn from_fps(fps: u32) -> Self {
        Self::new(0.0, 1.0 / fps.max(1) as f64)
    }
}

impl Clock for FixedStepClock {
    fn elapsed_secs(&mut self) -> f64 {
        let now = self.next;
        self.next += self.step;
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step() {
        let mut clock = FixedStepClock::new(1.0, 0.5);
        assert_eq!(clock.elapsed_secs(), 1.0);
        assert_eq!(clock.elapsed_secs(), 1.5);
        assert_eq!(clock.elapsed_secs(), 2.0);
    }

    #[test]
    fn test_from_fps() {
        let mut clock = FixedStepClock::from_fps(4);
        assert_eq!(clock.elapsed_secs(), 0.0);
        assert_eq!(clock.elapsed_secs(), 0.25);
    }

    #[test]
    fn test_closure_clock() {
        let mut ticks = 0u32;
        let mut clock = || {
            ticks += 1;
            ticks as f64 * 0.1
        };
        assert_eq!(Clock::elapsed_secs(&mut clock), 0.1);
    }
}
