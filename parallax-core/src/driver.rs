//! Scene driver
//!
//! Owns the two frame buffers and runs one frame at a time:
//! compose layers, plant trees, diff against the last forwarded frame,
//! hand the changed rows to the sink, then swap buffers.

use core::convert::Infallible;
use core::mem;

use crate::config::{Scene, SceneError, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::frame::{first_changed_row, FrameBuffer};
use crate::render::{plant_trees, LayerStack};
use crate::state::{Event, State};
use crate::traits::{Clock, RenderSink};

/// Errors returned while rendering a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError<E> {
    /// A frame was requested before `init`
    NotInitialized,
    /// The scene failed validation
    Scene(SceneError),
    /// The sink rejected the changed region
    Sink(E),
}

impl<E> From<SceneError> for DriverError<E> {
    fn from(err: SceneError) -> Self {
        DriverError::Scene(err)
    }
}

/// Outcome of one rendered frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameReport {
    /// Frame number, starting at 0
    pub frame: u32,
    /// Elapsed time the frame was rendered for
    pub time: f64,
    /// First row that differed from the previous frame (height if none)
    pub first_changed_row: usize,
    /// Rows handed to the sink
    pub rows_forwarded: usize,
}

impl FrameReport {
    /// Check if nothing was sent to the sink
    pub fn is_unchanged(&self) -> bool {
        self.rows_forwarded == 0
    }
}

/// Renders a scene frame by frame into a sink
///
/// The scene is immutable for the driver's lifetime. The current and
/// previous buffers are owned here and only lent to drawing stages for the
/// duration of a call.
pub struct SceneDriver<'a, const W: usize = SCREEN_WIDTH, const H: usize = SCREEN_HEIGHT> {
    scene: Scene<'a>,
    layers: LayerStack,
    state: State,
    current: FrameBuffer<W, H>,
    previous: FrameBuffer<W, H>,
    frames: u32,
}

impl<'a, const W: usize, const H: usize> SceneDriver<'a, W, H> {
    /// Create an uninitialized driver for `scene`
    pub fn new(scene: Scene<'a>) -> Self {
        Self {
            scene,
            layers: LayerStack::empty(),
            state: State::Uninitialized,
            current: FrameBuffer::filled(scene.blank),
            previous: FrameBuffer::filled(scene.blank),
            frames: 0,
        }
    }

    /// Build sine tables and clear both buffers
    ///
    /// Runs once; later calls are no-ops.
    pub fn init(&mut self) -> Result<(), SceneError> {
        if self.state != State::Uninitialized {
            return Ok(());
        }

        self.scene.validate()?;
        self.layers = LayerStack::build(&self.scene)?;
        self.current.fill(self.scene.blank);
        self.previous.fill(self.scene.blank);
        self.state = self.state.transition(Event::Initialized);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Scene ready: {} layers, {} trees, {}x{}",
            self.scene.layer_count(),
            self.scene.tree_count(),
            W,
            H
        );

        Ok(())
    }

    /// Current driver state
    pub fn state(&self) -> State {
        self.state
    }

    /// Scene being rendered
    pub fn scene(&self) -> &Scene<'a> {
        &self.scene
    }

    /// Layers with their sine tables (empty before `init`)
    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    /// Number of frames rendered so far
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// The last frame the sink accepted
    pub fn previous(&self) -> &FrameBuffer<W, H> {
        &self.previous
    }

    /// Render the frame for `time` and forward its changed rows
    pub fn render_frame<S: RenderSink>(
        &mut self,
        time: f64,
        sink: &mut S,
    ) -> Result<FrameReport, DriverError<S::Error>> {
        if !self.state.can_render() {
            return Err(DriverError::NotInitialized);
        }

        self.layers
            .compose(self.scene.sky, self.scene.sun.as_ref(), time, &mut self.current);
        plant_trees(&self.scene, time, &mut self.current);

        let first_changed_row = if self.state.needs_full_frame() {
            0
        } else {
            first_changed_row(&self.current, &self.previous)
        };

        let mut report = FrameReport {
            frame: self.frames,
            time,
            first_changed_row,
            rows_forwarded: 0,
        };
        self.frames = self.frames.wrapping_add(1);

        if first_changed_row >= H {
            #[cfg(feature = "defmt")]
            defmt::trace!("Frame {}: unchanged", report.frame);

            self.state = self.state.transition(Event::FrameUnchanged);
            return Ok(report);
        }

        let region = self.current.region_from(first_changed_row);
        report.rows_forwarded = region.height;

        if let Err(err) = sink.push_region(region) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Frame {}: sink rejected region, forcing full redraw", report.frame);

            self.state = self.state.transition(Event::SinkFailed);
            return Err(DriverError::Sink(err));
        }

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "Frame {}: rows {}..{} forwarded",
            report.frame,
            first_changed_row,
            H
        );

        // The accepted frame becomes the reference; the old reference is
        // fully overwritten by the next compose
        mem::swap(&mut self.current, &mut self.previous);
        self.state = self.state.transition(Event::FrameForwarded);

        Ok(report)
    }

    /// Read the clock once and render that frame
    pub fn step<C: Clock, S: RenderSink>(
        &mut self,
        clock: &mut C,
        sink: &mut S,
    ) -> Result<FrameReport, DriverError<S::Error>> {
        let time = clock.elapsed_secs();
        self.render_frame(time, sink)
    }

    /// Initialize if needed, then render frames forever
    ///
    /// Only returns if the scene fails validation. Sink failures are logged
    /// and recovered from with a full redraw on the next frame.
    pub fn run<C: Clock, S: RenderSink>(
        &mut self,
        clock: &mut C,
        sink: &mut S,
    ) -> Result<Infallible, SceneError> {
        self.init()?;

        loop {
            match self.step(clock, sink) {
                Ok(_) => {}
                Err(DriverError::Scene(err)) => return Err(err),
                // Already logged; the state machine schedules a full frame
                Err(DriverError::Sink(_)) | Err(DriverError::NotInitialized) => {}
            }
        }
    }
}

impl<const W: usize, const H: usize> core::fmt::Debug for SceneDriver<'_, W, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SceneDriver")
            .field("state", &self.state)
            .field("layers", &self.layers.len())
            .field("trees", &self.scene.tree_count())
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}
