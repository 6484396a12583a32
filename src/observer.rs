//! Frame observer trait for monitoring the animation loop.

/// Trait for observing simulation frames.
///
/// Hosts implement this to count frames, time the physics pass or log
/// particle counts. All methods default to no-ops.
pub trait FrameObserver {
    /// Called after every particle has been stepped.
    fn on_physics(&mut self, _particles: usize) {}

    /// Called after all particles have been painted.
    fn on_draw(&mut self, _painted: usize) {}

    /// Called when a frame is fully complete.
    fn on_frame_complete(&mut self) {}
}

/// Observer that ignores everything.
pub struct NoOpFrameObserver;

impl FrameObserver for NoOpFrameObserver {}
