use std::fmt;

/// Simulated time consumed by one fixed step, in seconds (~60 steps/second).
pub const FIXED_STEP: f64 = 0.0166;

// Type aliases to simplify the injected callback slot types for clippy
pub type UpdateFn = Box<dyn FnMut(f64)>;
pub type RenderFn = Box<dyn FnMut()>;
pub type InterpolateFn = Box<dyn FnMut(f64)>;
pub type ReportFpsFn = Box<dyn FnMut(u32)>;

/// Ceiling on the elapsed time a single tick may feed the simulation.
///
/// Unbounded by default. Setting a ceiling keeps one slow frame from
/// producing an equally slow step, which would slow the next frame in turn.
#[derive(Debug, Clone, Copy)]
pub struct StepPolicy {
    maximum_step: f64,
}

impl StepPolicy {
    pub fn unbounded() -> Self {
        Self {
            maximum_step: f64::INFINITY,
        }
    }

    pub fn set_maximum_step(&mut self, seconds: f64) {
        self.maximum_step = seconds;
    }

    pub fn maximum_step(&self) -> f64 {
        self.maximum_step
    }

    /// Clamp a measured elapsed time before it reaches the simulation.
    /// A non-positive ceiling pins the result to zero, an explicit pause.
    pub fn clamp(&self, elapsed_seconds: f64) -> f64 {
        elapsed_seconds.min(self.maximum_step).max(0.0)
    }
}

impl Default for StepPolicy {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// A frame-pacing strategy driven by an external tick source.
///
/// The driver calls [`tick`](GameLoop::tick) once per frame with a monotonic
/// timestamp; the loop measures its own elapsed time and invokes the injected
/// callbacks. All variants ignore the first tick after construction or
/// [`stop`](GameLoop::stop), which only establishes the timing baseline.
pub trait GameLoop: fmt::Display {
    /// Advance the loop to a new monotonic timestamp in nanoseconds.
    fn tick(&mut self, now_nanos: u64);

    /// Discard all timing state so the next tick behaves like a first tick.
    /// Safe to call repeatedly or before any tick has happened.
    fn stop(&mut self);

    fn set_maximum_step(&mut self, seconds: f64);

    fn maximum_step(&self) -> f64;
}
