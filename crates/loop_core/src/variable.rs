use std::fmt;

use crate::clock::FrameClock;
use crate::fps::FpsCounter;
use crate::game_loop::{GameLoop, RenderFn, ReportFpsFn, StepPolicy, UpdateFn};

/// Advances the simulation once per tick by the measured elapsed time.
///
/// Simple and always in sync with wall time, at the cost of a time step that
/// varies from frame to frame.
pub struct VariableSteps {
    policy: StepPolicy,
    clock: FrameClock,
    fps: FpsCounter,
    update: UpdateFn,
    render: RenderFn,
    report_fps: ReportFpsFn,
}

impl VariableSteps {
    pub fn new(
        update: impl FnMut(f64) + 'static,
        render: impl FnMut() + 'static,
        report_fps: impl FnMut(u32) + 'static,
    ) -> Self {
        Self {
            policy: StepPolicy::unbounded(),
            clock: FrameClock::new(),
            fps: FpsCounter::new(),
            update: Box::new(update),
            render: Box::new(render),
            report_fps: Box::new(report_fps),
        }
    }
}

impl GameLoop for VariableSteps {
    fn tick(&mut self, now_nanos: u64) {
        let elapsed = match self.clock.advance(now_nanos) {
            Some(elapsed) => elapsed,
            None => return, // first tick only establishes the baseline
        };

        (self.update)(self.policy.clamp(elapsed));
        (self.render)();

        // FPS stays a wall-clock measurement, so feed the unclamped elapsed
        if let Some(fps) = self.fps.record(elapsed) {
            (self.report_fps)(fps);
        }
    }

    fn stop(&mut self) {
        self.clock.reset();
        self.fps.reset();
        tracing::debug!("variable-step loop stopped");
    }

    fn set_maximum_step(&mut self, seconds: f64) {
        self.policy.set_maximum_step(seconds);
    }

    fn maximum_step(&self) -> f64 {
        self.policy.maximum_step()
    }
}

impl fmt::Display for VariableSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Variable time steps")
    }
}
