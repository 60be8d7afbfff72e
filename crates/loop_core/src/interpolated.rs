use std::fmt;

use crate::clock::FrameClock;
use crate::fps::FpsCounter;
use crate::game_loop::{
    GameLoop, InterpolateFn, RenderFn, ReportFpsFn, StepPolicy, UpdateFn, FIXED_STEP,
};

/// Fixed-step loop that hides the stutter of [`FixedSteps`] by keeping the
/// simulation one step ahead of what is shown and blending toward it.
///
/// Ticks that cross a step boundary render and then run the pending step;
/// ticks that fall inside a step only nudge the shown state further along
/// via the interpolate callback.
///
/// [`FixedSteps`]: crate::fixed::FixedSteps
pub struct InterpolatedSteps {
    policy: StepPolicy,
    clock: FrameClock,
    fps: FpsCounter,
    accumulated: f64,
    update: UpdateFn,
    render: RenderFn,
    interpolate: InterpolateFn,
    report_fps: ReportFpsFn,
}

impl InterpolatedSteps {
    pub fn new(
        update: impl FnMut(f64) + 'static,
        render: impl FnMut() + 'static,
        interpolate: impl FnMut(f64) + 'static,
        report_fps: impl FnMut(u32) + 'static,
    ) -> Self {
        Self {
            policy: StepPolicy::unbounded(),
            clock: FrameClock::new(),
            fps: FpsCounter::new(),
            accumulated: 0.0,
            update: Box::new(update),
            render: Box::new(render),
            interpolate: Box::new(interpolate),
            report_fps: Box::new(report_fps),
        }
    }

    /// Leftover simulated time already consumed by the step the simulation
    /// ran ahead with, in seconds. Within `[0, FIXED_STEP)` after a
    /// boundary-crossing tick.
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }
}

impl GameLoop for InterpolatedSteps {
    fn tick(&mut self, now_nanos: u64) {
        let elapsed = match self.clock.advance(now_nanos) {
            Some(elapsed) => elapsed,
            None => return, // first tick only establishes the baseline
        };

        self.accumulated += self.policy.clamp(elapsed);

        if self.accumulated < FIXED_STEP {
            // Mid-step tick. The shown state was last blended at the previous
            // tick, so the blend factor is measured against the span of the
            // step that was still left at that point, not the whole step.
            let remainder = FIXED_STEP - (self.accumulated - elapsed);
            let alpha = (elapsed / remainder).min(1.0);
            (self.interpolate)(alpha);
            return;
        }

        // Drain all but one pending step, then render. The final step runs
        // after the render, which keeps the simulation one step ahead of
        // the shown state.
        while self.accumulated >= 2.0 * FIXED_STEP {
            (self.update)(FIXED_STEP);
            self.accumulated -= FIXED_STEP;
        }
        (self.render)();
        (self.update)(FIXED_STEP);
        self.accumulated -= FIXED_STEP;
        let alpha = self.accumulated / FIXED_STEP;
        (self.interpolate)(alpha);

        // Only boundary-crossing ticks count as frames
        if let Some(fps) = self.fps.record(elapsed) {
            (self.report_fps)(fps);
        }
    }

    fn stop(&mut self) {
        self.clock.reset();
        self.fps.reset();
        self.accumulated = 0.0;
        tracing::debug!("interpolated fixed-step loop stopped");
    }

    fn set_maximum_step(&mut self, seconds: f64) {
        self.policy.set_maximum_step(seconds);
    }

    fn maximum_step(&self) -> f64 {
        self.policy.maximum_step()
    }
}

impl fmt::Display for InterpolatedSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fixed time steps with interpolation")
    }
}
