use std::fmt;

use crate::clock::FrameClock;
use crate::fps::FpsCounter;
use crate::game_loop::{GameLoop, RenderFn, ReportFpsFn, StepPolicy, UpdateFn, FIXED_STEP};

/// Advances the simulation in constant increments of [`FIXED_STEP`],
/// carrying leftover time in an accumulator between ticks.
///
/// A tick may run zero steps (the leftover just grows) or several (a slow
/// frame is paid off step by step). Rendering happens once per tick either
/// way.
pub struct FixedSteps {
    policy: StepPolicy,
    clock: FrameClock,
    fps: FpsCounter,
    accumulated: f64,
    update: UpdateFn,
    render: RenderFn,
    report_fps: ReportFpsFn,
}

impl FixedSteps {
    pub fn new(
        update: impl FnMut(f64) + 'static,
        render: impl FnMut() + 'static,
        report_fps: impl FnMut(u32) + 'static,
    ) -> Self {
        Self {
            policy: StepPolicy::unbounded(),
            clock: FrameClock::new(),
            fps: FpsCounter::new(),
            accumulated: 0.0,
            update: Box::new(update),
            render: Box::new(render),
            report_fps: Box::new(report_fps),
        }
    }

    /// Leftover simulated time still waiting to be consumed, in seconds.
    /// Always within `[0, FIXED_STEP)` after a tick.
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }
}

impl GameLoop for FixedSteps {
    fn tick(&mut self, now_nanos: u64) {
        let elapsed = match self.clock.advance(now_nanos) {
            Some(elapsed) => elapsed,
            None => return, // first tick only establishes the baseline
        };

        self.accumulated += self.policy.clamp(elapsed);
        while self.accumulated >= FIXED_STEP {
            (self.update)(FIXED_STEP);
            self.accumulated -= FIXED_STEP;
        }
        (self.render)();

        if let Some(fps) = self.fps.record(elapsed) {
            (self.report_fps)(fps);
        }
    }

    fn stop(&mut self) {
        self.clock.reset();
        self.fps.reset();
        self.accumulated = 0.0;
        tracing::debug!("fixed-step loop stopped");
    }

    fn set_maximum_step(&mut self, seconds: f64) {
        self.policy.set_maximum_step(seconds);
    }

    fn maximum_step(&self) -> f64 {
        self.policy.maximum_step()
    }
}

impl fmt::Display for FixedSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fixed time steps")
    }
}
