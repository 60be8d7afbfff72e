const REPORT_INTERVAL: f64 = 0.5; // Report twice per second

/// Windowed tick-frequency counter. Feed it the raw elapsed time of every
/// tick; when half a second of wall time has been collected it closes the
/// window and yields a rounded frames-per-second estimate.
#[derive(Debug)]
pub struct FpsCounter {
    seconds_elapsed: f64,
    frames: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            seconds_elapsed: 0.0,
            frames: 0,
        }
    }

    /// Account one tick worth of elapsed wall time. Returns the rounded
    /// frames-per-second estimate whenever the report window closes.
    pub fn record(&mut self, elapsed_seconds: f64) -> Option<u32> {
        self.seconds_elapsed += elapsed_seconds;
        self.frames += 1;
        if self.seconds_elapsed < REPORT_INTERVAL {
            return None;
        }
        let fps = (self.frames as f64 / self.seconds_elapsed).round() as u32;
        self.reset();
        Some(fps)
    }

    /// Drop the partially collected window.
    pub fn reset(&mut self) {
        self.seconds_elapsed = 0.0;
        self.frames = 0;
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
