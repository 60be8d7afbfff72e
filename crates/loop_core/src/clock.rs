const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Measures elapsed seconds between consecutive timestamps handed in by an
/// external tick source.
#[derive(Debug)]
pub struct FrameClock {
    previous_nanos: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            previous_nanos: None,
        }
    }

    /// Record a timestamp and return the seconds since the previous one.
    /// Returns `None` on the first call after construction or `reset`, when
    /// no baseline exists yet. A timestamp at or before the previous one
    /// yields `0.0`.
    pub fn advance(&mut self, now_nanos: u64) -> Option<f64> {
        let elapsed = self
            .previous_nanos
            .map(|previous| now_nanos.saturating_sub(previous) as f64 / NANOS_PER_SEC);
        self.previous_nanos = Some(now_nanos);
        elapsed
    }

    /// Forget the baseline so the next `advance` acts like a first call.
    pub fn reset(&mut self) {
        self.previous_nanos = None;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
