/// Longest simulated step per frame, in seconds.
/// A tab that was suspended for minutes resumes with one ordinary-looking step.
pub const MAX_FRAME_DELTA: f32 = 1.0;

/// Clamp a frame delta to [0, MAX_FRAME_DELTA]. Non-finite deltas become 0.
pub fn clamp_delta(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DELTA)
    } else {
        0.0
    }
}

/// Turns host frame timestamps (milliseconds) into clamped deltas (seconds).
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Forget the previous timestamp; the next tick yields a zero delta.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    /// Record `now_ms` and return the clamped delta since the previous tick.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(prev) => ((now_ms - prev) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        clamp_delta(dt)
    }
}
