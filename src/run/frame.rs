//! Frame pacing shared by the terminal and GUI loops.

use std::time::{Duration, Instant};

/// Default cap on redraws per second
pub const DEFAULT_FRAME_RATE: u32 = 144;

/// Spaces redraws at least `1 / fps` apart. A rate of 0 leaves them uncapped.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    interval: Option<Duration>,
    last_frame: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        let interval = (fps > 0).then(|| Duration::from_secs(1) / fps);
        Self {
            interval,
            last_frame: None,
        }
    }

    /// Earliest moment the next frame may be drawn
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.last_frame, self.interval) {
            (Some(last), Some(interval)) => Some(last + interval),
            _ => None,
        }
    }

    /// Whether a frame may be drawn at `now`
    pub fn ready(&self, now: Instant) -> bool {
        self.next_deadline().is_none_or(|deadline| now >= deadline)
    }

    /// Record that a frame was drawn at `now`
    pub fn mark(&mut self, now: Instant) {
        self.last_frame = Some(now);
    }

    /// How long an idle loop may block waiting for input at `now`.
    ///
    /// Never longer than `idle`, and zero once a frame is due.
    pub fn wait_time(&self, now: Instant, idle: Duration) -> Duration {
        match self.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(idle),
            None => idle,
        }
    }
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_RATE)
    }
}
