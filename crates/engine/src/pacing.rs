//! Fixed-rate frame pacing.
//!
//! The loop sleeps once per frame until the next deadline. A late frame moves
//! the schedule forward instead of trying to catch up.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next: Instant,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    pub fn starting_at(fps: u32, now: Instant) -> Self {
        let interval = Duration::from_nanos(1_000_000_000 / fps.max(1) as u64);
        Self {
            interval,
            next: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whole milliseconds per frame.
    pub fn frame_ms(&self) -> u32 {
        self.interval.as_millis() as u32
    }

    /// Time left until the next frame is due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Move the deadline one interval ahead, dropping any backlog.
    pub fn advance(&mut self, now: Instant) {
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
    }

    /// Sleep until the current deadline, then schedule the next one.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.advance(Instant::now());
    }
}
