//! Millisecond clocks and per-frame timing.

use std::time::{Duration, Instant};

/// A monotonic millisecond tick source.
pub trait Clock {
    /// Milliseconds since the clock started.
    fn now_ms(&self) -> u64;

    /// Move on to the next frame, `frame_ms` after the previous one.
    fn advance_frame(&mut self, frame_ms: u64);
}

/// Wall-clock time; [`advance_frame`](Clock::advance_frame) sleeps until the
/// next frame deadline.
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
    next_deadline_ms: u64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            next_deadline_ms: 0,
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn advance_frame(&mut self, frame_ms: u64) {
        let now = self.now_ms();
        // Late frames start a fresh schedule instead of bursting to catch up.
        self.next_deadline_ms = (self.next_deadline_ms + frame_ms).max(now);
        let wait = self.next_deadline_ms - now;
        if wait > 0 {
            std::thread::sleep(Duration::from_millis(wait));
        }
    }
}

/// Simulated time that only moves when told to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualClock {
    now_ms: u64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now_ms: start_ms }
    }

    pub fn set(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn advance_frame(&mut self, frame_ms: u64) {
        self.now_ms += frame_ms;
    }
}

/// Lower `dt` bound used when the configured one is unusable.
pub const DEFAULT_MIN_DT: f32 = 0.001;
/// Upper `dt` bound used when the configured one is unusable.
pub const DEFAULT_MAX_DT: f32 = 0.1;

/// Turns consecutive tick readings into a clamped `dt` in seconds.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last_ms: u64,
    min_dt: f32,
    max_dt: f32,
}

impl FrameTimer {
    /// Bounds that are not finite and positive fall back to
    /// [`DEFAULT_MIN_DT`] and [`DEFAULT_MAX_DT`].
    pub fn new(now_ms: u64, min_dt: f32, max_dt: f32) -> Self {
        let min_dt = positive_or(min_dt, DEFAULT_MIN_DT);
        let max_dt = positive_or(max_dt, DEFAULT_MAX_DT);
        Self {
            last_ms: now_ms,
            min_dt,
            max_dt: max_dt.max(min_dt),
        }
    }

    /// Seconds since the previous call, clamped to `[min_dt, max_dt]`.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.last_ms);
        self.last_ms = now_ms;
        (elapsed as f32 / 1000.0).clamp(self.min_dt, self.max_dt)
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        tracing::warn!("Ignoring frame time bound {value}, using {fallback}");
        fallback
    }
}

/// Frames counted over one-second windows.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_start_ms: u64,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(now_ms: u64) -> Self {
        Self {
            window_start_ms: now_ms,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Count one frame. Returns the new rate when a window of at least one
    /// second has closed.
    pub fn frame(&mut self, now_ms: u64) -> Option<f32> {
        self.frames += 1;
        let elapsed = now_ms.saturating_sub(self.window_start_ms);
        if elapsed < 1000 {
            return None;
        }
        self.fps = self.frames as f32 * 1000.0 / elapsed as f32;
        self.frames = 0;
        self.window_start_ms = now_ms;
        Some(self.fps)
    }

    /// Rate from the last closed window.
    pub fn fps(&self) -> f32 {
        self.fps
    }
}
