//! Frame rate meter
//!
//! Counts frames and reports frames-per-second once per sampling window,
//! for the host's window title.

use std::time::{Duration, Instant};

/// Frames-per-second over a fixed sampling window.
#[derive(Debug, Clone)]
pub struct FrameRateMeter {
    window: Duration,
    window_start: Instant,
    frames: u32,
    fps: f32,
    last_frame: Instant,
    frame_time_ms: f32,
}

impl FrameRateMeter {
    /// Create a meter that updates its reading every `window`.
    pub fn new(window: Duration, now: Instant) -> Self {
        Self {
            window,
            window_start: now,
            frames: 0,
            fps: 0.0,
            last_frame: now,
            frame_time_ms: 0.0,
        }
    }

    /// Record a frame at `now`. Returns the new reading when the window rolled over.
    pub fn record_frame(&mut self, now: Instant) -> Option<f32> {
        self.frame_time_ms = now.saturating_duration_since(self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;
        self.frames += 1;

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed >= self.window {
            self.fps = self.frames as f32 / elapsed.as_secs_f32();
            self.frames = 0;
            self.window_start = now;
            Some(self.fps)
        } else {
            None
        }
    }

    /// Last completed reading.
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Duration of the most recent frame in milliseconds.
    pub fn frame_time_ms(&self) -> f32 {
        self.frame_time_ms
    }
}

impl Default for FrameRateMeter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_reading_before_window() {
        let start = Instant::now();
        let mut meter = FrameRateMeter::new(Duration::from_secs(1), start);

        for i in 1..10 {
            assert_eq!(meter.record_frame(start + Duration::from_millis(i * 50)), None);
        }
        assert_eq!(meter.fps(), 0.0);
        assert!((meter.frame_time_ms() - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_reading_after_window() {
        let start = Instant::now();
        let mut meter = FrameRateMeter::new(Duration::from_secs(1), start);

        let mut reading = None;
        for i in 1..=60 {
            reading = meter.record_frame(start + Duration::from_millis(i * 1000 / 60));
        }

        let fps = reading.expect("window should have rolled over on the last frame");
        assert!((fps - 60.0).abs() < 0.5);
        assert_eq!(meter.fps(), fps);
    }
}
