use std::collections::VecDeque;
use std::time::Duration;

/// Rolling frame-rate estimate over the most recent frames.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window: usize,
    samples: VecDeque<Duration>,
    total: Duration,
}

impl FpsCounter {
    /// Number of frame intervals averaged by default.
    pub const DEFAULT_WINDOW: usize = 10;

    pub fn new() -> Self {
        Self::with_window(Self::DEFAULT_WINDOW)
    }

    pub fn with_window(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            samples: VecDeque::with_capacity(window),
            total: Duration::ZERO,
        }
    }

    /// Records one frame interval.
    pub fn record(&mut self, frame_time: Duration) {
        if self.samples.len() == self.window {
            if let Some(old) = self.samples.pop_front() {
                self.total -= old;
            }
        }
        self.samples.push_back(frame_time);
        self.total += frame_time;
    }

    /// Average frames per second over the window, `0.0` until a non-zero
    /// interval has been recorded.
    pub fn fps(&self) -> f32 {
        let secs = self.total.as_secs_f32();
        if self.samples.is_empty() || secs <= 0.0 {
            return 0.0;
        }
        self.samples.len() as f32 / secs
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Window caption showing the integer part of `fps`.
pub fn fps_caption(fps: f32) -> String {
    format!("FPS: {}", fps.max(0.0) as u32)
}
