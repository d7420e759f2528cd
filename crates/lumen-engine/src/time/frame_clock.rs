use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time since the previous tick, in seconds (clamped).
    pub dt: f32,

    /// Unclamped time since the previous tick.
    pub raw_dt: Duration,

    /// Time since the clock was created. Drives time-based animation.
    pub elapsed: Duration,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

impl FrameTime {
    /// Elapsed time in whole milliseconds.
    #[inline]
    pub fn ticks_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}

/// Frame clock producing `FrameTime` snapshots.
///
/// `dt` is clamped so a debugger pause or a stalled frame does not feed a huge
/// step into per-frame updates. `elapsed` is never clamped.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates a clock whose baseline is `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            last: start,
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
        }
    }

    /// Advances the clock to the current instant.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let raw_dt = now.saturating_duration_since(self.last);
        let dt = raw_dt.clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            raw_dt,
            elapsed: now.saturating_duration_since(self.start),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
