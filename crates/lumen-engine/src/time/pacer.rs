use std::time::{Duration, Instant};

/// Caps the redraw rate.
///
/// After each presented frame the next deadline is set one period later;
/// the runtime waits for it before requesting another redraw. A target of
/// `0` fps disables the cap.
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Option<Duration>,
    next: Instant,
}

impl FramePacer {
    pub fn new(target_fps: u32, now: Instant) -> Self {
        let period = (target_fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(target_fps)));
        Self { period, next: now }
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Instant at which the next frame may start.
    pub fn deadline(&self) -> Instant {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Records that a frame started at `frame_start`.
    pub fn mark_frame(&mut self, frame_start: Instant) {
        self.next = match self.period {
            Some(p) => frame_start + p,
            None => frame_start,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_due_immediately() {
        let t0 = Instant::now();
        assert!(FramePacer::new(60, t0).is_due(t0));
    }

    #[test]
    fn deadline_is_one_period_after_frame() {
        let t0 = Instant::now();
        let mut p = FramePacer::new(50, t0);
        p.mark_frame(t0);

        assert_eq!(p.deadline(), t0 + Duration::from_millis(20));
        assert!(!p.is_due(t0 + Duration::from_millis(19)));
        assert!(p.is_due(t0 + Duration::from_millis(20)));
    }

    #[test]
    fn zero_target_is_uncapped() {
        let t0 = Instant::now();
        let mut p = FramePacer::new(0, t0);
        p.mark_frame(t0);

        assert!(p.period().is_none());
        assert!(p.is_due(t0));
    }
}
