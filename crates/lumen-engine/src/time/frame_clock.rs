use std::time::{Duration, Instant};

/// Nominal redraw interval (60 Hz).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    pub frame_index: u64,
}

/// Fixed-rate frame clock.
///
/// Produces [`FrameTime`] snapshots and the deadline of the next scheduled
/// redraw. Delta time is clamped so a stall (debugger, minimized window)
/// shows up as one long frame rather than a huge jump.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    interval: Duration,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(Instant::now(), interval)
    }

    fn starting_at(start: Instant, interval: Duration) -> Self {
        Self {
            last: start,
            frame_index: 0,
            interval,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Resets the baseline, e.g. after the window was hidden.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// When the next frame is due.
    pub fn next_deadline(&self) -> Instant {
        self.last + self.interval
    }

    /// `true` once the next deadline has passed at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline()
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_is_one_interval_after_last_tick() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, DEFAULT_FRAME_INTERVAL);
        assert_eq!(clock.next_deadline(), start + DEFAULT_FRAME_INTERVAL);

        let t = start + Duration::from_millis(20);
        clock.tick_at(t);
        assert_eq!(clock.next_deadline(), t + DEFAULT_FRAME_INTERVAL);
        assert!(!clock.is_due(t));
        assert!(clock.is_due(t + DEFAULT_FRAME_INTERVAL));
    }

    #[test]
    fn dt_is_clamped() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, DEFAULT_FRAME_INTERVAL);

        let stalled = clock.tick_at(start + Duration::from_secs(3));
        assert_eq!(stalled.dt, 0.25);

        let t = stalled.now;
        let instant = clock.tick_at(t);
        assert_eq!(instant.dt, Duration::from_micros(100).as_secs_f32());
    }

    #[test]
    fn frame_index_counts_ticks() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, DEFAULT_FRAME_INTERVAL);
        let a = clock.tick_at(start + Duration::from_millis(16));
        let b = clock.tick_at(start + Duration::from_millis(33));
        assert_eq!((a.frame_index, b.frame_index), (0, 1));
        assert!((b.dt - 0.017).abs() < 1e-6);
    }

    #[test]
    fn default_runs_at_sixty_hertz() {
        let hz = 1.0 / FrameClock::default().interval().as_secs_f64();
        assert!((hz - 60.0).abs() < 1e-3);
    }
}
