use std::time::{Duration, Instant};

/// Length of one FPS sampling window.
pub const FPS_WINDOW: Duration = Duration::from_secs(1);

/// Largest frame delta fed into the simulation, in seconds. A stall
/// (window drag, debugger) must not teleport the player through walls.
pub const MAX_DT: f64 = 0.1;

/// Variable-rate frame clock: hands out the time since the previous frame.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Seconds elapsed since the previous call, clamped to [`MAX_DT`].
    pub fn tick(&mut self, now: Instant) -> f64 {
        let dt = now.saturating_duration_since(self.last).as_secs_f64();
        self.last = now;
        dt.min(MAX_DT)
    }
}

/// Counts frames and publishes the count once per elapsed second.
#[derive(Debug)]
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
    last: u32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
            last: 0,
        }
    }

    /// Record one frame. Returns the new FPS value when a window closes.
    pub fn frame(&mut self, now: Instant) -> Option<u32> {
        self.frames += 1;
        if now.saturating_duration_since(self.window_start) < FPS_WINDOW {
            return None;
        }
        self.last = self.frames;
        self.frames = 0;
        self.window_start = now;
        Some(self.last)
    }

    /// Most recently published value (`0` before the first full second).
    #[inline]
    pub fn fps(&self) -> u32 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_is_published_once_per_second() {
        let t0 = Instant::now();
        let mut fps = FpsCounter::new(t0);
        for i in 1..60 {
            assert_eq!(fps.frame(t0 + Duration::from_millis(i * 16)), None);
        }
        assert_eq!(fps.fps(), 0);
        // 60th frame crosses the 1 s boundary
        assert_eq!(fps.frame(t0 + Duration::from_millis(1000)), Some(60));
        assert_eq!(fps.fps(), 60);
        // counting restarts
        assert_eq!(fps.frame(t0 + Duration::from_millis(1016)), None);
    }

    #[test]
    fn frame_delta_is_clamped() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);
        let dt = clock.tick(t0 + Duration::from_millis(20));
        assert!((dt - 0.02).abs() < 1e-9);
        assert_eq!(clock.tick(t0 + Duration::from_secs(5)), MAX_DT);
        // clock going backwards yields zero, not a panic
        assert_eq!(clock.tick(t0), 0.0);
    }
}
