use std::time::{Duration, Instant};

/// Snapshot taken when a loop iteration ends.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous iteration ended, clamped.
    pub dt: f32,

    /// Index of the iteration that just ended.
    pub frame_index: u64,
}

/// Counts loop iterations and measures the time between them.
///
/// Every iteration ticks exactly once, whether it presented a frame or
/// skipped it, so `frame_index` is the iteration count.
///
/// Delta time is clamped to avoid pathological values when the loop is
/// paused by the debugger or stalls on presentation.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Index of the iteration currently in progress.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Ends the current iteration.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
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

/// Milliseconds elapsed since `start`, as a float for latency logging.
pub fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
