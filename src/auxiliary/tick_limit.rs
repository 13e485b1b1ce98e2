use std::time::{Duration, Instant};

/// Lets a simulation advance at most `max_tps` times per second without
/// blocking the event loop.
pub struct TickLimiter {
    target_ticktime: Duration,
    tick_timer: Instant,
    ticktime_smoothed: f64,
}

impl Default for TickLimiter {
    fn default() -> Self {
        Self {
            target_ticktime: Duration::ZERO,
            tick_timer: Instant::now(),
            ticktime_smoothed: 0.,
        }
    }
}

impl TickLimiter {
    pub fn new(max_tps: f64) -> Self {
        let mut limiter = Self::default();
        limiter.set_max_tps(max_tps);
        limiter
    }

    pub fn tps(&self) -> f64 {
        1. / self.ticktime_smoothed
    }

    pub fn set_max_tps(&mut self, max_tps: f64) {
        self.target_ticktime = Duration::from_secs_f64(1. / max_tps);
    }

    /// Returns `true` and restarts the timer if a tick is due.
    pub fn ready(&mut self) -> bool {
        let elapsed = self.tick_timer.elapsed();
        if elapsed < self.target_ticktime {
            return false;
        }
        self.ticktime_smoothed += (elapsed.as_secs_f64() - self.ticktime_smoothed) * 0.1;
        self.tick_timer = Instant::now();
        true
    }
}
