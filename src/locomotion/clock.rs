use crate::error::{KinematicsError, Result};

/// Default tick period in seconds, the rate the default tuning assumes.
pub const DEFAULT_PERIOD: f64 = 0.033;
const DEFAULT_MAX_CATCH_UP: u32 = 5;

/// Turns host frame times into whole fixed-length ticks.
///
/// Motion constants are per tick, so hosts with a different frame rate step the
/// creature through this clock instead of scaling the constants.
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: f64,
    accumulator: f64,
    max_catch_up: u32,
}

impl FrameClock {
    /// `period` is in seconds and must be positive and finite.
    pub fn new(period: f64) -> Result<Self> {
        if !(period.is_finite() && period > 0.0) {
            return Err(KinematicsError::InvalidPeriod(period));
        }
        Ok(Self {
            period,
            accumulator: 0.0,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
        })
    }

    /// Caps how many ticks one `advance` may return; time beyond that is dropped.
    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// Adds `elapsed` seconds and returns how many ticks are now due.
    pub fn advance(&mut self, elapsed: f64) -> u32 {
        if !(elapsed.is_finite() && elapsed > 0.0) {
            return 0;
        }

        self.accumulator += elapsed;
        let due = (self.accumulator / self.period).floor();
        self.accumulator -= due * self.period;

        let due = due as u64;
        if due > u64::from(self.max_catch_up) {
            log::debug!("frame clock dropped {} ticks", due - u64::from(self.max_catch_up));
        }
        due.min(u64::from(self.max_catch_up)) as u32
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            accumulator: 0.0,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
        }
    }
}
