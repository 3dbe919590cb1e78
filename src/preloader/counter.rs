use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::foundation::error::{ApertureError, ApertureResult};

/// Final count; reaching it completes the preloader.
pub const PRELOADER_MAX: u8 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "state", content = "count", rename_all = "snake_case")]
pub enum PreloaderState {
    Running(u8),
    Complete,
}

/// Percentage counter shown while the page loads. Counts up by one per tick and stops for good
/// at [`PRELOADER_MAX`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PreloaderCounter {
    count: u8,
}

impl PreloaderCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn is_complete(&self) -> bool {
        self.count >= PRELOADER_MAX
    }

    pub fn state(&self) -> PreloaderState {
        if self.is_complete() {
            PreloaderState::Complete
        } else {
            PreloaderState::Running(self.count)
        }
    }

    pub fn tick(&mut self) -> PreloaderState {
        if !self.is_complete() {
            self.count += 1;
        }
        self.state()
    }
}

/// Source of the wait before the next counter tick.
pub trait TickDelay {
    fn next_delay(&mut self) -> Duration;
}

/// Same delay every tick.
#[derive(Clone, Copy, Debug)]
pub struct FixedDelay(pub Duration);

impl TickDelay for FixedDelay {
    fn next_delay(&mut self) -> Duration {
        self.0
    }
}

/// Uniformly random delay in `[min, max]`, so the count never ticks at a mechanical rate.
#[derive(Clone, Debug)]
pub struct JitterDelay<R = StdRng> {
    min: Duration,
    max: Duration,
    rng: R,
}

impl JitterDelay<StdRng> {
    pub fn from_entropy(min: Duration, max: Duration) -> ApertureResult<Self> {
        Self::with_rng(min, max, StdRng::from_entropy())
    }

    pub fn seeded(min: Duration, max: Duration, seed: u64) -> ApertureResult<Self> {
        Self::with_rng(min, max, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> JitterDelay<R> {
    pub fn with_rng(min: Duration, max: Duration, rng: R) -> ApertureResult<Self> {
        if min > max {
            return Err(ApertureError::validation(
                "tick delay min must be <= max",
            ));
        }
        Ok(Self { min, max, rng })
    }
}

impl<R: Rng> TickDelay for JitterDelay<R> {
    fn next_delay(&mut self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        self.rng.gen_range(self.min..=self.max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preloader/counter.rs"]
mod tests;
