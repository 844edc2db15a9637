use crate::domain::ports::Clock;
use std::time::{Duration, Instant};

/// Wall-clock time since [`SystemClock::start`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Always reports the same elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    elapsed: Duration,
}

impl FixedClock {
    pub fn new(elapsed: Duration) -> Self {
        Self { elapsed }
    }
}

impl Clock for FixedClock {
    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
