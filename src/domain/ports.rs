use crate::domain::model::PrimeHit;
use crate::utils::error::Result;
use std::time::Duration;

/// Receives scanner output in ascending order.
pub trait PrimeSink {
    fn prime(&mut self, hit: &PrimeHit) -> Result<()>;
    fn diagnostic(&mut self, line: &str) -> Result<()>;
}

/// Wall-clock collaborator: how long since the measurement started.
pub trait Clock {
    fn elapsed(&self) -> Duration;
}
