use crate::utils::error::PrimesError;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Raw bounds as the user supplied them, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBounds {
    pub start: i64,
    pub end: i64,
}

impl SearchBounds {
    pub const DEFAULT_START: i64 = 1;
    pub const DEFAULT_END: i64 = i64::MAX;

    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

impl Default for SearchBounds {
    fn default() -> Self {
        Self::new(Self::DEFAULT_START, Self::DEFAULT_END)
    }
}

/// Validated half-open interval `[start, end)` whose `start` is odd.
///
/// Only the bounds resolver builds these, so `start <= end <= i64::MAX`
/// holds. Rounding an even start up can make the interval empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchInterval {
    start: u64,
    end: u64,
}

impl SearchInterval {
    pub(crate) fn new(start: u64, end: u64) -> Self {
        debug_assert!(start % 2 == 1 && start <= end);
        Self { start, end }
    }

    /// First candidate tested (the effective start).
    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A reported prime with the divisor checks attributed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeHit {
    pub value: u64,
    /// Checks since the previous reported prime, composites in between included.
    pub divisor_checks: u64,
    pub max_divisor: u64,
}

/// Behaviour switches for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub diag_print: bool,
    pub report_one: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            diag_print: false,
            report_one: crate::core::scanner::REPORT_ONE_AS_PRIME,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub interval: SearchInterval,
    pub primes_found: u64,
    pub total_divisor_checks: u64,
    /// Checks spent on composites after the last reported prime.
    pub unattributed_divisor_checks: u64,
    pub elapsed: Duration,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

impl SummaryFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];
}

impl FromStr for SummaryFormat {
    type Err = PrimesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(SummaryFormat::Text),
            "json" => Ok(SummaryFormat::Json),
            other => Err(PrimesError::InvalidConfigValueError {
                field: "output.summary_format".to_string(),
                value: other.to_string(),
                reason: format!("Allowed values: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

impl fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryFormat::Text => write!(f, "text"),
            SummaryFormat::Json => write!(f, "json"),
        }
    }
}
