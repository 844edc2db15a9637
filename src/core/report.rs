use crate::domain::model::{ScanResult, SearchBounds, SummaryFormat};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// Divisor checks per second, floor-divided.
///
/// Integer arithmetic over nanoseconds; a zero elapsed time yields 0.
pub fn divisors_per_second(total_divisor_checks: u64, elapsed: Duration) -> u64 {
    let nanos = elapsed.as_nanos();
    if nanos == 0 {
        return 0;
    }
    let rate = u128::from(total_divisor_checks) * 1_000_000_000 / nanos;
    u64::try_from(rate).unwrap_or(u64::MAX)
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    pub start: u64,
    pub end: u64,
    pub primes_found: u64,
    pub total_divisor_checks: u64,
    pub unattributed_divisor_checks: u64,
    pub elapsed_seconds: f64,
    pub divisors_per_second: u64,
    pub started_at: DateTime<Utc>,
}

impl From<&ScanResult> for ScanSummary {
    fn from(result: &ScanResult) -> Self {
        Self {
            start: result.interval.start(),
            end: result.interval.end(),
            primes_found: result.primes_found,
            total_divisor_checks: result.total_divisor_checks,
            unattributed_divisor_checks: result.unattributed_divisor_checks,
            elapsed_seconds: result.elapsed.as_secs_f64(),
            divisors_per_second: divisors_per_second(result.total_divisor_checks, result.elapsed),
            started_at: result.started_at,
        }
    }
}

impl ScanSummary {
    pub fn render(&self, format: SummaryFormat) -> Result<String> {
        match format {
            SummaryFormat::Text => Ok(self.to_text()),
            SummaryFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }

    fn to_text(&self) -> String {
        format!(
            "Total divisors checked      = {}\nDivisors checked per second = {}\n",
            self.total_divisor_checks, self.divisors_per_second
        )
    }
}

/// Diagnostic block printed before the scan: raw arguments and resolved parameters.
pub fn parameter_listing(args: &[String], bounds: &SearchBounds) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "primes DIAGNOSTIC OUTPUT:".to_string(),
        String::new(),
        "Command line arguments:".to_string(),
        String::new(),
    ];
    for (i, arg) in args.iter().enumerate() {
        lines.push(format!("  iarg = {}, arg = '{}'", i, arg));
    }
    lines.push(String::new());
    lines.push("Parameters set from command line arguments:".to_string());
    lines.push(String::new());
    lines.push(format!("  start_search   = {}", bounds.start));
    lines.push(format!("  end_search     = {}", bounds.end));
    lines.push(format!("  i64::MAX       = {}", i64::MAX));
    lines
}
