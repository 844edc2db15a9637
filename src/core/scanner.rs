use crate::core::isqrt::integer_sqrt;
use crate::domain::model::{PrimeHit, ScanOptions, ScanResult, SearchInterval};
use crate::domain::ports::{Clock, PrimeSink};
use crate::utils::error::Result;
use chrono::Utc;
use std::iter::FusedIterator;

/// Whether 1 is reported as prime.
///
/// Trial division tests no divisor for 1, so the classic loop lets it
/// through. The listing keeps it unless the caller opts out.
pub const REPORT_ONE_AS_PRIME: bool = true;

/// Lazy ascending sequence of primes in a [`SearchInterval`].
///
/// Divisor checks are attributed to the next reported prime: checks spent on
/// composites carry forward until a prime is found.
#[derive(Debug, Clone)]
pub struct Primes {
    next: u64,
    end: u64,
    report_one: bool,
    pending: u64,
    total: u64,
}

impl Primes {
    pub fn new(interval: SearchInterval, report_one: bool) -> Self {
        Self {
            next: interval.start(),
            end: interval.end(),
            report_one,
            pending: 0,
            total: 0,
        }
    }

    /// Checks attributed to primes yielded so far.
    pub fn total_divisor_checks(&self) -> u64 {
        self.total
    }

    /// Checks not yet attributed to any prime.
    pub fn pending_divisor_checks(&self) -> u64 {
        self.pending
    }
}

impl Iterator for Primes {
    type Item = PrimeHit;

    fn next(&mut self) -> Option<PrimeHit> {
        while self.next < self.end {
            let x = self.next;
            // x < end <= i64::MAX, so this stays inside u64
            self.next += 2;

            let mut max_divisor = integer_sqrt(x);
            if max_divisor % 2 == 0 {
                max_divisor += 1;
            }

            // None until the first division runs
            let mut remainder: Option<u64> = None;
            let mut divisor = 3;
            while divisor <= max_divisor && remainder != Some(0) {
                remainder = Some(x % divisor);
                divisor += 2;
                self.pending += 1;
            }

            if remainder == Some(0) || (x == 1 && !self.report_one) {
                continue;
            }

            let hit = PrimeHit {
                value: x,
                divisor_checks: self.pending,
                max_divisor,
            };
            self.total += self.pending;
            self.pending = 0;
            return Some(hit);
        }
        None
    }
}

impl FusedIterator for Primes {}

pub struct PrimeScanner {
    options: ScanOptions,
}

impl PrimeScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    pub fn primes(&self, interval: SearchInterval) -> Primes {
        Primes::new(interval, self.options.report_one)
    }

    /// Streams every prime of `interval` into `sink` and measures the run with `clock`.
    pub fn scan<S, C>(&self, interval: SearchInterval, sink: &mut S, clock: &C) -> Result<ScanResult>
    where
        S: PrimeSink,
        C: Clock,
    {
        let started_at = Utc::now();
        let diag = self.options.diag_print;

        tracing::debug!(
            "Scanning [{}, {}) with report_one = {}",
            interval.start(),
            interval.end(),
            self.options.report_one
        );

        if diag {
            sink.diagnostic("")?;
            sink.diagnostic("Scan parameters:")?;
            sink.diagnostic(&format!("  effective_start = {}", interval.start()))?;
            sink.diagnostic(&format!("  end_search      = {}", interval.end()))?;
            sink.diagnostic(&format!("  report_one      = {}", self.options.report_one))?;
            sink.diagnostic("")?;
        }

        let mut primes = self.primes(interval);
        let mut primes_found = 0u64;
        for hit in primes.by_ref() {
            sink.prime(&hit)?;
            if diag {
                sink.diagnostic(&format!(
                    "  x = {}, max_divisor = {}, divisor_checks = {}",
                    hit.value, hit.max_divisor, hit.divisor_checks
                ))?;
            }
            primes_found += 1;
        }

        let elapsed = clock.elapsed();
        tracing::debug!("Scan finished: {} primes in {:?}", primes_found, elapsed);

        Ok(ScanResult {
            interval,
            primes_found,
            total_divisor_checks: primes.total_divisor_checks(),
            unattributed_divisor_checks: primes.pending_divisor_checks(),
            elapsed,
            started_at,
        })
    }
}

impl Default for PrimeScanner {
    fn default() -> Self {
        Self::new(ScanOptions::default())
    }
}
