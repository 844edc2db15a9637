pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{CollectingSink, FixedClock, SystemClock, WriterSink};
pub use config::{toml_config::TomlConfig, RunSettings, SettingOverrides};
pub use crate::core::report::ScanSummary;
pub use crate::core::scanner::{PrimeScanner, Primes, REPORT_ONE_AS_PRIME};
pub use domain::model::{PrimeHit, ScanOptions, ScanResult, SearchBounds, SearchInterval, SummaryFormat};
pub use domain::ports::{Clock, PrimeSink};
pub use utils::error::{PrimesError, Result};

/// Resolves the bounds in `settings` and scans them into `sink`.
pub fn run_scan<S: PrimeSink, C: Clock>(settings: &RunSettings, sink: &mut S, clock: &C) -> Result<ScanResult> {
    let interval = crate::core::bounds::resolve(settings.bounds())?;
    PrimeScanner::new(settings.scan_options()).scan(interval, sink, clock)
}
