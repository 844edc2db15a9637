use crate::config::SettingOverrides;
use crate::domain::model::SummaryFormat;
use crate::utils::error::{PrimesError, Result};
use crate::utils::validation::{validate_path, Validate};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

const EXAMPLES: &str = "\
Examples:
  primes -s 1 -e 100            primes below 100 (1 included)
  primes -s 1000000 -e 1001000  a window further out
  primes -e 50 --exclude-one    start at 3
  primes -c primes.toml --diag  bounds from a config file, with trace output
  primes -e 100000 --summary json";

#[derive(Debug, Clone, Parser)]
#[command(name = "primes", version)]
#[command(about = "Lists primes by trial division and reports divisor checks per second")]
#[command(allow_negative_numbers = true, after_help = EXAMPLES)]
pub struct CliConfig {
    /// Start of the search interval [default: 1]
    #[arg(short = 's', long = "start", value_name = "START")]
    pub start: Option<i64>,

    /// End of the search interval, exclusive [default: 9223372036854775807]
    #[arg(short = 'e', long = "end", value_name = "END")]
    pub end: Option<i64>,

    /// TOML config file; command-line flags override its values
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Print diagnostic trace output
    #[arg(long = "diag")]
    pub diag: bool,

    /// Do not report 1 as prime
    #[arg(long = "exclude-one")]
    pub exclude_one: bool,

    /// Format of the closing summary
    #[arg(long = "summary", value_enum, value_name = "FORMAT")]
    pub summary: Option<SummaryFormat>,

    /// Log CPU and memory usage around the scan
    #[arg(long)]
    pub monitor: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Parses arguments, turning clap failures into [`PrimesError::UnrecognizedOption`].
    ///
    /// Help and version requests come back as `Ok(Err(..))` so the caller can
    /// print them and exit successfully.
    pub fn try_parse_args<I, T>(args: I) -> Result<std::result::Result<Self, clap::Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(config) => Ok(Ok(config)),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Ok(Err(e))
            }
            Err(e) => Err(unrecognized_option(&e)),
        }
    }

    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }

    pub fn overrides(&self) -> SettingOverrides {
        SettingOverrides {
            start: self.start,
            end: self.end,
            diag_print: self.diag,
            exclude_one: self.exclude_one,
            summary_format: self.summary,
            monitor: self.monitor,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

fn unrecognized_option(e: &clap::Error) -> PrimesError {
    let rendered = e.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    PrimesError::UnrecognizedOption {
        message: first_line.trim_start_matches("error: ").to_string(),
    }
}
