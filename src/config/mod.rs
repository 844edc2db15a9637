#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::scanner::REPORT_ONE_AS_PRIME;
use crate::domain::model::{ScanOptions, SearchBounds, SummaryFormat};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Values given on the command line; `None`/`false` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingOverrides {
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub diag_print: bool,
    pub exclude_one: bool,
    pub summary_format: Option<SummaryFormat>,
    pub monitor: bool,
}

/// Everything a run needs, after merging command line, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub bounds: SearchBounds,
    pub diag_print: bool,
    pub report_one: bool,
    pub summary_format: SummaryFormat,
    pub monitor: bool,
    pub log_level: Option<String>,
}

impl RunSettings {
    /// Command line beats config file beats built-in default.
    pub fn resolve(overrides: &SettingOverrides, file: Option<&TomlConfig>) -> Result<Self> {
        if let Some(file) = file {
            file.validate()?;
        }

        let start = overrides
            .start
            .or_else(|| file.and_then(|f| f.search.start))
            .unwrap_or(SearchBounds::DEFAULT_START);
        let end = overrides
            .end
            .or_else(|| file.and_then(|f| f.search.end))
            .unwrap_or(SearchBounds::DEFAULT_END);

        let report_one = if overrides.exclude_one {
            false
        } else {
            file.and_then(TomlConfig::report_one).unwrap_or(REPORT_ONE_AS_PRIME)
        };

        let summary_format = match overrides.summary_format {
            Some(format) => format,
            None => match file {
                Some(f) => f.summary_format()?.unwrap_or_default(),
                None => SummaryFormat::default(),
            },
        };

        Ok(Self {
            bounds: SearchBounds::new(start, end),
            diag_print: overrides.diag_print || file.and_then(TomlConfig::diag_print).unwrap_or(false),
            report_one,
            summary_format,
            monitor: overrides.monitor || file.map(TomlConfig::monitoring_enabled).unwrap_or(false),
            log_level: file.and_then(TomlConfig::log_level).map(str::to_string),
        })
    }

    /// The plain `{start, end}` handed to the bounds resolver.
    pub fn bounds(&self) -> SearchBounds {
        self.bounds
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            diag_print: self.diag_print,
            report_one: self.report_one,
        }
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            bounds: SearchBounds::default(),
            diag_print: false,
            report_one: REPORT_ONE_AS_PRIME,
            summary_format: SummaryFormat::Text,
            monitor: false,
            log_level: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let settings = RunSettings::resolve(&SettingOverrides::default(), None).unwrap();
        assert_eq!(settings, RunSettings::default());
        assert_eq!(settings.bounds(), SearchBounds::new(1, i64::MAX));
    }

    #[test]
    fn test_file_fills_gaps_and_cli_wins() {
        let file = TomlConfig::from_toml_str(
            r#"
[search]
start = 100
end = 200

[output]
diag_print = true
report_one = true
summary_format = "json"
"#,
        )
        .unwrap();
        let overrides = SettingOverrides {
            end: Some(150),
            exclude_one: true,
            summary_format: Some(SummaryFormat::Text),
            ..SettingOverrides::default()
        };

        let settings = RunSettings::resolve(&overrides, Some(&file)).unwrap();
        assert_eq!(settings.bounds(), SearchBounds::new(100, 150));
        assert!(settings.diag_print);
        assert!(!settings.report_one);
        assert_eq!(settings.summary_format, SummaryFormat::Text);
    }

    #[test]
    fn test_invalid_file_rejected() {
        let file = TomlConfig::from_toml_str("[output]\nsummary_format = \"csv\"\n").unwrap();
        assert!(RunSettings::resolve(&SettingOverrides::default(), Some(&file)).is_err());
    }

    #[test]
    fn test_scan_options_follow_settings() {
        let settings = RunSettings {
            diag_print: true,
            report_one: false,
            ..RunSettings::default()
        };
        let options = settings.scan_options();
        assert!(options.diag_print);
        assert!(!options.report_one);
    }
}
