use anyhow::Context;
use trial_primes::config::toml_config::TomlConfig;
use trial_primes::core::report::parameter_listing;
use trial_primes::utils::monitor::SystemMonitor;
use trial_primes::utils::{logger, validation::Validate};
use trial_primes::{
    run_scan, CliConfig, PrimeSink, PrimesError, RunSettings, ScanSummary, SystemClock, WriterSink,
};

fn main() {
    // timing covers the whole run, argument handling included
    let clock = SystemClock::start();

    let config = match CliConfig::try_parse_args(std::env::args_os()) {
        Ok(Ok(config)) => config,
        Ok(Err(help_or_version)) => help_or_version.exit(),
        Err(e) => exit_with(&anyhow::Error::new(e)),
    };

    if let Err(e) = run(&config, &clock) {
        exit_with(&e);
    }
}

fn run(config: &CliConfig, clock: &SystemClock) -> anyhow::Result<()> {
    config.validate()?;

    let file = match config.config.as_deref() {
        Some(path) => Some(
            TomlConfig::from_file(path).with_context(|| format!("loading config file '{}'", path))?,
        ),
        None => None,
    };
    let settings = RunSettings::resolve(&config.overrides(), file.as_ref())?;

    // monitoring reports at info level, so it lifts the default filter
    let log_level = settings
        .log_level
        .as_deref()
        .or(settings.monitor.then_some("info"));
    logger::init_cli_logger(config.verbose, log_level);

    tracing::info!("🚀 Starting primes scan");
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Run settings: {:?}", settings);

    let stdout = std::io::stdout();
    let mut sink = WriterSink::new(stdout.lock());

    if settings.diag_print {
        let args: Vec<String> = std::env::args().collect();
        for line in parameter_listing(&args, &settings.bounds()) {
            sink.diagnostic(&line)?;
        }
    }

    let mut monitor = SystemMonitor::new(settings.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }
    monitor.log_stats("Before scan");

    let result = run_scan(&settings, &mut sink, clock)?;

    monitor.log_stats("After scan");
    monitor.log_final_stats();

    let summary = ScanSummary::from(&result).render(settings.summary_format)?;
    sink.write_summary(&summary)?;
    sink.finish().context("flushing output")?;

    tracing::info!(
        "✅ {} primes, {} divisor checks in {:?}",
        result.primes_found,
        result.total_divisor_checks,
        result.elapsed
    );
    Ok(())
}

fn exit_with(err: &anyhow::Error) -> ! {
    let Some(e) = err.downcast_ref::<PrimesError>() else {
        eprintln!("ERROR: {:#}", err);
        std::process::exit(1);
    };

    tracing::error!("❌ {:#}", err);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    if e.shows_usage() {
        eprintln!();
        eprintln!("{}", CliConfig::usage());
        eprintln!("For more information, try '--help'.");
    }
    std::process::exit(e.exit_code());
}
