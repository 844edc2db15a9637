use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the CLI.
///
/// `RUST_LOG` wins over everything; otherwise a level from the config file is
/// used, falling back to `warn` (or `debug` with `--verbose`). The library and
/// the `primes` binary log under separate targets.
pub fn filter_directive(verbose: bool, configured_level: Option<&str>) -> String {
    if verbose {
        return "trial_primes=debug,primes=debug,info".to_string();
    }
    match configured_level {
        Some(level) => format!("trial_primes={0},primes={0},warn", level),
        None => "warn".to_string(),
    }
}

pub fn init_cli_logger(verbose: bool, configured_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, configured_level)));

    // stdout carries the prime listing, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
