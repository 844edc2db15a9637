use std::time::Duration;
use trial_primes::core::bounds::resolve;
use trial_primes::core::isqrt::integer_sqrt;
use trial_primes::{
    run_scan, CollectingSink, FixedClock, PrimeScanner, PrimesError, RunSettings, SearchBounds,
    WriterSink,
};

fn values(start: i64, end: i64) -> Vec<u64> {
    let interval = resolve(SearchBounds::new(start, end)).unwrap();
    PrimeScanner::default().primes(interval).map(|h| h.value).collect()
}

fn is_prime_naive(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

#[test]
fn test_one_to_two_reports_one() {
    assert_eq!(values(1, 2), vec![1]);
}

#[test]
fn test_one_to_twenty() {
    assert_eq!(values(1, 20), vec![1, 3, 5, 7, 11, 13, 17, 19]);
}

#[test]
fn test_ten_to_twenty() {
    assert_eq!(values(10, 20), vec![11, 13, 17, 19]);
}

#[test]
fn test_two_is_never_reported() {
    assert_eq!(values(2, 4), vec![3]);
    assert!(!values(0, 100).contains(&2));
}

#[test]
fn test_error_scenarios() {
    let err = resolve(SearchBounds::new(-1, 100)).unwrap_err();
    assert!(matches!(err, PrimesError::InvalidBounds { .. }));
    assert_eq!(err.exit_code(), 1);

    let err = resolve(SearchBounds::new(20, 10)).unwrap_err();
    assert!(matches!(err, PrimesError::InvalidRange { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_attribution_nine_to_sixteen() {
    let settings = RunSettings {
        bounds: SearchBounds::new(9, 16),
        ..RunSettings::default()
    };
    let mut sink = CollectingSink::default();
    let result = run_scan(&settings, &mut sink, &FixedClock::new(Duration::from_secs(1))).unwrap();

    let listing: Vec<(u64, u64)> = sink.primes.iter().map(|h| (h.value, h.divisor_checks)).collect();
    assert_eq!(listing, vec![(11, 2), (13, 1)]);
    assert_eq!(result.total_divisor_checks, 3);
    assert_eq!(result.unattributed_divisor_checks, 1);
}

#[test]
fn test_listing_matches_naive_primality() {
    // every odd number above 1 in range, classified independently
    let found = values(1, 20_000);
    let expected: Vec<u64> = std::iter::once(1)
        .chain((3..20_000u64).step_by(2).filter(|&n| is_prime_naive(n)))
        .collect();
    assert_eq!(found, expected);
}

#[test]
fn test_emitted_values_are_odd_in_range_and_undivided() {
    let (start, end) = (1_000_000i64, 1_010_000i64);
    for p in values(start, end) {
        assert_eq!(p % 2, 1);
        assert!(p > start as u64 && p < end as u64);
        let root = integer_sqrt(p);
        assert!((3..=root).step_by(2).all(|d| p % d != 0), "{} has a divisor", p);
    }
}

#[test]
fn test_divisor_totals_add_up() {
    let interval = resolve(SearchBounds::new(1, 10_000)).unwrap();
    let mut primes = PrimeScanner::default().primes(interval);
    let attributed: u64 = primes.by_ref().map(|h| h.divisor_checks).sum();
    assert_eq!(attributed, primes.total_divisor_checks());
}

#[test]
fn test_repeat_scan_is_identical() {
    let settings = RunSettings {
        bounds: SearchBounds::new(500, 3_000),
        ..RunSettings::default()
    };
    let clock = FixedClock::new(Duration::from_millis(1));
    let mut first = CollectingSink::default();
    let mut second = CollectingSink::default();

    let a = run_scan(&settings, &mut first, &clock).unwrap();
    let b = run_scan(&settings, &mut second, &clock).unwrap();

    assert_eq!(first.primes, second.primes);
    assert_eq!(a.total_divisor_checks, b.total_divisor_checks);
    assert_eq!(a.primes_found, b.primes_found);
}

#[test]
fn test_excluding_one_keeps_other_counts() {
    let with_one = RunSettings {
        bounds: SearchBounds::new(1, 50),
        ..RunSettings::default()
    };
    let without_one = RunSettings {
        report_one: false,
        ..with_one.clone()
    };
    let clock = FixedClock::new(Duration::ZERO);
    let mut a = CollectingSink::default();
    let mut b = CollectingSink::default();

    let ra = run_scan(&with_one, &mut a, &clock).unwrap();
    let rb = run_scan(&without_one, &mut b, &clock).unwrap();

    assert_eq!(a.primes[1..], b.primes[..]);
    assert_eq!(ra.total_divisor_checks, rb.total_divisor_checks);
}

#[test]
fn test_writer_sink_output_format() {
    let settings = RunSettings {
        bounds: SearchBounds::new(1, 20),
        ..RunSettings::default()
    };
    let mut sink = WriterSink::new(Vec::new());
    run_scan(&settings, &mut sink, &FixedClock::new(Duration::from_secs(1))).unwrap();
    let out = String::from_utf8(sink.finish().unwrap()).unwrap();

    assert_eq!(
        out,
        "1 [0]\n3 [0]\n5 [1]\n7 [1]\n11 [2]\n13 [1]\n17 [3]\n19 [2]\n"
    );
}

#[test]
fn test_diag_switch_at_runtime() {
    let settings = RunSettings {
        bounds: SearchBounds::new(1, 10),
        diag_print: true,
        ..RunSettings::default()
    };
    let mut sink = CollectingSink::default();
    run_scan(&settings, &mut sink, &FixedClock::new(Duration::ZERO)).unwrap();
    assert!(sink.diagnostics.iter().any(|l| l == "Scan parameters:"));
    assert_eq!(
        sink.diagnostics.last().map(String::as_str),
        Some("  x = 7, max_divisor = 3, divisor_checks = 1")
    );
}
