use interval_eval::Interval;

pub const EPS: f64 = 1e-9;

/// Bounds comparison with a small tolerance, since outward rounding widens
/// results by one ulp per operation.
pub fn assert_ival(actual: Interval, lo: f64, hi: f64) {
    assert!(
        !actual.is_empty(),
        "expected [{}, {}], got {}",
        lo,
        hi,
        actual
    );
    assert!(
        (actual.lo - lo).abs() <= EPS,
        "lo: expected {}, got {}",
        lo,
        actual.lo
    );
    assert!(
        (actual.hi - hi).abs() <= EPS,
        "hi: expected {}, got {}",
        hi,
        actual.hi
    );
}

#[allow(dead_code)]
pub fn assert_empty(actual: Interval) {
    assert!(actual.is_empty(), "expected empty, got {}", actual);
}
